//! Stream selection: deciding which audio and subtitle stream to use.
//!
//! Selection follows a fixed precedence per kind: an explicitly configured
//! index wins outright, then language-tag autodetection, then a
//! single-stream shortcut. Nothing resolving is a hard failure for the
//! file; no partial selection is ever produced.

use crate::catalog::{StreamCatalog, StreamDescriptor, StreamKind};
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};

/// The streams chosen for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionResult {
    /// Per-kind index of the audio stream to carry over
    pub audio_index: usize,
    /// Per-kind index of the subtitle stream to burn in; `None` when
    /// subtitles are disabled
    pub subtitle_index: Option<usize>,
}

/// Chooses the audio and subtitle stream for one cataloged file.
///
/// Audio must always resolve. Subtitle selection is skipped when subtitles
/// are disabled; otherwise it must resolve too. An explicitly configured
/// index is used verbatim without range-checking it against the catalog
/// (the engine reports out-of-range specifiers itself).
pub fn select_streams(
    catalog: &StreamCatalog,
    config: &CoreConfig,
) -> CoreResult<SelectionResult> {
    let audio_index = pick_stream(
        StreamKind::Audio,
        &catalog.audio,
        config.forced_audio_index,
        &config.audio_language,
    )
    .ok_or_else(|| {
        CoreError::NoAudioStream(format!(
            "no stream tagged '{}' among {} audio stream(s) and no explicit index given",
            config.audio_language,
            catalog.audio.len()
        ))
    })?;

    let subtitle_index = if config.disable_subtitles {
        log::debug!("Subtitles disabled, skipping subtitle stream selection");
        None
    } else {
        let index = pick_stream(
            StreamKind::Subtitle,
            &catalog.subtitle,
            config.forced_subtitle_index,
            &config.subtitle_language,
        )
        .ok_or_else(|| {
            CoreError::NoSubtitleStream(format!(
                "no stream tagged '{}' among {} subtitle stream(s) and no explicit index given",
                config.subtitle_language,
                catalog.subtitle.len()
            ))
        })?;
        Some(index)
    };

    Ok(SelectionResult {
        audio_index,
        subtitle_index,
    })
}

/// Resolves one stream index from the precedence chain.
///
/// Precedence: explicit index (used verbatim), then the first stream whose
/// language tag equals the preferred language, then index 0 when the kind
/// has exactly one stream. Returns `None` when nothing resolves.
fn pick_stream(
    kind: StreamKind,
    streams: &[StreamDescriptor],
    forced: Option<usize>,
    language: &str,
) -> Option<usize> {
    if let Some(index) = forced {
        log::debug!("Using explicit {} stream index {}", kind.as_str(), index);
        return Some(index);
    }

    if let Some(descriptor) = streams
        .iter()
        .find(|descriptor| descriptor.language.as_deref() == Some(language))
    {
        log::debug!(
            "Autodetected {} stream {} by language tag '{}'",
            kind.as_str(),
            descriptor.index,
            language
        );
        return Some(descriptor.index);
    }

    if streams.len() == 1 {
        log::debug!(
            "Single {} stream present, selecting index 0",
            kind.as_str()
        );
        return Some(0);
    }

    None
}
