//! Engine invocation assembly.
//!
//! Builds the ordered argument lists handed to the external engine: one
//! optional subtitle extraction run and the main transcode run. All
//! mode-dependent tokens (video map target, filter arguments) are resolved
//! before assembly starts, so each invocation is emitted in a single pass
//! and never modified afterwards.

use crate::config::{CoreConfig, Preset};
use crate::error::{CoreError, CoreResult};
use crate::selection::SelectionResult;
use crate::strategy::SubtitleStrategy;
use std::fmt;
use std::path::{Path, PathBuf};

const ENGINE_BINARY: &str = "ffmpeg";

/// One external engine process call: an ordered token list whose first
/// token is the binary name. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInvocation {
    tokens: Vec<String>,
}

impl EngineInvocation {
    /// Starts an invocation of the given engine binary.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            tokens: vec![program.into()],
        }
    }

    /// Appends one argument token.
    #[must_use]
    pub fn arg(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    /// The engine binary name.
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    /// Argument tokens following the binary name, in order.
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    /// All tokens including the binary name.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl fmt::Display for EngineInvocation {
    /// Renders the invocation as a single reproducible command line,
    /// quoting tokens that contain whitespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, token) in self.tokens.iter().enumerate() {
            if position > 0 {
                f.write_str(" ")?;
            }
            if token.chars().any(char::is_whitespace) {
                write!(f, "\"{token}\"")?;
            } else {
                f.write_str(token)?;
            }
        }
        Ok(())
    }
}

/// Everything needed to process one file: an optional extraction run, the
/// transcode run, and the derived paths.
#[derive(Debug, Clone)]
pub struct InvocationPlan {
    /// Subtitle extraction run preceding the transcode, when the strategy
    /// requires one
    pub extraction: Option<EngineInvocation>,
    /// The main transcode run
    pub transcode: EngineInvocation,
    /// Where the transcoded file lands
    pub output_path: PathBuf,
    /// Intermediate subtitle file produced by the extraction run and
    /// consumed by the transcode filter; removed after the transcode
    pub intermediate_subtitle: Option<PathBuf>,
}

/// Mode-dependent pieces of the transcode invocation, resolved before any
/// token is emitted.
struct StrategySlots {
    video_map: &'static str,
    filter: Vec<String>,
    extraction: Option<EngineInvocation>,
    intermediate_subtitle: Option<PathBuf>,
}

/// Assembles the invocation plan for one input file.
///
/// The transcode invocation always carries the same fixed argument order:
/// input, stream maps (video, audio, attachments), video codec and preset,
/// pixel format, audio codec, the strategy's filter arguments, the output
/// path, and the overwrite flag. A dry run substitutes the fastest preset.
pub fn assemble(
    input_path: &Path,
    output_dir: &Path,
    selection: &SelectionResult,
    strategy: SubtitleStrategy,
    config: &CoreConfig,
) -> CoreResult<InvocationPlan> {
    let stem = input_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            CoreError::PathError(format!(
                "Failed to get filename stem for {}",
                input_path.display()
            ))
        })?;
    let output_path = output_dir.join(format!("{stem}.mkv"));

    let preset = if config.dry_run {
        Preset::Ultrafast
    } else {
        config.preset
    };

    let slots = resolve_slots(input_path, output_dir, stem, selection, strategy)?;

    let mut transcode = EngineInvocation::new(ENGINE_BINARY)
        .arg("-i")
        .arg(input_path.to_string_lossy())
        .arg("-map")
        .arg(slots.video_map)
        .arg("-map")
        .arg(format!("0:a:{}", selection.audio_index))
        .arg("-map")
        .arg("0:t")
        .arg("-vcodec")
        .arg("libx264")
        .arg("-profile:v")
        .arg("high")
        .arg("-preset")
        .arg(preset.as_str())
        .arg("-pix_fmt")
        .arg("yuv420p")
        .arg("-acodec")
        .arg("libmp3lame");
    for token in slots.filter {
        transcode = transcode.arg(token);
    }
    let transcode = transcode.arg(output_path.to_string_lossy()).arg("-y");

    if let Some(ref extraction) = slots.extraction {
        log::debug!("Assembled extraction invocation: {extraction}");
    }
    log::debug!("Assembled transcode invocation: {transcode}");

    Ok(InvocationPlan {
        extraction: slots.extraction,
        transcode,
        output_path,
        intermediate_subtitle: slots.intermediate_subtitle,
    })
}

/// Resolves the mode-dependent slots for the given strategy.
fn resolve_slots(
    input_path: &Path,
    output_dir: &Path,
    stem: &str,
    selection: &SelectionResult,
    strategy: SubtitleStrategy,
) -> CoreResult<StrategySlots> {
    let burn_index = || {
        selection.subtitle_index.ok_or_else(|| {
            CoreError::OperationFailed(
                "subtitle burn-in requires a selected subtitle stream".to_string(),
            )
        })
    };

    match strategy {
        SubtitleStrategy::SoftDisabled => Ok(StrategySlots {
            video_map: "0:v:0",
            filter: Vec::new(),
            extraction: None,
            intermediate_subtitle: None,
        }),
        SubtitleStrategy::BurnFromContainer => {
            let index = burn_index()?;
            Ok(StrategySlots {
                video_map: "0:v:0",
                filter: vec![
                    "-vf".to_string(),
                    format!(
                        "subtitles='{}':stream_index={}",
                        filter_path(input_path),
                        index
                    ),
                ],
                extraction: None,
                intermediate_subtitle: None,
            })
        }
        SubtitleStrategy::BurnViaExtraction => {
            let index = burn_index()?;
            let intermediate = output_dir.join(format!("{stem}.ass"));
            let extraction = EngineInvocation::new(ENGINE_BINARY)
                .arg("-i")
                .arg(input_path.to_string_lossy())
                .arg("-map")
                .arg(format!("0:s:{index}"))
                .arg(intermediate.to_string_lossy())
                .arg("-y");
            Ok(StrategySlots {
                video_map: "0:v:0",
                filter: vec![
                    "-vf".to_string(),
                    format!("ass='{}'", filter_path(&intermediate)),
                ],
                extraction: Some(extraction),
                intermediate_subtitle: Some(intermediate),
            })
        }
        SubtitleStrategy::BurnPictureOverlay => {
            let index = burn_index()?;
            Ok(StrategySlots {
                // The overlay output label feeds the codec stage in place
                // of the plain video stream
                video_map: "[v]",
                filter: vec![
                    "-filter_complex".to_string(),
                    format!("[0:v][0:s:{index}]overlay=shortest=1[v]"),
                ],
                extraction: None,
                intermediate_subtitle: None,
            })
        }
    }
}

/// Renders a path for use inside a filter expression.
///
/// The engine's filter parser treats backslashes as escape characters, so
/// the platform separator is normalized to forward slashes.
fn filter_path(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        rendered.into_owned()
    } else {
        rendered.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
