//! Stream catalog construction from probed container descriptions.
//!
//! The probing boundary yields one raw record per container stream; this
//! module classifies those records by kind and assigns the zero-based
//! per-kind indices the engine's stream specifiers (`0:v:N`, `0:a:N`,
//! `0:s:N`) refer to.

use serde::Serialize;

/// Raw per-stream record produced by the probing boundary.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ProbedStream {
    /// Declared codec type string (e.g. "video", "audio", "subtitle")
    pub codec_type: Option<String>,
    /// Codec name (e.g. "h264", "aac", "ass")
    pub codec_name: Option<String>,
    /// Language tag from the container, if present
    pub language: Option<String>,
}

/// Classification of a container stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Video,
    Audio,
    Subtitle,
}

impl StreamKind {
    /// Maps a probed codec type string to a stream kind.
    /// Returns `None` for kinds the pipeline does not handle (attachments,
    /// data streams).
    pub fn from_codec_type(codec_type: &str) -> Option<StreamKind> {
        match codec_type {
            "video" => Some(StreamKind::Video),
            "audio" => Some(StreamKind::Audio),
            "subtitle" => Some(StreamKind::Subtitle),
            _ => None,
        }
    }

    /// Lowercase name as it appears in probe output.
    pub const fn as_str(self) -> &'static str {
        match self {
            StreamKind::Video => "video",
            StreamKind::Audio => "audio",
            StreamKind::Subtitle => "subtitle",
        }
    }
}

/// One accepted stream: its zero-based position within its kind and the
/// optional language tag carried by the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDescriptor {
    pub index: usize,
    pub kind: StreamKind,
    pub language: Option<String>,
}

/// Ordered per-kind stream listings for one container.
///
/// Within each list, position equals the descriptor's `index`; order is the
/// order of appearance in the container.
#[derive(Debug, Default, Clone)]
pub struct StreamCatalog {
    pub video: Vec<StreamDescriptor>,
    pub audio: Vec<StreamDescriptor>,
    pub subtitle: Vec<StreamDescriptor>,
}

/// Builds per-kind stream listings from raw probed records.
///
/// Records of unhandled kinds are ignored. Each accepted record is indexed
/// by its ordinal position among previously seen records of the same kind.
/// A missing language tag is not an error.
pub fn build_catalog(streams: &[ProbedStream]) -> StreamCatalog {
    let mut catalog = StreamCatalog::default();

    for stream in streams {
        let Some(kind) = stream
            .codec_type
            .as_deref()
            .and_then(StreamKind::from_codec_type)
        else {
            continue;
        };

        let list = match kind {
            StreamKind::Video => &mut catalog.video,
            StreamKind::Audio => &mut catalog.audio,
            StreamKind::Subtitle => &mut catalog.subtitle,
        };
        list.push(StreamDescriptor {
            index: list.len(),
            kind,
            language: stream.language.clone(),
        });
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probed(codec_type: &str, language: Option<&str>) -> ProbedStream {
        ProbedStream {
            codec_type: Some(codec_type.to_string()),
            language: language.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_catalog_groups_by_kind() {
        let streams = vec![
            probed("video", None),
            probed("audio", Some("jpn")),
            probed("audio", Some("eng")),
            probed("subtitle", Some("fre")),
        ];

        let catalog = build_catalog(&streams);

        assert_eq!(catalog.video.len(), 1);
        assert_eq!(catalog.audio.len(), 2);
        assert_eq!(catalog.subtitle.len(), 1);
        assert_eq!(catalog.audio[0].language.as_deref(), Some("jpn"));
        assert_eq!(catalog.audio[1].language.as_deref(), Some("eng"));
    }

    #[test]
    fn test_build_catalog_indices_are_per_kind() {
        let streams = vec![
            probed("video", None),
            probed("audio", None),
            probed("subtitle", None),
            probed("audio", None),
            probed("subtitle", None),
        ];

        let catalog = build_catalog(&streams);

        assert_eq!(catalog.video[0].index, 0);
        assert_eq!(catalog.audio[0].index, 0);
        assert_eq!(catalog.audio[1].index, 1);
        assert_eq!(catalog.subtitle[0].index, 0);
        assert_eq!(catalog.subtitle[1].index, 1);

        // Position in the list equals the recorded index
        for (position, descriptor) in catalog.audio.iter().enumerate() {
            assert_eq!(descriptor.index, position);
        }
    }

    #[test]
    fn test_build_catalog_ignores_unhandled_kinds() {
        let streams = vec![
            probed("video", None),
            probed("attachment", None),
            probed("data", None),
            probed("audio", None),
            ProbedStream::default(),
        ];

        let catalog = build_catalog(&streams);

        assert_eq!(catalog.video.len(), 1);
        assert_eq!(catalog.audio.len(), 1);
        assert!(catalog.subtitle.is_empty());
        // The attachment between video and audio does not disturb indexing
        assert_eq!(catalog.audio[0].index, 0);
    }

    #[test]
    fn test_build_catalog_empty_input() {
        let catalog = build_catalog(&[]);

        assert!(catalog.video.is_empty());
        assert!(catalog.audio.is_empty());
        assert!(catalog.subtitle.is_empty());
    }

    #[test]
    fn test_stream_kind_from_codec_type() {
        assert_eq!(StreamKind::from_codec_type("video"), Some(StreamKind::Video));
        assert_eq!(StreamKind::from_codec_type("audio"), Some(StreamKind::Audio));
        assert_eq!(
            StreamKind::from_codec_type("subtitle"),
            Some(StreamKind::Subtitle)
        );
        assert_eq!(StreamKind::from_codec_type("attachment"), None);
        assert_eq!(StreamKind::from_codec_type(""), None);
    }
}
