//! Configuration structures and constants for the hardsub-core library.
//!
//! This module provides the configuration system for batch transcoding
//! behavior, including stream selection preferences, subtitle handling
//! flags, and encoder settings.

use crate::error::CoreError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// Default constants

/// Preferred language tag for audio stream autodetection (ISO 639-2).
pub const DEFAULT_AUDIO_LANGUAGE: &str = "jpn";

/// Preferred language tag for subtitle stream autodetection (ISO 639-2).
pub const DEFAULT_SUBTITLE_LANGUAGE: &str = "fre";

/// Default x264 encoder preset.
/// Provides a balanced speed/quality trade-off.
pub const DEFAULT_PRESET: Preset = Preset::Medium;

/// Subdirectory of the input directory that receives transcoded output
/// when no explicit output directory is configured.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "transcoded";

/// Container extensions accepted as processable input.
/// Compared case-insensitively against file extensions.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &["mkv", "mp4", "avi"];

/// x264 encoder speed/quality trade-off levels, fastest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Ultrafast,
    Superfast,
    Veryfast,
    Faster,
    Fast,
    Medium,
    Slow,
    Slower,
    Veryslow,
    Placebo,
}

impl Preset {
    /// All presets in ladder order, fastest first.
    pub const ALL: &'static [Preset] = &[
        Preset::Ultrafast,
        Preset::Superfast,
        Preset::Veryfast,
        Preset::Faster,
        Preset::Fast,
        Preset::Medium,
        Preset::Slow,
        Preset::Slower,
        Preset::Veryslow,
        Preset::Placebo,
    ];

    /// Machine-friendly identifier for this preset, as passed to the encoder.
    pub const fn as_str(self) -> &'static str {
        match self {
            Preset::Ultrafast => "ultrafast",
            Preset::Superfast => "superfast",
            Preset::Veryfast => "veryfast",
            Preset::Faster => "faster",
            Preset::Fast => "fast",
            Preset::Medium => "medium",
            Preset::Slow => "slow",
            Preset::Slower => "slower",
            Preset::Veryslow => "veryslow",
            Preset::Placebo => "placebo",
        }
    }

    /// Returns the supported preset identifiers for error messages.
    pub const fn variants_display() -> &'static str {
        "ultrafast, superfast, veryfast, faster, fast, medium, slow, slower, veryslow, placebo"
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing preset names from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetParseError {
    invalid_value: String,
}

impl PresetParseError {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            invalid_value: value.into(),
        }
    }
}

impl fmt::Display for PresetParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown encoder preset '{}'. Valid options: {}",
            self.invalid_value,
            Preset::variants_display()
        )
    }
}

impl std::error::Error for PresetParseError {}

impl FromStr for Preset {
    type Err = PresetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .iter()
            .copied()
            .find(|preset| s.eq_ignore_ascii_case(preset.as_str()))
            .ok_or_else(|| PresetParseError::new(s))
    }
}

/// Whether a single file's failure ends the whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the batch at the first failing file.
    AbortBatch,
    /// Record the failure and continue with the next file.
    SkipFile,
}

/// Configuration for batch transcoding including paths, stream selection
/// preferences, and subtitle handling flags.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory containing input video files to process
    pub input_dir: PathBuf,

    /// Directory where transcoded output files will be saved
    pub output_dir: PathBuf,

    /// Preferred language tag for audio stream autodetection
    pub audio_language: String,

    /// Preferred language tag for subtitle stream autodetection
    pub subtitle_language: String,

    /// Explicit audio stream index, overriding autodetection
    pub forced_audio_index: Option<usize>,

    /// Explicit subtitle stream index, overriding autodetection
    pub forced_subtitle_index: Option<usize>,

    /// Skip subtitle selection and burn-in entirely
    pub disable_subtitles: bool,

    /// Treat the subtitle stream as picture-based (bitmap) rather than text,
    /// overlaying it through a filter graph instead of a text filter
    pub picture_based_subtitles: bool,

    /// Extract the subtitle stream to an intermediate file before the main
    /// transcode instead of reading it from the container directly
    pub extract_subtitles_first: bool,

    /// x264 encoder preset
    pub preset: Preset,

    /// Transcode a single file at the fastest preset, then halt the batch
    pub dry_run: bool,

    /// Whether a failing file aborts the batch or is skipped
    pub failure_policy: FailurePolicy,
}

impl Default for CoreConfig {
    fn default() -> Self {
        let input_dir = PathBuf::from(".");
        let output_dir = input_dir.join(DEFAULT_OUTPUT_SUBDIR);
        Self {
            input_dir,
            output_dir,
            audio_language: DEFAULT_AUDIO_LANGUAGE.to_string(),
            subtitle_language: DEFAULT_SUBTITLE_LANGUAGE.to_string(),
            forced_audio_index: None,
            forced_subtitle_index: None,
            disable_subtitles: false,
            picture_based_subtitles: false,
            extract_subtitles_first: false,
            preset: DEFAULT_PRESET,
            dry_run: false,
            failure_policy: FailurePolicy::AbortBatch,
        }
    }
}

impl CoreConfig {
    /// Creates config for the given input directory. The output directory
    /// defaults to a `transcoded` subdirectory; other fields use defaults.
    pub fn new(input_dir: PathBuf) -> Self {
        let output_dir = input_dir.join(DEFAULT_OUTPUT_SUBDIR);
        Self {
            input_dir,
            output_dir,
            ..Default::default()
        }
    }

    /// Validates language tags (must be non-empty).
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.audio_language.trim().is_empty() {
            return Err(CoreError::Config(
                "audio_language must not be empty".to_string(),
            ));
        }

        if self.subtitle_language.trim().is_empty() {
            return Err(CoreError::Config(
                "subtitle_language must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
