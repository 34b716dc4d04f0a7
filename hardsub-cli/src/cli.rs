// hardsub-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use hardsub_core::{Preset, DEFAULT_AUDIO_LANGUAGE, DEFAULT_PRESET, DEFAULT_SUBTITLE_LANGUAGE};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Hardsub: Batch subtitle burn-in tool",
    long_about = "Prepares batches of video files for constrained playback devices by \
                  transcoding them with a single audio track and burned-in subtitles, \
                  using ffmpeg via the hardsub-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug-level) log output.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transcodes video files, burning the selected subtitle stream into the picture
    Transcode(TranscodeArgs),
    /// Lists the streams of a single video file, grouped by kind
    Probe(ProbeArgs),
}

#[derive(Parser, Debug)]
pub struct TranscodeArgs {
    /// Input directory containing video files, or a single video file
    #[arg(short = 'i', long = "input", value_name = "INPUT_PATH", default_value = ".")]
    pub input_path: PathBuf,

    /// Directory where transcoded files will be saved (defaults to INPUT_PATH/transcoded)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    // --- Stream Selection ---
    /// Preferred audio language tag for autodetection (ISO 639-2)
    /// Can also be set via the HARDSUB_AUDIO_LANG environment variable.
    #[arg(
        short = 'a',
        long = "audio-language",
        value_name = "LANG",
        env = "HARDSUB_AUDIO_LANG",
        default_value = DEFAULT_AUDIO_LANGUAGE
    )]
    pub audio_language: String,

    /// Preferred subtitle language tag for autodetection (ISO 639-2)
    /// Can also be set via the HARDSUB_SUB_LANG environment variable.
    #[arg(
        short = 's',
        long = "subtitle-language",
        value_name = "LANG",
        env = "HARDSUB_SUB_LANG",
        default_value = DEFAULT_SUBTITLE_LANGUAGE
    )]
    pub subtitle_language: String,

    /// Optional: Pick this audio stream index directly, skipping autodetection
    #[arg(long = "audio-stream", value_name = "INDEX")]
    pub audio_stream: Option<usize>,

    /// Optional: Pick this subtitle stream index directly, skipping autodetection
    #[arg(long = "subtitle-stream", value_name = "INDEX")]
    pub subtitle_stream: Option<usize>,

    // --- Subtitle Handling ---
    /// Disable subtitle burn-in entirely (subtitle streams are left out)
    #[arg(long)]
    pub no_subtitles: bool,

    /// Treat the selected subtitle stream as picture-based (bitmap) and
    /// composite it over the video instead of rendering text
    #[arg(long)]
    pub picture_subs: bool,

    /// Extract the subtitle stream to a file before transcoding instead of
    /// rendering it straight from the container
    #[arg(long)]
    pub extract_subs: bool,

    // --- Encoding ---
    /// x264 encoder preset controlling the speed/quality trade-off
    #[arg(
        short = 'p',
        long,
        value_name = "PRESET",
        value_parser = parse_preset,
        default_value_t = DEFAULT_PRESET
    )]
    pub preset: Preset,

    /// Transcode only the first file at the fastest preset, then stop
    #[arg(long)]
    pub dry_run: bool,

    /// Record a failing file and move on to the next one instead of
    /// stopping the whole batch
    #[arg(long)]
    pub continue_on_failure: bool,
}

#[derive(Parser, Debug)]
pub struct ProbeArgs {
    /// Video file to inspect
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,

    /// Print the raw probed stream records as pretty-printed JSON
    #[arg(long)]
    pub json: bool,
}

/// clap value parser for `--preset`.
fn parse_preset(s: &str) -> Result<Preset, String> {
    s.parse::<Preset>().map_err(|e| e.to_string())
}
