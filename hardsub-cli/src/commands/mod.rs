//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `probe` command.
/// This command lists the streams of a single video file.
pub mod probe;

/// Module containing the implementation of the `transcode` command.
/// This command batch-transcodes video files with burned-in subtitles.
pub mod transcode;
