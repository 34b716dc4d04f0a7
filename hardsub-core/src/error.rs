//! Error types for the hardsub-core library.
//!
//! All fallible operations in this crate return [`CoreResult`], with
//! [`CoreError`] covering filesystem access, external tool invocation,
//! probe output parsing, and stream selection failures.

use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by hardsub-core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("No processable video files found in the input directory")]
    NoFilesFound,

    #[error("Required external command not found: {0}. Please ensure it is installed and in your PATH.")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, std::io::Error),

    #[error("Command '{0}' failed with status {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Failed to parse ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("Failed to parse JSON output: {0}")]
    JsonParseError(String),

    #[error("No audio stream matched: {0}")]
    NoAudioStream(String),

    #[error("No subtitle stream matched: {0}")]
    NoSubtitleStream(String),
}

/// Result type alias for hardsub-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error for a command that could not be spawned.
pub(crate) fn command_start_error(
    command: impl Into<String>,
    error: std::io::Error,
) -> CoreError {
    CoreError::CommandStart(command.into(), error)
}

/// Builds a `CommandFailed` error for a command that exited unsuccessfully.
pub(crate) fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(command.into(), status, stderr.into())
}
