//! FFprobe integration for stream structure inspection.
//!
//! This module provides the probing boundary: executing ffprobe against an
//! input file and reducing its per-stream records to the fields stream
//! selection needs.
use crate::catalog::ProbedStream;
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;

/// Trait for probing a container's internal stream structure.
pub trait FfprobeExecutor {
    /// Probes the container and returns one record per stream, in
    /// container order.
    fn probe_streams(&self, input_path: &Path) -> CoreResult<Vec<ProbedStream>>;
}

/// Concrete implementation of `FfprobeExecutor` using the `ffprobe` crate.
#[derive(Debug, Clone, Default)]
pub struct CrateFfprobeExecutor;

impl CrateFfprobeExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl FfprobeExecutor for CrateFfprobeExecutor {
    fn probe_streams(&self, input_path: &Path) -> CoreResult<Vec<ProbedStream>> {
        log::debug!(
            "Running ffprobe (via crate) for stream structure on: {}",
            input_path.display()
        );
        match ffprobe(input_path) {
            Ok(metadata) => Ok(metadata
                .streams
                .iter()
                .map(|stream| ProbedStream {
                    codec_type: stream.codec_type.clone(),
                    codec_name: stream.codec_name.clone(),
                    language: stream
                        .tags
                        .as_ref()
                        .and_then(|tags| tags.language.clone()),
                })
                .collect()),
            Err(err) => {
                log::error!(
                    "ffprobe failed for stream structure on {}: {:?}",
                    input_path.display(),
                    err
                );
                Err(map_ffprobe_error(err, "stream structure"))
            }
        }
    }
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => command_start_error(format!("ffprobe ({context})"), io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error(format!("ffprobe ({context})"), output.status, stderr)
        }
        FfProbeError::Deserialize(err) => CoreError::JsonParseError(format!(
            "ffprobe {context} output deserialization: {err}"
        )),
        _ => CoreError::FfprobeParse(format!(
            "Unknown ffprobe error during {context}: {err:?}"
        )),
    }
}
