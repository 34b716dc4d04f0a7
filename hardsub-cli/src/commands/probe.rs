//! Implementation of the 'probe' subcommand.
//!
//! This module inspects a single video file and lists its streams grouped by
//! kind, with the per-kind zero-based indices that --audio-stream and
//! --subtitle-stream accept.

use crate::cli::ProbeArgs;
use crate::error::CliResult;
use crate::terminal;

use hardsub_core::external::{CrateFfprobeExecutor, FfprobeExecutor};
use hardsub_core::{CoreError, ProbedStream, StreamKind};

use log::debug;

/// Probes the file and prints its stream structure, or the raw probed
/// records as JSON when --json is passed.
pub fn run_probe(args: ProbeArgs) -> CliResult<()> {
    if !args.file.is_file() {
        return Err(CoreError::PathError(format!(
            "Input file '{}' does not exist or is not a file",
            args.file.display()
        )));
    }

    debug!("Probing: {}", args.file.display());
    let streams = CrateFfprobeExecutor::new().probe_streams(&args.file)?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&streams).map_err(|e| {
            CoreError::JsonParseError(format!("Failed to render stream records: {e}"))
        })?;
        println!("{rendered}");
        return Ok(());
    }

    // Group raw records the same way catalog construction does, so the
    // printed indices line up with the ones stream selection uses.
    let mut video: Vec<&ProbedStream> = Vec::new();
    let mut audio: Vec<&ProbedStream> = Vec::new();
    let mut subtitle: Vec<&ProbedStream> = Vec::new();

    for stream in &streams {
        match stream
            .codec_type
            .as_deref()
            .and_then(StreamKind::from_codec_type)
        {
            Some(StreamKind::Video) => video.push(stream),
            Some(StreamKind::Audio) => audio.push(stream),
            Some(StreamKind::Subtitle) => subtitle.push(stream),
            None => {}
        }
    }

    terminal::print_section("STREAMS");
    terminal::print_status("File", &args.file.display().to_string(), false);
    print_stream_group("Video", &video);
    print_stream_group("Audio", &audio);
    print_stream_group("Subtitle", &subtitle);

    Ok(())
}

/// Prints one kind's streams with their per-kind indices.
fn print_stream_group(label: &str, streams: &[&ProbedStream]) {
    terminal::print_subsection(&format!("{} ({})", label, streams.len()));

    for (index, stream) in streams.iter().enumerate() {
        let codec = stream.codec_name.as_deref().unwrap_or("unknown");
        let language = stream.language.as_deref().unwrap_or("und");
        terminal::print_status(&format!("#{index}"), &format!("{codec} [{language}]"), false);
    }
}
