//! Implementation of the 'transcode' subcommand.
//!
//! This module handles batch subtitle burn-in, including file discovery,
//! configuration setup, external tool preflight, and delegation to the
//! hardsub-core library.

use crate::cli::TranscodeArgs;
use crate::error::CliResult;
use crate::terminal;

use hardsub_core::external::{
    check_dependency, CrateFfprobeExecutor, ProcessEngineRunner, StdFsMetadataProvider,
};
use hardsub_core::{
    calculate_size_reduction, find_processable_files, format_bytes, format_duration,
    has_recognized_extension, run_batch, BatchOutcome, BatchReport, CoreConfig, CoreError,
    FailurePolicy, RECOGNIZED_EXTENSIONS,
};

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use log::{debug, warn};

/// Discovers video files from the input path (file or directory). Returns (files, effective_input_dir).
pub fn discover_transcode_files(args: &TranscodeArgs) -> CliResult<(Vec<PathBuf>, PathBuf)> {
    let input_path = args.input_path.canonicalize().map_err(|e| {
        CoreError::PathError(format!(
            "Invalid input path '{}': {}",
            args.input_path.display(),
            e
        ))
    })?;

    let metadata = fs::metadata(&input_path).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to access input path '{}': {}",
            input_path.display(),
            e
        ))
    })?;

    if metadata.is_dir() {
        match find_processable_files(&input_path) {
            Ok(files) => Ok((files, input_path.clone())),
            Err(CoreError::NoFilesFound) => Ok((Vec::new(), input_path.clone())),
            Err(e) => Err(e),
        }
    } else if metadata.is_file() {
        if has_recognized_extension(&input_path) {
            let parent_dir = input_path
                .parent()
                .ok_or_else(|| {
                    CoreError::OperationFailed(format!(
                        "Could not determine parent directory for file '{}'",
                        input_path.display()
                    ))
                })?
                .to_path_buf();
            Ok((vec![input_path.clone()], parent_dir))
        } else {
            Err(CoreError::OperationFailed(format!(
                "Input file '{}' is not a recognized video file (expected: {})",
                input_path.display(),
                RECOGNIZED_EXTENSIONS.join(", ")
            )))
        }
    } else {
        Err(CoreError::OperationFailed(format!(
            "Input path '{}' is neither a file nor a directory",
            input_path.display()
        )))
    }
}

/// Creates and configures CoreConfig from CLI arguments.
fn create_core_config(args: &TranscodeArgs, effective_input_dir: PathBuf) -> CliResult<CoreConfig> {
    let mut config = CoreConfig::new(effective_input_dir);

    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }

    config.audio_language = args.audio_language.clone();
    config.subtitle_language = args.subtitle_language.clone();
    config.forced_audio_index = args.audio_stream;
    config.forced_subtitle_index = args.subtitle_stream;
    config.disable_subtitles = args.no_subtitles;
    config.picture_based_subtitles = args.picture_subs;
    config.extract_subtitles_first = args.extract_subs;
    config.preset = args.preset;
    config.dry_run = args.dry_run;
    config.failure_policy = if args.continue_on_failure {
        FailurePolicy::SkipFile
    } else {
        FailurePolicy::AbortBatch
    };

    config.validate()?;
    Ok(config)
}

/// Displays the configuration the batch will run with.
fn display_initialization_info(args: &TranscodeArgs, config: &CoreConfig, file_count: usize) {
    terminal::print_section("INITIALIZATION");
    terminal::print_status("Input path", &args.input_path.display().to_string(), false);
    terminal::print_status(
        "Output directory",
        &config.output_dir.display().to_string(),
        false,
    );
    terminal::print_status("Files", &file_count.to_string(), false);
    terminal::print_status("Audio language", &config.audio_language, false);

    if config.disable_subtitles {
        terminal::print_status("Subtitles", "disabled", false);
    } else {
        terminal::print_status("Subtitle language", &config.subtitle_language, false);
    }

    terminal::print_status("Preset", config.preset.as_str(), false);

    if config.dry_run {
        terminal::print_status("Dry run", "first file only, fastest preset", true);
    }
}

/// Handles and displays the batch report: per-file results, failures, and totals.
fn handle_batch_report(report: &BatchReport, total_start_time: Instant) {
    if report.transcoded.is_empty() && report.failures.is_empty() {
        terminal::print_error(
            "No files transcoded",
            "No files were successfully transcoded",
            Some("Check that the input contains recognized video files"),
        );
    }

    if !report.transcoded.is_empty() {
        terminal::print_section("TRANSCODE COMPLETE");
        terminal::print_success(&format!(
            "Successfully transcoded {} file(s)",
            report.transcoded.len()
        ));

        for result in &report.transcoded {
            let reduction = calculate_size_reduction(result.input_size, result.output_size);

            terminal::print_subsection(&result.filename);
            terminal::print_status(
                "Encode time",
                &format_duration(result.duration.as_secs_f64()),
                false,
            );
            terminal::print_status("Input size", &format_bytes(result.input_size), false);
            terminal::print_status("Output size", &format_bytes(result.output_size), false);
            terminal::print_status("Reduced by", &format!("{reduction}%"), true);
        }
    }

    if !report.failures.is_empty() {
        terminal::print_section("FAILURES");

        for failure in &report.failures {
            terminal::print_subsection(&failure.filename);
            terminal::print_status("Error", &failure.error.to_string(), false);
        }
    }

    match report.outcome {
        BatchOutcome::HaltedDryRun => {
            terminal::print_success("Dry run halted the batch after its first file");
        }
        BatchOutcome::HaltedFailure => {
            terminal::print_error(
                "Batch halted",
                "A file failed and the failure policy stops the batch",
                Some("Pass --continue-on-failure to keep going past failing files"),
            );
        }
        BatchOutcome::Completed => {}
    }

    if report.skipped > 0 {
        terminal::print_status(
            "Skipped",
            &format!("{} file(s) with unrecognized extensions", report.skipped),
            false,
        );
    }

    terminal::print_status(
        "Total time",
        &format_duration(total_start_time.elapsed().as_secs_f64()),
        true,
    );
}

/// Runs the batch transcode with configured parameters and reports results.
///
/// Returns `Ok(true)` when every processed file succeeded, `Ok(false)` when
/// the batch finished but recorded failures.
pub fn run_transcode(args: TranscodeArgs) -> CliResult<bool> {
    let total_start_time = Instant::now();

    let (files_to_process, effective_input_dir) = discover_transcode_files(&args)?;

    let config = create_core_config(&args, effective_input_dir)?;

    display_initialization_info(&args, &config, files_to_process.len());

    debug!("Configuration: {config:?}");
    debug!("Run started: {}", chrono::Local::now());

    if files_to_process.is_empty() {
        warn!("No processable video files found in the specified input path.");
        terminal::print_error(
            "No files transcoded",
            "No files were found to transcode",
            Some("Check that the input contains recognized video files"),
        );
        return Ok(true);
    }

    // External tools must be present before the first engine run
    check_dependency("ffmpeg")?;
    check_dependency("ffprobe")?;
    debug!("External dependency check passed (ffmpeg, ffprobe)");

    terminal::print_section("TRANSCODING");

    let report = run_batch(
        &CrateFfprobeExecutor::new(),
        &ProcessEngineRunner::new(),
        &StdFsMetadataProvider,
        &config,
        &files_to_process,
    )?;

    handle_batch_report(&report, total_start_time);

    debug!("Finished at: {}", chrono::Local::now());

    Ok(report.failures.is_empty())
}
