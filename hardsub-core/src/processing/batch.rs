// ============================================================================
// hardsub-core/src/processing/batch.rs
// ============================================================================
//
// BATCH DRIVER: Hard-Sub Transcode Orchestration
//
// This module houses the batch orchestration logic for the hardsub-core
// library. It drives each input file through the full pipeline: probing the
// container, selecting streams, resolving the subtitle strategy, assembling
// engine invocations, running them, and cleaning up transient artifacts.
//
// KEY COMPONENTS:
// - run_batch: Main entry point for processing a list of video files
// - BatchReport/BatchOutcome: Aggregate result of a batch run
// - FileReport/FileFailure: Per-file success and failure records
//
// WORKFLOW:
// 1. Create the output directory
// 2. For each input file:
//    a. Skip files without a recognized container extension
//    b. Probe the container and build the stream catalog
//    c. Select audio and subtitle streams
//    d. Resolve the subtitle strategy and assemble the invocation plan
//    e. Run the extraction invocation when the plan has one, then the
//       transcode invocation
//    f. Remove the intermediate subtitle file
//    g. Record the result, honoring the configured failure policy
// 3. Halt after the first processed file on a dry run
//
// AI-ASSISTANT-INFO: Batch orchestration module driving per-file transcodes

// ---- Internal crate imports ----
use crate::catalog::build_catalog;
use crate::config::{CoreConfig, FailurePolicy};
use crate::discovery::has_recognized_extension;
use crate::error::{CoreError, CoreResult};
use crate::external::{EngineRunner, FfprobeExecutor, FileMetadataProvider};
use crate::invocation::{assemble, InvocationPlan};
use crate::selection::select_streams;
use crate::strategy::resolve_strategy;
use crate::utils::{format_duration, get_filename_safe};

// ---- Standard library imports ----
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// How a finished batch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every file in the batch was attempted.
    Completed,
    /// A dry run ended the batch after its first processed file.
    HaltedDryRun,
    /// A failing file ended the batch before the remaining files were
    /// attempted.
    HaltedFailure,
}

/// Statistics for one successfully transcoded file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Name of the input file
    pub filename: String,

    /// Wall-clock time spent on this file
    pub duration: Duration,

    /// Size of the input file in bytes
    pub input_size: u64,

    /// Size of the transcoded output in bytes
    pub output_size: u64,
}

/// Record of one file that could not be transcoded.
#[derive(Debug)]
pub struct FileFailure {
    /// Name of the input file
    pub filename: String,

    /// Error that ended the attempt
    pub error: CoreError,
}

/// Aggregate result of a batch run, returned to the caller. Whether the
/// hosting process exits, and with what status, is the caller's decision.
#[derive(Debug)]
pub struct BatchReport {
    /// How the batch ended
    pub outcome: BatchOutcome,

    /// Successfully transcoded files, in processing order
    pub transcoded: Vec<FileReport>,

    /// Failed files, in processing order
    pub failures: Vec<FileFailure>,

    /// Files skipped for an unrecognized container extension
    pub skipped: usize,
}

// ============================================================================
// MAIN PROCESSING FUNCTION
// ============================================================================

/// Processes a list of video files according to the provided configuration.
///
/// This is the main entry point for the hardsub-core library. Each file is
/// probed, its streams are selected, the subtitle strategy is resolved, and
/// the resulting engine invocations are executed. Per-file results are
/// collected into the returned [`BatchReport`].
///
/// The function is generic over the types that implement the required traits:
/// - `P`: [`FfprobeExecutor`] - For probing container stream structure
/// - `R`: [`EngineRunner`] - For running assembled engine invocations
/// - `M`: [`FileMetadataProvider`] - For reading file sizes
///
/// This design allows for dependency injection and easier testing.
///
/// A failing file is recorded in the report; whether the batch then stops
/// (`FailurePolicy::AbortBatch`) or moves on to the next file
/// (`FailurePolicy::SkipFile`) is taken from the configuration. A dry run
/// transcodes the first processed file at the fastest preset and then halts
/// the batch.
///
/// # Errors
///
/// Returns an error only when the batch cannot run at all, such as when the
/// output directory cannot be created. Per-file errors never bubble out of
/// this function; they land in the report's `failures` list.
///
/// # Examples
///
/// ```rust,no_run
/// use hardsub_core::external::{CrateFfprobeExecutor, ProcessEngineRunner, StdFsMetadataProvider};
/// use hardsub_core::{run_batch, CoreConfig};
/// use std::path::PathBuf;
///
/// let prober = CrateFfprobeExecutor::new();
/// let runner = ProcessEngineRunner::new();
/// let metadata_provider = StdFsMetadataProvider;
///
/// let config = CoreConfig::new(PathBuf::from("/path/to/videos"));
/// let files = vec![PathBuf::from("/path/to/videos/episode01.mkv")];
///
/// match run_batch(&prober, &runner, &metadata_provider, &config, &files) {
///     Ok(report) => println!("Transcoded {} file(s)", report.transcoded.len()),
///     Err(e) => eprintln!("Batch failed: {e}"),
/// }
/// ```
pub fn run_batch<P: FfprobeExecutor, R: EngineRunner, M: FileMetadataProvider>(
    prober: &P,
    runner: &R,
    metadata_provider: &M,
    config: &CoreConfig,
    files_to_process: &[PathBuf],
) -> CoreResult<BatchReport> {
    // ========================================================================
    // STEP 1: PREPARE THE OUTPUT DIRECTORY
    // ========================================================================

    fs::create_dir_all(&config.output_dir)?;
    log::debug!("Output directory ready: {}", config.output_dir.display());

    let mut transcoded: Vec<FileReport> = Vec::new();
    let mut failures: Vec<FileFailure> = Vec::new();
    let mut skipped: usize = 0;

    // ========================================================================
    // STEP 2: PROCESS EACH VIDEO FILE
    // ========================================================================

    for input_path in files_to_process {
        let file_start_time = Instant::now();
        let filename = get_filename_safe(input_path)?;

        // Unrecognized extensions never enter the pipeline
        if !has_recognized_extension(input_path) {
            log::info!("Skipping {filename}: unrecognized container extension");
            skipped += 1;
            continue;
        }

        log::info!("Processing: {filename}");

        match process_file(
            prober,
            runner,
            metadata_provider,
            config,
            input_path,
            &filename,
            file_start_time,
        ) {
            Ok(report) => {
                log::info!(
                    "Completed: {} in {}",
                    report.filename,
                    format_duration(report.duration.as_secs_f64())
                );
                transcoded.push(report);
            }
            Err(e) => {
                log::error!("Failed to process {filename}: {e}");
                failures.push(FileFailure {
                    filename: filename.clone(),
                    error: e,
                });

                if config.failure_policy == FailurePolicy::AbortBatch {
                    log::info!("----------------------------------------");
                    return Ok(BatchReport {
                        outcome: BatchOutcome::HaltedFailure,
                        transcoded,
                        failures,
                        skipped,
                    });
                }
            }
        }

        log::info!("----------------------------------------");

        if config.dry_run {
            log::info!("Dry run requested, halting the batch after one file");
            return Ok(BatchReport {
                outcome: BatchOutcome::HaltedDryRun,
                transcoded,
                failures,
                skipped,
            });
        }
    }

    // ========================================================================
    // STEP 3: RETURN THE REPORT
    // ========================================================================

    Ok(BatchReport {
        outcome: BatchOutcome::Completed,
        transcoded,
        failures,
        skipped,
    })
}

/// Drives a single file through probe, selection, strategy resolution,
/// assembly, execution, and cleanup.
fn process_file<P: FfprobeExecutor, R: EngineRunner, M: FileMetadataProvider>(
    prober: &P,
    runner: &R,
    metadata_provider: &M,
    config: &CoreConfig,
    input_path: &Path,
    filename: &str,
    started: Instant,
) -> CoreResult<FileReport> {
    let streams = prober.probe_streams(input_path)?;
    let catalog = build_catalog(&streams);
    log::debug!(
        "Stream catalog for {filename}: {} video, {} audio, {} subtitle",
        catalog.video.len(),
        catalog.audio.len(),
        catalog.subtitle.len()
    );

    let selection = select_streams(&catalog, config)?;
    let strategy = resolve_strategy(config);
    log::debug!("Subtitle strategy for {filename}: {strategy:?}");

    let plan = assemble(input_path, &config.output_dir, &selection, strategy, config)?;

    // Cleanup runs whether or not the engine succeeded
    let run_result = run_plan(runner, &plan);
    if let Some(intermediate) = &plan.intermediate_subtitle {
        remove_intermediate(intermediate);
    }
    run_result?;

    let input_size = metadata_provider.get_size(input_path)?;
    let output_size = metadata_provider.get_size(&plan.output_path)?;

    Ok(FileReport {
        filename: filename.to_string(),
        duration: started.elapsed(),
        input_size,
        output_size,
    })
}

/// Runs the plan's invocations in order: the extraction, when present, must
/// finish before the transcode that reads its output.
fn run_plan<R: EngineRunner>(runner: &R, plan: &InvocationPlan) -> CoreResult<()> {
    if let Some(extraction) = &plan.extraction {
        runner.run(extraction)?;
    }
    runner.run(&plan.transcode)
}

/// Removes the intermediate subtitle file. A file that never materialized is
/// not an error; anything else is logged and otherwise ignored.
fn remove_intermediate(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => log::debug!("Removed intermediate subtitle file {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => log::warn!(
            "Failed to remove intermediate subtitle file {}: {e}",
            path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProbedStream;
    use crate::external::mocks::{MockEngineRunner, MockFfprobeExecutor, MockMetadataProvider};
    use tempfile::tempdir;

    fn stream(kind: &str, codec: &str, language: Option<&str>) -> ProbedStream {
        ProbedStream {
            codec_type: Some(kind.to_string()),
            codec_name: Some(codec.to_string()),
            language: language.map(str::to_string),
        }
    }

    /// A typical dual-audio release: jpn/eng audio, one fre subtitle track.
    fn default_streams() -> Vec<ProbedStream> {
        vec![
            stream("video", "h264", None),
            stream("audio", "aac", Some("jpn")),
            stream("audio", "ac3", Some("eng")),
            stream("subtitle", "ass", Some("fre")),
        ]
    }

    #[test]
    fn test_batch_completes_over_two_files() {
        let temp = tempdir().unwrap();
        let config = CoreConfig::new(temp.path().to_path_buf());
        let input_a = temp.path().join("a.mkv");
        let input_b = temp.path().join("b.mkv");

        let prober = MockFfprobeExecutor::new();
        prober.expect_streams(&input_a, Ok(default_streams()));
        prober.expect_streams(&input_b, Ok(default_streams()));

        let runner = MockEngineRunner::new();
        runner.expect_success("a.mkv");
        runner.expect_success("b.mkv");

        let metadata = MockMetadataProvider::new();
        metadata.set_size(&input_a, 1000);
        metadata.set_size(&config.output_dir.join("a.mkv"), 400);
        metadata.set_size(&input_b, 2000);
        metadata.set_size(&config.output_dir.join("b.mkv"), 900);

        let files = vec![input_a, input_b];
        let report = run_batch(&prober, &runner, &metadata, &config, &files).unwrap();

        assert_eq!(report.outcome, BatchOutcome::Completed);
        assert!(report.failures.is_empty());
        assert_eq!(report.skipped, 0);
        assert_eq!(report.transcoded.len(), 2);
        assert_eq!(report.transcoded[0].filename, "a.mkv");
        assert_eq!(report.transcoded[0].input_size, 1000);
        assert_eq!(report.transcoded[0].output_size, 400);
        assert_eq!(report.transcoded[1].filename, "b.mkv");
        assert_eq!(runner.received_invocations().len(), 2);
    }

    #[test]
    fn test_selection_failure_aborts_batch_by_default() {
        let temp = tempdir().unwrap();
        let config = CoreConfig::new(temp.path().to_path_buf());
        let input_a = temp.path().join("a.mkv");
        let input_b = temp.path().join("b.mkv");

        // Two audio streams, neither tagged jpn: selection cannot decide
        let prober = MockFfprobeExecutor::new();
        prober.expect_streams(
            &input_a,
            Ok(vec![
                stream("video", "h264", None),
                stream("audio", "aac", Some("eng")),
                stream("audio", "ac3", Some("ger")),
                stream("subtitle", "ass", Some("fre")),
            ]),
        );

        let runner = MockEngineRunner::new();
        let metadata = MockMetadataProvider::new();

        let files = vec![input_a, input_b];
        let report = run_batch(&prober, &runner, &metadata, &config, &files).unwrap();

        assert_eq!(report.outcome, BatchOutcome::HaltedFailure);
        assert!(report.transcoded.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].filename, "a.mkv");
        assert!(matches!(
            report.failures[0].error,
            CoreError::NoAudioStream(_)
        ));
        // The second file was never reached
        assert!(runner.received_invocations().is_empty());
    }

    #[test]
    fn test_probe_failure_skips_file_when_policy_allows() {
        let temp = tempdir().unwrap();
        let mut config = CoreConfig::new(temp.path().to_path_buf());
        config.failure_policy = FailurePolicy::SkipFile;
        let input_a = temp.path().join("a.mkv");
        let input_b = temp.path().join("b.mkv");

        let prober = MockFfprobeExecutor::new();
        prober.expect_streams(
            &input_a,
            Err(CoreError::FfprobeParse("corrupt container".to_string())),
        );
        prober.expect_streams(&input_b, Ok(default_streams()));

        let runner = MockEngineRunner::new();
        runner.expect_success("b.mkv");

        let metadata = MockMetadataProvider::new();
        metadata.set_size(&input_b, 2000);
        metadata.set_size(&config.output_dir.join("b.mkv"), 900);

        let files = vec![input_a, input_b];
        let report = run_batch(&prober, &runner, &metadata, &config, &files).unwrap();

        assert_eq!(report.outcome, BatchOutcome::Completed);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].filename, "a.mkv");
        assert!(matches!(
            report.failures[0].error,
            CoreError::FfprobeParse(_)
        ));
        assert_eq!(report.transcoded.len(), 1);
        assert_eq!(report.transcoded[0].filename, "b.mkv");
    }

    #[test]
    fn test_engine_failure_aborts_batch_by_default() {
        let temp = tempdir().unwrap();
        let config = CoreConfig::new(temp.path().to_path_buf());
        let input_a = temp.path().join("a.mkv");
        let input_b = temp.path().join("b.mkv");

        let prober = MockFfprobeExecutor::new();
        prober.expect_streams(&input_a, Ok(default_streams()));

        let runner = MockEngineRunner::new();
        runner.expect_failure("a.mkv");

        let metadata = MockMetadataProvider::new();

        let files = vec![input_a, input_b];
        let report = run_batch(&prober, &runner, &metadata, &config, &files).unwrap();

        assert_eq!(report.outcome, BatchOutcome::HaltedFailure);
        assert!(report.transcoded.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            report.failures[0].error,
            CoreError::OperationFailed(_)
        ));
        assert_eq!(runner.received_invocations().len(), 1);
    }

    #[test]
    fn test_dry_run_halts_after_first_file() {
        let temp = tempdir().unwrap();
        let mut config = CoreConfig::new(temp.path().to_path_buf());
        config.dry_run = true;
        let input_a = temp.path().join("a.mkv");
        let input_b = temp.path().join("b.mkv");

        let prober = MockFfprobeExecutor::new();
        prober.expect_streams(&input_a, Ok(default_streams()));

        let runner = MockEngineRunner::new();
        runner.expect_success("a.mkv");

        let metadata = MockMetadataProvider::new();
        metadata.set_size(&input_a, 1000);
        metadata.set_size(&config.output_dir.join("a.mkv"), 400);

        let files = vec![input_a, input_b];
        let report = run_batch(&prober, &runner, &metadata, &config, &files).unwrap();

        assert_eq!(report.outcome, BatchOutcome::HaltedDryRun);
        assert_eq!(report.transcoded.len(), 1);
        assert!(report.failures.is_empty());

        // Exactly one invocation, at the fastest preset
        let received = runner.received_invocations();
        assert_eq!(received.len(), 1);
        let tokens = received[0].tokens().to_vec();
        let preset_position = tokens.iter().position(|t| t == "-preset").unwrap();
        assert_eq!(tokens[preset_position + 1], "ultrafast");
    }

    #[test]
    fn test_dry_run_records_failure_when_skipping() {
        let temp = tempdir().unwrap();
        let mut config = CoreConfig::new(temp.path().to_path_buf());
        config.dry_run = true;
        config.failure_policy = FailurePolicy::SkipFile;
        let input_a = temp.path().join("a.mkv");
        let input_b = temp.path().join("b.mkv");

        let prober = MockFfprobeExecutor::new();
        prober.expect_streams(&input_a, Ok(default_streams()));

        let runner = MockEngineRunner::new();
        runner.expect_failure("a.mkv");

        let metadata = MockMetadataProvider::new();

        let files = vec![input_a, input_b];
        let report = run_batch(&prober, &runner, &metadata, &config, &files).unwrap();

        // The dry run still ends the batch; the failure stays on record
        assert_eq!(report.outcome, BatchOutcome::HaltedDryRun);
        assert!(report.transcoded.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(runner.received_invocations().len(), 1);
    }

    #[test]
    fn test_extraction_flow_cleans_intermediate() {
        let temp = tempdir().unwrap();
        let mut config = CoreConfig::new(temp.path().to_path_buf());
        config.extract_subtitles_first = true;
        let input_a = temp.path().join("a.mkv");

        let prober = MockFfprobeExecutor::new();
        prober.expect_streams(&input_a, Ok(default_streams()));

        // The extraction run materializes the intermediate subtitle file;
        // the transcode run is matched by its codec token
        let runner = MockEngineRunner::new();
        runner.expect_success_with_output("0:s:0");
        runner.expect_success("libx264");

        let metadata = MockMetadataProvider::new();
        metadata.set_size(&input_a, 1000);
        metadata.set_size(&config.output_dir.join("a.mkv"), 400);

        let files = vec![input_a];
        let report = run_batch(&prober, &runner, &metadata, &config, &files).unwrap();

        assert_eq!(report.outcome, BatchOutcome::Completed);
        assert_eq!(report.transcoded.len(), 1);

        let received = runner.received_invocations();
        assert_eq!(received.len(), 2);
        assert!(received[0].args().iter().any(|t| t == "0:s:0"));
        assert!(received[1].args().iter().any(|t| t == "libx264"));

        // Cleanup removed the extracted subtitle file
        assert!(!config.output_dir.join("a.ass").exists());
    }

    #[test]
    fn test_cleanup_tolerates_missing_intermediate() {
        let temp = tempdir().unwrap();
        let mut config = CoreConfig::new(temp.path().to_path_buf());
        config.extract_subtitles_first = true;
        let input_a = temp.path().join("a.mkv");

        let prober = MockFfprobeExecutor::new();
        prober.expect_streams(&input_a, Ok(default_streams()));

        // Neither run creates the intermediate file on disk
        let runner = MockEngineRunner::new();
        runner.expect_success("0:s:0");
        runner.expect_success("libx264");

        let metadata = MockMetadataProvider::new();
        metadata.set_size(&input_a, 1000);
        metadata.set_size(&config.output_dir.join("a.mkv"), 400);

        let files = vec![input_a];
        let report = run_batch(&prober, &runner, &metadata, &config, &files).unwrap();

        assert_eq!(report.outcome, BatchOutcome::Completed);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_unrecognized_extension_is_skipped() {
        let temp = tempdir().unwrap();
        let config = CoreConfig::new(temp.path().to_path_buf());
        let notes = temp.path().join("notes.txt");
        let input_a = temp.path().join("a.mkv");

        let prober = MockFfprobeExecutor::new();
        prober.expect_streams(&input_a, Ok(default_streams()));

        let runner = MockEngineRunner::new();
        runner.expect_success("a.mkv");

        let metadata = MockMetadataProvider::new();
        metadata.set_size(&input_a, 1000);
        metadata.set_size(&config.output_dir.join("a.mkv"), 400);

        let files = vec![notes, input_a];
        let report = run_batch(&prober, &runner, &metadata, &config, &files).unwrap();

        assert_eq!(report.outcome, BatchOutcome::Completed);
        assert_eq!(report.skipped, 1);
        assert!(report.failures.is_empty());
        assert_eq!(report.transcoded.len(), 1);
        assert_eq!(report.transcoded[0].filename, "a.mkv");
    }
}
