//! Core library for batch hard-subbing video files using ffmpeg and ffprobe.
//!
//! This crate provides video file discovery, container probing, audio and
//! subtitle stream selection, subtitle burn-in strategy resolution, engine
//! invocation assembly, and a batch driver that ties them together.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use hardsub_core::external::{CrateFfprobeExecutor, ProcessEngineRunner, StdFsMetadataProvider};
//! use hardsub_core::{run_batch, CoreConfig};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(PathBuf::from("/path/to/videos"));
//! config.validate().unwrap();
//!
//! let files = hardsub_core::find_processable_files(&config.input_dir).unwrap();
//!
//! let report = run_batch(
//!     &CrateFfprobeExecutor::new(),
//!     &ProcessEngineRunner::new(),
//!     &StdFsMetadataProvider,
//!     &config,
//!     &files,
//! ).unwrap();
//! println!("Transcoded {} file(s)", report.transcoded.len());
//! ```

pub mod catalog;
pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod invocation;
pub mod processing;
pub mod selection;
pub mod strategy;
pub mod utils;

// Re-exports for public API
pub use catalog::{build_catalog, ProbedStream, StreamCatalog, StreamDescriptor, StreamKind};
pub use config::{
    CoreConfig, FailurePolicy, Preset, DEFAULT_AUDIO_LANGUAGE, DEFAULT_PRESET,
    DEFAULT_SUBTITLE_LANGUAGE, RECOGNIZED_EXTENSIONS,
};
pub use discovery::{find_processable_files, has_recognized_extension};
pub use error::{CoreError, CoreResult};
pub use invocation::{assemble, EngineInvocation, InvocationPlan};
pub use processing::{run_batch, BatchOutcome, BatchReport, FileFailure, FileReport};
pub use selection::{select_streams, SelectionResult};
pub use strategy::{resolve_strategy, SubtitleStrategy};
pub use utils::{calculate_size_reduction, format_bytes, format_duration, get_filename_safe};
