//! Batch orchestration for hard-sub transcoding.
//!
//! This module houses the batch driver that walks input files through
//! probing, stream selection, subtitle strategy resolution, invocation
//! assembly, engine execution, and cleanup, collecting per-file results
//! into a report for the caller.

/// Batch driver and its report types
pub mod batch;

pub use batch::{run_batch, BatchOutcome, BatchReport, FileFailure, FileReport};
