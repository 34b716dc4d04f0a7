// ============================================================================
// hardsub-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types for the CLI
//
// This module defines the result alias used throughout the CLI. The CLI
// reuses the hardsub-core error type directly; command modules attach their
// context through the core error variants (PathError, OperationFailed, ...)
// at the point of failure.
//
// KEY COMPONENTS:
// - CliResult: Type alias for CLI operations
//
// AI-ASSISTANT-INFO: CLI error handling utilities

// ---- Internal crate imports ----
use hardsub_core::CoreResult;

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Type alias for CLI results using CoreError.
///
/// This provides consistency with the core library while allowing
/// CLI-specific error handling when needed.
pub type CliResult<T> = CoreResult<T>;
