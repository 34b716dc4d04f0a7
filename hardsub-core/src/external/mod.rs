// ============================================================================
// hardsub-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with External CLI Tools and File System
//
// This module encapsulates interactions with the external tools hardsub
// drives (ffmpeg and ffprobe), as well as file metadata access. It provides
// abstractions through traits and concrete implementations to make these
// external dependencies testable and maintainable.
//
// KEY COMPONENTS:
// - Traits for external tool interactions (FfprobeExecutor, EngineRunner)
// - Concrete implementations using the ffprobe crate and std::process
// - Dependency checking functions
// - File metadata access abstraction
//
// DESIGN PHILOSOPHY:
// This module follows the dependency injection pattern, allowing consumers
// to provide their own implementations of the traits for testing or
// specialized behavior. The default implementations shell out to the real
// tools.
//
// AI-ASSISTANT-INFO: External tool interactions and abstractions for ffmpeg/ffprobe

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the trait and implementation for running engine invocations
pub mod engine_runner;

/// Contains traits and implementations for executing ffprobe commands
pub mod ffprobe_executor;

/// Mock implementations of the external boundaries for tests
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================
// These items are re-exported to make them directly accessible to consumers
// without requiring explicit imports from submodules

// ----- Engine Execution -----
/// Trait and implementation for running assembled engine invocations
pub use engine_runner::{EngineRunner, ProcessEngineRunner};

// ----- FFprobe Execution -----
/// Traits and implementations for executing ffprobe commands
pub use ffprobe_executor::{CrateFfprobeExecutor, FfprobeExecutor};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// This function attempts to run the specified command with a `-version`
/// argument to verify that it exists and is executable. It is used to check
/// for the presence of the required external tools (ffmpeg, ffprobe) before
/// a batch begins.
///
/// # Arguments
///
/// * `cmd_name` - The name of the command to check (e.g., "ffmpeg")
///
/// # Returns
///
/// * `Ok(())` - If the command is found and starts
/// * `Err(CoreError::DependencyNotFound)` - If the command is not found
/// * `Err(CoreError::CommandStart)` - If the command exists but fails to start
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    // Attempt to run the command with the version argument
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null()) // Discard stdout
        .stderr(Stdio::null()) // Discard stderr
        .status(); // Just check the exit status

    match result {
        Ok(_) => {
            // Command executed successfully
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) => {
            if e.kind() == io::ErrorKind::NotFound {
                // Command not found
                log::warn!("Dependency '{cmd_name}' not found.");
                Err(CoreError::DependencyNotFound(cmd_name.to_string()))
            } else {
                // Command exists but failed to start
                log::error!("Failed to start dependency check command '{cmd_name}': {e}");
                Err(CoreError::CommandStart(cmd_name.to_string(), e))
            }
        }
    }
}

// ============================================================================
// FILE METADATA ACCESS
// ============================================================================

/// Trait for abstracting file metadata access operations.
///
/// This trait provides an abstraction over file system operations to
/// retrieve metadata about files, such as their size. It allows for
/// dependency injection and easier testing by decoupling the code from
/// direct file system access.
///
/// # Examples
///
/// ```rust,no_run
/// use hardsub_core::external::FileMetadataProvider;
/// use hardsub_core::CoreResult;
/// use std::path::Path;
///
/// struct FixedSizeProvider;
///
/// impl FileMetadataProvider for FixedSizeProvider {
///     fn get_size(&self, _path: &Path) -> CoreResult<u64> {
///         // Return a fixed size for testing
///         Ok(1_000_000)
///     }
/// }
///
/// let provider = FixedSizeProvider;
/// let size = provider.get_size(Path::new("/fake/path")).unwrap();
/// assert_eq!(size, 1_000_000);
/// ```
pub trait FileMetadataProvider {
    /// Gets the size of the file at the given path in bytes.
    fn get_size(&self, path: &Path) -> CoreResult<u64>;
}

/// Standard implementation of `FileMetadataProvider` using the standard library.
#[derive(Debug, Clone, Default)]
pub struct StdFsMetadataProvider;

impl FileMetadataProvider for StdFsMetadataProvider {
    fn get_size(&self, path: &Path) -> CoreResult<u64> {
        // Get the file metadata and extract the size
        Ok(std::fs::metadata(path)?.len())
    }
}
