// ============================================================================
// hardsub-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Initialization for the CLI
//
// This file configures the standard `log` crate with `env_logger` as the
// backend. Log records go to stderr so that structured command output
// (e.g. `probe --json`) stays clean on stdout.
//
// USAGE:
// The default level is `info`, or `debug` when --verbose is passed. The
// RUST_LOG environment variable overrides both:
// - RUST_LOG=debug: Detailed debugging information
// - RUST_LOG=hardsub_core=trace: Very verbose output for the core crate only
//
// AI-ASSISTANT-INFO: Logging initialization for the CLI

// ---- External crate imports ----
use env_logger::Env;

/// Initializes env_logger with a level derived from the --verbose flag.
///
/// Must be called once, before the first log record is emitted.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
}
