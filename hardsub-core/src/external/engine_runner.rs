//! Engine process execution.
//!
//! The production runner spawns an assembled invocation as a child process
//! with stdio passed through, waits for it to exit, and checks the exit
//! status pass/fail. Nothing is read back from the engine.

use crate::error::{CoreResult, command_failed_error, command_start_error};
use crate::invocation::EngineInvocation;
use std::process::Command;

/// Trait representing something that can run an engine invocation to
/// completion.
pub trait EngineRunner {
    /// Runs the invocation, blocking until the process exits.
    fn run(&self, invocation: &EngineInvocation) -> CoreResult<()>;
}

/// Concrete implementation of `EngineRunner` using `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct ProcessEngineRunner;

impl ProcessEngineRunner {
    pub fn new() -> Self {
        Self
    }
}

impl EngineRunner for ProcessEngineRunner {
    fn run(&self, invocation: &EngineInvocation) -> CoreResult<()> {
        // Echo the full command line so a failed run can be reproduced by hand
        log::info!("Running: {invocation}");

        let status = Command::new(invocation.program())
            .args(invocation.args())
            .status()
            .map_err(|e| command_start_error(invocation.program(), e))?;

        if status.success() {
            Ok(())
        } else {
            Err(command_failed_error(
                invocation.program(),
                status,
                "process exited with a non-zero status",
            ))
        }
    }
}
