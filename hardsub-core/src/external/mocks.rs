// hardsub-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// This module is compiled for the crate's own tests and for downstream
// tests that enable the "test-mocks" feature.
#![cfg(any(test, feature = "test-mocks"))]

use super::*;
use crate::catalog::ProbedStream;
use crate::error::{CoreError, CoreResult};
use crate::invocation::EngineInvocation;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Mock implementation of `FfprobeExecutor`.
#[derive(Clone, Default)]
pub struct MockFfprobeExecutor {
    /// Map of input path -> Result<Vec<ProbedStream>> for probe_streams
    stream_results: Rc<RefCell<HashMap<PathBuf, CoreResult<Vec<ProbedStream>>>>>,
}

impl MockFfprobeExecutor {
    pub fn new() -> Self {
        Default::default()
    }

    /// Add an expected result for probe_streams for a specific input path.
    pub fn expect_streams(&self, input_path: &Path, result: CoreResult<Vec<ProbedStream>>) {
        self.stream_results
            .borrow_mut()
            .insert(input_path.to_path_buf(), result);
    }
}

impl FfprobeExecutor for MockFfprobeExecutor {
    fn probe_streams(&self, input_path: &Path) -> CoreResult<Vec<ProbedStream>> {
        log::info!(
            "MockFfprobeExecutor::probe_streams called for: {}",
            input_path.display()
        );
        match self.stream_results.borrow().get(input_path) {
            Some(Ok(streams)) => Ok(streams.clone()),
            Some(Err(err)) => {
                // Cannot clone CoreError, reconstruct
                log::warn!(
                    "MockFfprobeExecutor returning stored error (type might differ due to no Clone): {:?}",
                    err
                );
                Err(CoreError::FfprobeParse(format!(
                    "Mock ffprobe error for {}: {:?}",
                    input_path.display(),
                    err
                )))
            }
            None => {
                log::error!(
                    "MockFfprobeExecutor: No expectation set for probe_streams on path: {}",
                    input_path.display()
                );
                Err(CoreError::FfprobeParse(format!(
                    "MockFfprobeExecutor: No expectation set for path {}",
                    input_path.display()
                )))
            }
        }
    }
}

/// Represents an expected engine call and its mock result.
pub struct MockEngineExpectation {
    pub arg_pattern: String,
    pub result: CoreResult<()>,
    pub create_dummy_output: bool,
}

/// Mock implementation of `EngineRunner` supporting multiple expectations.
///
/// Expectations match when any token of the received invocation contains
/// the expectation's pattern; each expectation is consumed on match.
#[derive(Clone, Default)]
pub struct MockEngineRunner {
    expectations: Rc<RefCell<Vec<MockEngineExpectation>>>,
    received_invocations: Rc<RefCell<Vec<EngineInvocation>>>,
}

impl MockEngineRunner {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_expectation(
        &self,
        arg_pattern: &str,
        result: CoreResult<()>,
        create_dummy_output: bool,
    ) {
        self.expectations.borrow_mut().push(MockEngineExpectation {
            arg_pattern: arg_pattern.to_string(),
            result,
            create_dummy_output,
        });
    }

    pub fn expect_success(&self, arg_pattern: &str) {
        self.add_expectation(arg_pattern, Ok(()), false);
    }

    /// Like `expect_success`, but also creates an empty file at the
    /// invocation's output path (the last token before `-y`).
    pub fn expect_success_with_output(&self, arg_pattern: &str) {
        self.add_expectation(arg_pattern, Ok(()), true);
    }

    pub fn expect_failure(&self, arg_pattern: &str) {
        self.add_expectation(
            arg_pattern,
            Err(CoreError::OperationFailed(format!(
                "simulated engine failure for pattern '{arg_pattern}'"
            ))),
            false,
        );
    }

    pub fn received_invocations(&self) -> Vec<EngineInvocation> {
        self.received_invocations.borrow().clone()
    }
}

impl EngineRunner for MockEngineRunner {
    fn run(&self, invocation: &EngineInvocation) -> CoreResult<()> {
        self.received_invocations
            .borrow_mut()
            .push(invocation.clone());

        let mut expectations = self.expectations.borrow_mut();
        let found_index = expectations.iter().position(|exp| {
            invocation
                .tokens()
                .iter()
                .any(|token| token.contains(&exp.arg_pattern))
        });

        if let Some(index) = found_index {
            let expectation = expectations.remove(index);
            log::info!(
                "MockEngineRunner: Matched expectation with pattern '{}'",
                expectation.arg_pattern
            );

            if expectation.create_dummy_output {
                // Output path is the token just before the trailing -y
                let tokens = invocation.tokens();
                if let Some(output_path_str) = tokens.get(tokens.len().saturating_sub(2)) {
                    let output_path = PathBuf::from(output_path_str);
                    if let Some(parent) = output_path.parent() {
                        if let Err(e) = std::fs::create_dir_all(parent) {
                            log::error!(
                                "MockEngineRunner failed to create parent dir {:?}: {}",
                                parent,
                                e
                            );
                        }
                    }
                    match std::fs::File::create(&output_path) {
                        Ok(_) => log::info!(
                            "MockEngineRunner created dummy output file: {:?}",
                            output_path
                        ),
                        Err(e) => log::error!(
                            "MockEngineRunner failed to create dummy output file {:?}: {}",
                            output_path,
                            e
                        ),
                    }
                } else {
                    log::warn!(
                        "MockEngineRunner couldn't find output path in tokens to create dummy file."
                    );
                }
            }

            expectation.result
        } else {
            log::error!(
                "MockEngineRunner: No expectation found for invocation: {}",
                invocation
            );
            panic!(
                "MockEngineRunner: No expectation found for invocation: {}",
                invocation
            );
        }
    }
}

/// Mock implementation of `FileMetadataProvider` backed by a path -> size map.
#[derive(Clone, Default)]
pub struct MockMetadataProvider {
    sizes: Rc<RefCell<HashMap<PathBuf, u64>>>,
}

impl MockMetadataProvider {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set_size(&self, path: &Path, size: u64) {
        self.sizes.borrow_mut().insert(path.to_path_buf(), size);
    }
}

impl FileMetadataProvider for MockMetadataProvider {
    fn get_size(&self, path: &Path) -> CoreResult<u64> {
        self.sizes.borrow().get(path).copied().ok_or_else(|| {
            CoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("MockMetadataProvider: no size set for {}", path.display()),
            ))
        })
    }
}
