//! Utilities for testing.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::command::{CommandRunner, Invocation};
use crate::error::{VinixError, VinixResult};

/// A `CommandRunner` that records invocations and replays canned
/// output instead of executing anything.
///
/// Outputs are consumed in queue order; an invocation with no queued
/// output succeeds with empty output.
#[derive(Default)]
pub struct RecordingRunner {
    invocations: Mutex<Vec<Invocation>>,
    outputs: Mutex<VecDeque<VinixResult<Vec<u8>>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a canned stdout payload for an upcoming invocation.
    pub fn push_output(&self, output: impl Into<Vec<u8>>) {
        self.outputs.lock().unwrap().push_back(Ok(output.into()));
    }

    /// Queues a failure for an upcoming invocation.
    pub fn push_failure(&self, error: VinixError) {
        self.outputs.lock().unwrap().push_back(Err(error));
    }

    /// Returns all invocations recorded so far.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, invocation: Invocation) -> VinixResult<Vec<u8>> {
        self.invocations.lock().unwrap().push(invocation);

        self.outputs
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
