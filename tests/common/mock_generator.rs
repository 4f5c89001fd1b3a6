//! Mock text generator for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use revu::error::{Error, Result};
use revu::llm::{CompletionRequest, TextGenerator};
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic mock text generator
///
/// Responds with `analysis N` for the N-th call (zero-based) unless that
/// call index was marked to fail. Records every request for verification.
pub struct MockGenerator {
    call_count: AtomicUsize,
    fail_indices: Mutex<HashSet<usize>>,
    fail_all: bool,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockGenerator {
    /// Create a generator that succeeds on every call
    pub fn new() -> Self {
        Self {
            call_count: AtomicUsize::new(0),
            fail_indices: Mutex::new(HashSet::new()),
            fail_all: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a generator that fails every call
    pub fn always_failing() -> Self {
        Self {
            fail_all: true,
            ..Self::new()
        }
    }

    /// Make the N-th call (zero-based) fail
    pub fn fail_call(&self, index: usize) {
        self.fail_indices.lock().unwrap().insert(index);
    }

    /// All requests received so far, in order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The deterministic response for a given call index
    pub fn response_for(index: usize) -> String {
        format!("analysis {index}")
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let index = self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        if self.fail_all || self.fail_indices.lock().unwrap().contains(&index) {
            return Err(Error::Generation(format!("injected failure on call {index}")));
        }

        Ok(Self::response_for(index))
    }
}
