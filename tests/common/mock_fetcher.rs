//! Mock content fetcher for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use revu::error::{Error, Result};
use revu::fetch::{ChangeFetcher, ChangeMetadata, ChangedFile};
use revu::types::ChangeRef;
use std::collections::HashMap;
use std::sync::Mutex;

/// Files URL handed out by the mock metadata response
pub const MOCK_FILES_URL: &str = "mock://files";

/// Simple mock content fetcher
///
/// Features:
/// - Configurable description and file set
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockFetcher {
    description: String,
    files: Vec<ChangedFile>,
    raw: HashMap<String, Vec<u8>>,
    // Call tracking
    metadata_calls: Mutex<Vec<ChangeRef>>,
    files_calls: Mutex<Vec<String>>,
    raw_calls: Mutex<Vec<String>>,
    // Error injection
    error_on_metadata: Mutex<Option<String>>,
    error_on_files: Mutex<Option<String>>,
}

impl MockFetcher {
    /// Create a mock serving the given description and files
    ///
    /// Each file is (filename, patch, raw bytes); raw URLs are synthesized
    /// as `raw://{filename}`.
    pub fn with_change(description: &str, files: &[(&str, &str, &[u8])]) -> Self {
        let mut raw = HashMap::new();
        let files = files
            .iter()
            .map(|(filename, patch, bytes)| {
                let raw_url = format!("raw://{filename}");
                raw.insert(raw_url.clone(), bytes.to_vec());
                ChangedFile {
                    filename: (*filename).to_string(),
                    patch: (*patch).to_string(),
                    raw_url,
                }
            })
            .collect();

        Self {
            description: description.to_string(),
            files,
            raw,
            metadata_calls: Mutex::new(Vec::new()),
            files_calls: Mutex::new(Vec::new()),
            raw_calls: Mutex::new(Vec::new()),
            error_on_metadata: Mutex::new(None),
            error_on_files: Mutex::new(None),
        }
    }

    /// Make `change_metadata` return an error
    pub fn fail_metadata(&self, msg: &str) {
        *self.error_on_metadata.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `changed_files` return an error
    pub fn fail_files(&self, msg: &str) {
        *self.error_on_files.lock().unwrap() = Some(msg.to_string());
    }

    /// References that `change_metadata` was called with
    pub fn metadata_calls(&self) -> Vec<ChangeRef> {
        self.metadata_calls.lock().unwrap().clone()
    }

    /// URLs that `changed_files` was called with
    pub fn files_calls(&self) -> Vec<String> {
        self.files_calls.lock().unwrap().clone()
    }

    /// URLs that `raw_content` was called with
    pub fn raw_calls(&self) -> Vec<String> {
        self.raw_calls.lock().unwrap().clone()
    }

    /// Total collaborator calls across all three operations
    pub fn total_calls(&self) -> usize {
        self.metadata_calls().len() + self.files_calls().len() + self.raw_calls().len()
    }
}

#[async_trait]
impl ChangeFetcher for MockFetcher {
    async fn change_metadata(&self, reference: &ChangeRef) -> Result<ChangeMetadata> {
        self.metadata_calls.lock().unwrap().push(reference.clone());

        if let Some(msg) = self.error_on_metadata.lock().unwrap().as_ref() {
            return Err(Error::Fetch(msg.clone()));
        }

        Ok(ChangeMetadata {
            description: self.description.clone(),
            files_url: MOCK_FILES_URL.to_string(),
        })
    }

    async fn changed_files(&self, files_url: &str) -> Result<Vec<ChangedFile>> {
        self.files_calls.lock().unwrap().push(files_url.to_string());

        if let Some(msg) = self.error_on_files.lock().unwrap().as_ref() {
            return Err(Error::Fetch(msg.clone()));
        }

        Ok(self.files.clone())
    }

    async fn raw_content(&self, raw_url: &str) -> Result<Vec<u8>> {
        self.raw_calls.lock().unwrap().push(raw_url.to_string());

        self.raw
            .get(raw_url)
            .cloned()
            .ok_or_else(|| Error::Fetch(format!("no raw content for {raw_url}")))
    }
}
