//! Content fetcher boundary
//!
//! Retrieves PR metadata and file contents from the hosting platform.
//! The [`ChangeFetcher`] trait is the seam the pipeline tests mock.

mod content;
mod github;

pub use content::{detect_content_type, is_reviewable};
pub use github::GitHubFetcher;

use crate::error::Result;
use crate::types::ChangeRef;
use async_trait::async_trait;

/// PR metadata as returned by the hosting platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeMetadata {
    /// PR description body (empty when the author left it blank)
    pub description: String,
    /// Location of the changed-file listing for this PR
    pub files_url: String,
}

/// One entry from the changed-file listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Path of the file within the repository
    pub filename: String,
    /// Textual diff fragment (empty when the platform omits it)
    pub patch: String,
    /// Location of the file's raw content at the PR head
    pub raw_url: String,
}

/// Content fetcher operations
///
/// Three calls per review: one for metadata, one for the file listing, and
/// one per file for raw content. Errors are surfaced as-is and treated as
/// fatal by the pipeline.
#[async_trait]
pub trait ChangeFetcher: Send + Sync {
    /// Fetch the PR's description and file-listing location
    async fn change_metadata(&self, reference: &ChangeRef) -> Result<ChangeMetadata>;

    /// List the files changed by the PR
    async fn changed_files(&self, files_url: &str) -> Result<Vec<ChangedFile>>;

    /// Download the raw content of one changed file
    async fn raw_content(&self, raw_url: &str) -> Result<Vec<u8>>;
}
