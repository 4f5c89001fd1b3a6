//! Gather stage
//!
//! Resolves the parsed reference into a [`ChangeInfo`]: one metadata call,
//! one file-listing call, then one raw-content call per file, performed
//! sequentially. Files classified as binary (and drawing files) never make
//! it into the output mapping.

use crate::error::{Error, Result};
use crate::fetch::{ChangeFetcher, detect_content_type, is_reviewable};
use crate::pipeline::progress::ReviewProgress;
use crate::types::{ChangeInfo, ChangeRef, FileChange};
use std::collections::BTreeMap;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Fetch and filter the PR's description and changed files
pub(crate) async fn gather_change(
    fetcher: &dyn ChangeFetcher,
    reference: &ChangeRef,
    progress: &dyn ReviewProgress,
    cancel: &CancellationToken,
) -> Result<ChangeInfo> {
    let metadata = fetcher.change_metadata(reference).await?;
    let files = fetcher.changed_files(&metadata.files_url).await?;

    let mut diffs = BTreeMap::new();
    for file in files {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let bytes = fetcher.raw_content(&file.raw_url).await?;
        let content_type = detect_content_type(&bytes);
        if !is_reviewable(content_type, &file.filename) {
            debug!(filename = %file.filename, content_type, "skipping non-text file");
            progress.on_file_skipped(&file.filename, content_type).await;
            continue;
        }

        // Classification already rejected non-UTF-8 content
        let content = String::from_utf8(bytes)
            .map_err(|_| Error::Fetch(format!("{} is not valid UTF-8", file.filename)))?;

        diffs.insert(
            file.filename,
            FileChange {
                patch: file.patch,
                content,
            },
        );
    }

    Ok(ChangeInfo {
        description: metadata.description,
        diffs,
    })
}
