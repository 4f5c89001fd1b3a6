//! Test data factories for revu types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use revu::types::{ChangeInfo, ChangeRef, FileChange, ReviewState, StageReport};

/// A valid PR reference URL for the test repo
pub const TEST_PR_URL: &str = "https://github.com/test-owner/test-repo/pull/42";

/// Parse the standard test reference
pub fn test_ref() -> ChangeRef {
    ChangeRef::parse(TEST_PR_URL).unwrap()
}

/// PNG file header bytes (binary content for filter tests)
pub fn png_bytes() -> Vec<u8> {
    vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x01, 0x02]
}

/// Create a change info with a single text file
pub fn make_change_info(description: &str, filename: &str, content: &str) -> ChangeInfo {
    let mut change = ChangeInfo {
        description: description.to_string(),
        ..ChangeInfo::default()
    };
    change.diffs.insert(
        filename.to_string(),
        FileChange {
            patch: format!("@@ -0,0 +1 @@\n+{content}"),
            content: content.to_string(),
        },
    );
    change
}

/// Create a fully populated final state
pub fn make_finished_state() -> ReviewState {
    let mut state = ReviewState::new(test_ref());
    state.change = Some(make_change_info("test PR", "src/lib.rs", "pub fn f() {}\n"));
    state.context = Some(StageReport::generated("context report"));
    state.features = Some(StageReport::generated("features report"));
    state.panel_review = Some(StageReport::generated("panel report"));
    state.final_report = Some(StageReport::generated("final report"));
    state
}
