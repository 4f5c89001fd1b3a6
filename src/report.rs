//! Output artifact assembly
//!
//! Two artifacts per completed run: a machine-readable snapshot of the
//! full final state and a human-readable document holding only the final
//! review text. Nothing is written for runs that abort.

use crate::error::Result;
use crate::types::{ReportField, ReviewState};
use std::path::{Path, PathBuf};

/// Filename for the structured state snapshot
pub const STATE_FILENAME: &str = "review.json";

/// Filename for the final review document
pub const REPORT_FILENAME: &str = "final_report.md";

/// Write both output artifacts into `out_dir`
///
/// Returns the paths of the JSON snapshot and the markdown report, in
/// that order. The directory is created if it does not exist.
pub fn write_artifacts(state: &ReviewState, out_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(out_dir)?;

    let state_path = out_dir.join(STATE_FILENAME);
    let mut snapshot = serde_json::to_string_pretty(state)?;
    snapshot.push('\n');
    std::fs::write(&state_path, snapshot)?;

    let report_path = out_dir.join(REPORT_FILENAME);
    let mut report = state
        .report(ReportField::FinalReport)
        .map_or("", |r| r.text())
        .to_string();
    report.push('\n');
    std::fs::write(&report_path, report)?;

    Ok((state_path, report_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChangeRef, ReviewState, StageReport};

    fn finished_state() -> ReviewState {
        let mut state =
            ReviewState::new(ChangeRef::parse("https://github.com/o/r/pull/9").unwrap());
        state.context = Some(StageReport::generated("ctx"));
        state.features = Some(StageReport::generated("feat"));
        state.panel_review = Some(StageReport::generated("panel"));
        state.final_report = Some(StageReport::generated("## Verdict: approve"));
        state
    }

    #[test]
    fn test_writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let (state_path, report_path) =
            write_artifacts(&finished_state(), dir.path()).unwrap();

        let snapshot: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&state_path).unwrap()).unwrap();
        assert_eq!(snapshot["reference"]["number"], 9);
        assert_eq!(snapshot["final_report"]["text"], "## Verdict: approve");

        let report = std::fs::read_to_string(&report_path).unwrap();
        assert_eq!(report, "## Verdict: approve\n");
    }

    #[test]
    fn test_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("run-1");
        write_artifacts(&finished_state(), &nested).unwrap();
        assert!(nested.join(STATE_FILENAME).exists());
    }
}
