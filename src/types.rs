//! Core types for revu

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed text substituted for a stage report when its generation call fails
pub const GENERATION_FAILURE_TEXT: &str = "Error generating context.";

/// A parsed reference to one pull request
///
/// Built from a single reference URL such as
/// `https://github.com/owner/repo/pull/42`. Immutable once parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeRef {
    /// Custom host (None for github.com)
    pub host: Option<String>,
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Pull request number
    pub number: u64,
}

impl ChangeRef {
    /// Parse a change reference from a PR URL
    ///
    /// The reference must carry at least four `/`-separated segments; the
    /// owner, repo, and number are the 4th-from-last, 3rd-from-last, and
    /// last segments respectively. Anything else is a fatal parse error.
    pub fn parse(reference: &str) -> Result<Self> {
        let trimmed = reference.trim_end_matches('/');
        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.len() < 4 {
            return Err(Error::Parse(format!(
                "expected at least 4 segments in reference: {reference}"
            )));
        }

        let owner = parts[parts.len() - 4];
        let repo = parts[parts.len() - 3];
        let number_str = parts[parts.len() - 1];

        if owner.is_empty() || repo.is_empty() {
            return Err(Error::Parse(format!(
                "empty owner or repo in reference: {reference}"
            )));
        }

        let number: u64 = number_str
            .parse()
            .map_err(|_| Error::Parse(format!("change number is not an integer: {number_str}")))?;

        let host = url::Url::parse(trimmed)
            .ok()
            .and_then(|u| u.host_str().map(ToString::to_string))
            .filter(|h| h != "github.com");

        Ok(Self {
            host,
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
        })
    }
}

/// One changed file in a pull request
///
/// Binary files are never represented; the gather stage filters them out
/// before construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileChange {
    /// Textual diff fragment (may be empty for renames)
    pub patch: String,
    /// Full text content of the file at the PR head
    pub content: String,
}

/// Description and per-file changes of one pull request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeInfo {
    /// PR description body
    pub description: String,
    /// Changed files keyed by filename (ordered for stable serialization)
    pub diffs: BTreeMap<String, FileChange>,
}

/// Output of one analysis stage
///
/// Tagged rather than a bare string so the final artifact can distinguish
/// genuine analysis from the failure placeholder. Later stages consume
/// [`StageReport::text`] either way and cannot tell the difference, which
/// is the intended degrade-and-continue behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageReport {
    /// The generation call succeeded
    Generated {
        /// Trimmed generated text, stored verbatim
        text: String,
    },
    /// The generation call failed; `text` holds the fixed placeholder
    Failed {
        /// Placeholder text consumed as ordinary input by later stages
        text: String,
        /// The underlying error, for the record
        error: String,
    },
}

impl StageReport {
    /// Build a successful report from generated text
    pub fn generated(text: impl Into<String>) -> Self {
        Self::Generated { text: text.into() }
    }

    /// Build a degraded report carrying the fixed placeholder
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            text: GENERATION_FAILURE_TEXT.to_string(),
            error: error.into(),
        }
    }

    /// Report text as later stages and the final artifacts see it
    pub fn text(&self) -> &str {
        match self {
            Self::Generated { text } | Self::Failed { text, .. } => text,
        }
    }

    /// Whether this report is the failure placeholder
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Selector for one of the four analysis report slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    /// Contextual analysis of the PR
    Context,
    /// Identified features and technical changes
    Features,
    /// Three-persona expert panel review
    PanelReview,
    /// Final synthesized review document
    FinalReport,
}

impl ReportField {
    /// Field name as it appears in the serialized state
    pub const fn name(self) -> &'static str {
        match self {
            Self::Context => "context",
            Self::Features => "features",
            Self::PanelReview => "panel_review",
            Self::FinalReport => "final_report",
        }
    }
}

/// The single state record threaded through all pipeline stages
///
/// Owned exclusively by the runner for the pipeline's duration. Each field
/// is populated exactly once, by exactly one stage, in pipeline order;
/// ordering is enforced by execution order rather than runtime checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewState {
    /// The reference the pipeline was started with
    pub reference: ChangeRef,
    /// Gathered PR description and file changes
    pub change: Option<ChangeInfo>,
    /// Contextual analysis report
    pub context: Option<StageReport>,
    /// Feature extraction report
    pub features: Option<StageReport>,
    /// Expert panel report
    pub panel_review: Option<StageReport>,
    /// Final review report
    pub final_report: Option<StageReport>,
}

impl ReviewState {
    /// Create the initial state containing only the reference
    pub const fn new(reference: ChangeRef) -> Self {
        Self {
            reference,
            change: None,
            context: None,
            features: None,
            panel_review: None,
            final_report: None,
        }
    }

    /// Read one report slot
    pub fn report(&self, field: ReportField) -> Option<&StageReport> {
        match field {
            ReportField::Context => self.context.as_ref(),
            ReportField::Features => self.features.as_ref(),
            ReportField::PanelReview => self.panel_review.as_ref(),
            ReportField::FinalReport => self.final_report.as_ref(),
        }
    }

    /// Merge one stage's report into the state
    pub fn set_report(&mut self, field: ReportField, report: StageReport) {
        debug_assert!(
            self.report(field).is_none(),
            "report field {} set twice",
            field.name()
        );
        match field {
            ReportField::Context => self.context = Some(report),
            ReportField::Features => self.features = Some(report),
            ReportField::PanelReview => self.panel_review = Some(report),
            ReportField::FinalReport => self.final_report = Some(report),
        }
    }
}
