//! Review pipeline
//!
//! Five stages over one shared [`ReviewState`]: gather, contextualize,
//! extract features, expert panel, final review. The four analysis stages
//! are described declaratively in [`ANALYSIS_STAGES`]; the runner walks
//! the table in order, so adding or reordering stages is a data change.
//!
//! A failed generation call degrades that stage to a fixed placeholder and
//! the run continues; a failed fetch or an unparsable reference aborts the
//! whole run before any artifact exists.

mod gather;
pub mod prompts;
mod progress;

pub use progress::{NoopProgress, Phase, ReviewProgress};

use crate::error::{Error, Result};
use crate::fetch::ChangeFetcher;
use crate::llm::{CompletionRequest, TextGenerator};
use crate::types::{ChangeRef, ReportField, ReviewState, StageReport};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// Maximum output size for every analysis stage
pub const ANALYSIS_MAX_TOKENS: u32 = 4095;

/// One analysis stage: inputs are whatever the prompt builder reads from
/// the state, output is a single report field
pub struct StageSpec {
    /// Stage name for progress reporting and logs
    pub name: &'static str,
    /// Report slot this stage populates
    pub field: ReportField,
    /// Fixed persona instruction for the generation call
    pub role: &'static str,
    /// Fixed sampling temperature
    pub temperature: f32,
    /// Fixed maximum output size
    pub max_tokens: u32,
    /// Deterministic prompt builder over the current state
    pub prompt: fn(&ReviewState) -> String,
}

/// The four analysis stages, in execution order
pub static ANALYSIS_STAGES: [StageSpec; 4] = [
    StageSpec {
        name: "contextualize",
        field: ReportField::Context,
        role: prompts::REVIEWER_ROLE,
        temperature: 0.6,
        max_tokens: ANALYSIS_MAX_TOKENS,
        prompt: prompts::contextualize,
    },
    StageSpec {
        name: "extract-features",
        field: ReportField::Features,
        role: prompts::REVIEWER_ROLE,
        temperature: 0.6,
        max_tokens: ANALYSIS_MAX_TOKENS,
        prompt: prompts::extract_features,
    },
    StageSpec {
        name: "expert-panel",
        field: ReportField::PanelReview,
        role: prompts::PANEL_ROLE,
        temperature: 0.6,
        max_tokens: ANALYSIS_MAX_TOKENS,
        prompt: prompts::expert_panel,
    },
    StageSpec {
        name: "final-review",
        field: ReportField::FinalReport,
        role: prompts::SYNTHESIZER_ROLE,
        temperature: 0.7,
        max_tokens: ANALYSIS_MAX_TOKENS,
        prompt: prompts::final_review,
    },
];

/// The pipeline runner
///
/// Owns the two collaborators and threads the state through the stages.
/// The state never leaves the runner's single task while a run is in
/// flight, so no locking discipline is needed.
pub struct Reviewer {
    fetcher: Arc<dyn ChangeFetcher>,
    generator: Arc<dyn TextGenerator>,
}

impl Reviewer {
    /// Create a runner from its collaborators
    pub fn new(fetcher: Arc<dyn ChangeFetcher>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { fetcher, generator }
    }

    /// Run the full pipeline for one change reference
    ///
    /// Returns the final state with all four report fields populated, some
    /// possibly degraded to the failure placeholder. Errors out (with no
    /// partial result) on an unparsable reference, a fetch failure, or
    /// cancellation.
    pub async fn run(
        &self,
        reference: &str,
        progress: &dyn ReviewProgress,
        cancel: &CancellationToken,
    ) -> Result<ReviewState> {
        let reference = ChangeRef::parse(reference)?;
        let mut state = ReviewState::new(reference);

        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        progress.on_phase(Phase::Gathering).await;
        let change =
            gather::gather_change(self.fetcher.as_ref(), &state.reference, progress, cancel)
                .await?;
        state.change = Some(change);

        progress.on_phase(Phase::Analyzing).await;
        for stage in &ANALYSIS_STAGES {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }

            progress.on_stage_started(stage.name).await;
            let request = CompletionRequest {
                role_instruction: stage.role.to_string(),
                prompt: (stage.prompt)(&state),
                max_tokens: stage.max_tokens,
                temperature: stage.temperature,
            };

            let report = tokio::select! {
                () = cancel.cancelled() => return Err(Error::Cancelled),
                result = self.generator.complete(&request) => match result {
                    Ok(text) => StageReport::generated(text.trim()),
                    Err(err) => {
                        warn!(stage = stage.name, error = %err, "generation failed, substituting placeholder");
                        StageReport::failed(err.to_string())
                    }
                },
            };

            progress.on_stage_completed(stage.name, report.is_degraded()).await;
            state.set_report(stage.field, report);
        }

        progress.on_phase(Phase::Complete).await;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_table_order_and_fields() {
        let fields: Vec<ReportField> = ANALYSIS_STAGES.iter().map(|s| s.field).collect();
        assert_eq!(
            fields,
            vec![
                ReportField::Context,
                ReportField::Features,
                ReportField::PanelReview,
                ReportField::FinalReport,
            ]
        );
    }

    #[test]
    fn test_stage_temperatures_in_range() {
        for stage in &ANALYSIS_STAGES {
            assert!(
                (0.6..=0.7).contains(&stage.temperature),
                "{} temperature out of range",
                stage.name
            );
            assert_eq!(stage.max_tokens, ANALYSIS_MAX_TOKENS);
        }
    }

    #[test]
    fn test_final_stage_runs_hotter() {
        let last = ANALYSIS_STAGES.last().unwrap();
        assert_eq!(last.name, "final-review");
        assert!((last.temperature - 0.7).abs() < f32::EPSILON);
    }
}
