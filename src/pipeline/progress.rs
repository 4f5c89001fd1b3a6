//! Progress callback trait for interface-agnostic updates
//!
//! Lets different frontends (CLI today, a service later) observe a running
//! review without the pipeline knowing about terminals.

use async_trait::async_trait;

/// Pipeline phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fetching PR metadata and file contents
    Gathering,
    /// Running the LLM analysis stages
    Analyzing,
    /// Pipeline finished; final state available
    Complete,
}

/// Progress callback trait
///
/// Implement this to receive updates during a review run. All callbacks
/// are informational; returning from them never affects pipeline control
/// flow.
#[async_trait]
pub trait ReviewProgress: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called when a changed file is excluded from the review
    async fn on_file_skipped(&self, filename: &str, content_type: &str);

    /// Called when an analysis stage starts
    async fn on_stage_started(&self, stage: &'static str);

    /// Called when an analysis stage finishes
    ///
    /// `degraded` is true when the stage substituted the failure
    /// placeholder for its report.
    async fn on_stage_completed(&self, stage: &'static str, degraded: bool);
}

/// No-op progress callback for tests or embedding
pub struct NoopProgress;

#[async_trait]
impl ReviewProgress for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_file_skipped(&self, _filename: &str, _content_type: &str) {}
    async fn on_stage_started(&self, _stage: &'static str) {}
    async fn on_stage_completed(&self, _stage: &'static str, _degraded: bool) {}
}
