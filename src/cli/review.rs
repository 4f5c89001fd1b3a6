//! Review command - run the full pipeline for one PR

use crate::cli::style::{Stylize, check, cross, warn_mark};
use async_trait::async_trait;
use revu::auth::Credentials;
use revu::error::{Error, Result};
use revu::fetch::GitHubFetcher;
use revu::llm::OpenAiGenerator;
use revu::pipeline::{Phase, ReviewProgress, Reviewer};
use revu::report::write_artifacts;
use revu::types::ChangeRef;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// CLI progress callback that prints to stdout
struct CliProgress;

#[async_trait]
impl ReviewProgress for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Gathering => println!("{}", "Gathering PR information...".emphasis()),
            Phase::Analyzing => println!("{}", "Running analysis stages...".emphasis()),
            Phase::Complete => println!("{} review complete", check()),
        }
    }

    async fn on_file_skipped(&self, filename: &str, content_type: &str) {
        println!(
            "  - skipping {} ({})",
            filename.muted(),
            content_type.muted()
        );
    }

    async fn on_stage_started(&self, stage: &'static str) {
        println!("  {} {}...", "→".accent(), stage.accent());
    }

    async fn on_stage_completed(&self, stage: &'static str, degraded: bool) {
        if degraded {
            println!("  {} {stage} degraded to placeholder", warn_mark());
        } else {
            println!("  {} {stage}", check());
        }
    }
}

/// Run the review command
pub async fn run_review(reference: &str, out_dir: &Path, model: Option<String>) -> Result<()> {
    // Fail fast on a malformed reference, before touching credentials
    let host = ChangeRef::parse(reference)?.host;

    let credentials = Credentials::resolve().await?;

    let fetcher = Arc::new(GitHubFetcher::new(
        credentials.github_token.clone(),
        host.as_deref(),
    ));
    let generator = Arc::new(OpenAiGenerator::new(
        credentials.openai_api_key.clone(),
        model,
    ));

    let reviewer = Reviewer::new(fetcher, generator);

    // Ctrl-C cancels the run; in-flight collaborator calls are abandoned
    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    let progress = CliProgress;
    let state = match reviewer.run(reference, &progress, &cancel).await {
        Ok(state) => state,
        Err(Error::Cancelled) => {
            eprintln!("{} review cancelled, no artifacts written", cross());
            return Err(Error::Cancelled);
        }
        Err(err) => return Err(err),
    };

    let (state_path, report_path) = write_artifacts(&state, out_dir)?;

    println!();
    println!("{} {}", "State snapshot:".muted(), state_path.display());
    println!("{} {}", "Final report: ".muted(), report_path.display());

    let degraded: Vec<&str> = [
        ("contextualize", &state.context),
        ("extract-features", &state.features),
        ("expert-panel", &state.panel_review),
        ("final-review", &state.final_report),
    ]
    .into_iter()
    .filter(|(_, r)| r.as_ref().is_some_and(revu::types::StageReport::is_degraded))
    .map(|(name, _)| name)
    .collect();

    if !degraded.is_empty() {
        println!(
            "{} {} stage(s) degraded: {}",
            warn_mark(),
            degraded.len(),
            degraded.join(", ")
        );
    }

    Ok(())
}
