//! revu - LLM-assisted pull request review
//!
//! CLI binary for running the review pipeline against a GitHub PR.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "revu")]
#[command(about = "LLM-assisted pull request review for GitHub")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Review a pull request and write the report artifacts
    Review {
        /// PR URL, e.g. https://github.com/owner/repo/pull/42
        reference: String,

        /// Directory to write review.json and final_report.md into
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Override the generation model
        #[arg(long)]
        model: Option<String>,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test credentials against both services
    Test,
    /// Show credential setup instructions
    Setup,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Review {
            reference,
            out,
            model,
        } => {
            cli::run_review(&reference, &out, model).await?;
        }
        Commands::Auth { action } => {
            let action_str = match action {
                AuthAction::Test => "test",
                AuthAction::Setup => "setup",
            };
            cli::run_auth(action_str).await?;
        }
    }

    Ok(())
}
