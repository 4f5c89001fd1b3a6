//! Credential resolution
//!
//! Both credentials are resolved once at startup and passed explicitly
//! into the collaborator constructors; nothing here is process-global.
//! A missing credential is a fatal startup condition.

use crate::error::{Error, Result};
use std::env;
use tokio::process::Command;

/// Where a credential was obtained from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Retrieved from the `gh` CLI
    Cli,
    /// Read from an environment variable
    EnvVar,
}

/// Resolved credentials for one review run
#[derive(Debug, Clone)]
pub struct Credentials {
    /// GitHub personal access token
    pub github_token: String,
    /// Where the GitHub token came from
    pub github_source: AuthSource,
    /// OpenAI API key
    pub openai_api_key: String,
}

impl Credentials {
    /// Resolve both credentials, failing fast if either is missing
    pub async fn resolve() -> Result<Self> {
        let (github_token, github_source) = get_github_token().await?;
        let openai_api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            Error::Auth("No OpenAI API key found. Set OPENAI_API_KEY".to_string())
        })?;

        Ok(Self {
            github_token,
            github_source,
            openai_api_key,
        })
    }
}

/// Get a GitHub token
///
/// Priority:
/// 1. gh CLI (`gh auth token`)
/// 2. `GITHUB_TOKEN` environment variable
/// 3. `GH_TOKEN` environment variable
pub async fn get_github_token() -> Result<(String, AuthSource)> {
    if let Some(token) = get_gh_cli_token().await {
        return Ok((token, AuthSource::Cli));
    }

    if let Ok(token) = env::var("GITHUB_TOKEN") {
        return Ok((token, AuthSource::EnvVar));
    }

    if let Ok(token) = env::var("GH_TOKEN") {
        return Ok((token, AuthSource::EnvVar));
    }

    Err(Error::Auth(
        "No GitHub authentication found. Run `gh auth login` or set GITHUB_TOKEN".to_string(),
    ))
}

async fn get_gh_cli_token() -> Option<String> {
    // Check gh is available
    Command::new("gh").arg("--version").output().await.ok()?;

    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() { None } else { Some(token) }
}

/// Validate a GitHub token against the API
///
/// Returns the authenticated user's login on success.
pub async fn test_github_auth(token: &str) -> Result<String> {
    let octocrab = octocrab::Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|e| Error::GitHubApi(e.to_string()))?;

    let user = octocrab
        .current()
        .user()
        .await
        .map_err(|e| Error::Auth(format!("Invalid token: {e}")))?;

    Ok(user.login)
}
