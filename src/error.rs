//! Error types for revu

use thiserror::Error;

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by revu
///
/// Fatal errors (`Parse`, `Auth`, `Fetch`, `Http`, `Io`, `Json`) abort the
/// pipeline before any artifact is written. `Generation` is recovered
/// locally inside the analysis stage that raised it and never reaches the
/// runner. `Timeout` and `Cancelled` are distinct kinds so callers can tell
/// a stuck collaborator from a user interrupt.
#[derive(Debug, Error)]
pub enum Error {
    /// Change reference could not be parsed into owner/repo/number
    #[error("invalid change reference: {0}")]
    Parse(String),

    /// Missing or rejected credential
    #[error("authentication error: {0}")]
    Auth(String),

    /// Content fetcher returned an unusable response
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Text generation call failed
    #[error("generation error: {0}")]
    Generation(String),

    /// An external call exceeded its deadline
    #[error("timed out: {0}")]
    Timeout(String),

    /// The run was cancelled before completion
    #[error("cancelled")]
    Cancelled,

    /// GitHub API error (token validation)
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Underlying HTTP error
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error while writing artifacts
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Http(err)
        }
    }
}
