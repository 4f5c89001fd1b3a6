//! GitHub content fetcher implementation

use crate::error::{Error, Result};
use crate::fetch::{ChangeFetcher, ChangeMetadata, ChangedFile};
use crate::types::ChangeRef;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GitHub fetcher using reqwest
///
/// Talks to the REST v3 API with a personal access token. Supports GitHub
/// Enterprise through the `host` field of the parsed [`ChangeRef`].
pub struct GitHubFetcher {
    client: Client,
    token: String,
    base_url: String,
}

#[derive(Deserialize)]
struct PullResponse {
    body: Option<String>,
    #[serde(rename = "_links")]
    links: PullLinks,
}

#[derive(Deserialize)]
struct PullLinks {
    #[serde(rename = "self")]
    self_link: Href,
}

#[derive(Deserialize)]
struct Href {
    href: String,
}

#[derive(Deserialize)]
struct FileEntry {
    filename: String,
    patch: Option<String>,
    raw_url: String,
}

impl GitHubFetcher {
    /// Create a fetcher for github.com or an enterprise host
    pub fn new(token: String, host: Option<&str>) -> Self {
        let base_url = host.map_or_else(
            || "https://api.github.com".to_string(),
            |h| format!("https://{h}/api/v3"),
        );
        Self::with_base_url(token, base_url)
    }

    /// Create a fetcher against an explicit API base URL
    ///
    /// Used by tests and unusual enterprise layouts.
    pub fn with_base_url(token: String, base_url: String) -> Self {
        let client = Client::builder()
            .user_agent(concat!("revu/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url,
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .header("Authorization", format!("token {}", self.token))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Error::Fetch(format!(
                "GitHub returned {} for {}",
                response.status(),
                response.url()
            )))
        }
    }
}

#[async_trait]
impl ChangeFetcher for GitHubFetcher {
    async fn change_metadata(&self, reference: &ChangeRef) -> Result<ChangeMetadata> {
        let url = format!(
            "{}/repos/{}/{}/pulls/{}",
            self.base_url, reference.owner, reference.repo, reference.number
        );

        let pull: PullResponse = Self::check(self.get(&url).send().await?)
            .await?
            .json()
            .await?;

        Ok(ChangeMetadata {
            description: pull.body.unwrap_or_default(),
            files_url: format!("{}/files", pull.links.self_link.href),
        })
    }

    async fn changed_files(&self, files_url: &str) -> Result<Vec<ChangedFile>> {
        let files: Vec<FileEntry> = Self::check(self.get(files_url).send().await?)
            .await?
            .json()
            .await?;

        Ok(files
            .into_iter()
            .map(|f| ChangedFile {
                filename: f.filename,
                patch: f.patch.unwrap_or_default(),
                raw_url: f.raw_url,
            })
            .collect())
    }

    async fn raw_content(&self, raw_url: &str) -> Result<Vec<u8>> {
        let response = Self::check(self.get(raw_url).send().await?).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
