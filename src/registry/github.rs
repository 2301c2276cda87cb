//! GitHub Releases API client

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::GITHUB_TOKEN_ENV;
use crate::registry::error::RegistryError;
use crate::release::{ReleaseRecord, parse_timestamp};

/// Default base URL for GitHub API
const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Response entry from the GitHub Releases API
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
    prerelease: bool,
    published_at: Option<String>,
    html_url: String,
}

/// Client for the GitHub Releases API
pub struct GitHubRegistry {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubRegistry {
    /// Creates a new GitHubRegistry with a custom base URL
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("release-watch")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            token,
        }
    }

    /// Creates a client against api.github.com, authenticated when
    /// `GITHUB_TOKEN` is set in the environment
    pub fn from_env() -> Self {
        Self::new(DEFAULT_BASE_URL, std::env::var(GITHUB_TOKEN_ENV).ok())
    }

    /// Fetch the newest release of a repository that is not flagged as a
    /// pre-release.
    ///
    /// The API returns releases newest-first, so the first non-prerelease
    /// entry wins. Returns `Ok(None)` when the repository has no stable
    /// release or the API answers with a non-success status other than
    /// 403/429, which are [`RegistryError::RateLimited`].
    pub async fn latest_release(&self, repo: &str) -> Result<Option<ReleaseRecord>, RegistryError> {
        let url = format!("{}/repos/{}/releases", self.base_url, repo);
        debug!("Fetching GitHub releases: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::FORBIDDEN
            || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {
            return Err(RegistryError::RateLimited {
                status: status.as_u16(),
                url,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Ok(None);
        }

        let releases: Vec<Release> = match response.json().await {
            Ok(releases) => releases,
            Err(e) => {
                warn!("Failed to parse GitHub releases response: {}", e);
                return Ok(None);
            }
        };

        Ok(releases
            .into_iter()
            .find(|r| !r.prerelease)
            .map(|r| ReleaseRecord {
                version: r.tag_name,
                published_at: r.published_at.as_deref().and_then(parse_timestamp),
                url: r.html_url,
            }))
    }
}
