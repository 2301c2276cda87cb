//! Anaconda.org API client for the conda-forge channel

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::registry::error::RegistryError;
use crate::release::ReleaseRecord;

const DEFAULT_BASE_URL: &str = "https://api.anaconda.org";

/// All configured packages are looked up in this channel
const CHANNEL: &str = "conda-forge";

/// Anaconda.org package metadata (only the field we read)
#[derive(Debug, Deserialize)]
struct CondaPackage {
    latest_version: String,
}

/// Client for the anaconda.org package API
pub struct CondaRegistry {
    client: Client,
    base_url: String,
}

impl Default for CondaRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CondaRegistry {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Fetch the registry-reported latest version of a conda-forge package.
    ///
    /// The API does not expose a publication timestamp, so the record
    /// carries none and the report shows no age for this source.
    pub async fn latest_version(
        &self,
        package_name: &str,
    ) -> Result<Option<ReleaseRecord>, RegistryError> {
        let url = format!("{}/package/{}/{}", self.base_url, CHANNEL, package_name);
        debug!("Fetching conda-forge package: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Anaconda API returned status {}: {}", status, url);
            return Ok(None);
        }

        let package: CondaPackage = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to parse Anaconda response for {}: {}", package_name, e);
                return Ok(None);
            }
        };

        Ok(Some(ReleaseRecord {
            version: package.latest_version,
            published_at: None,
            url: format!("https://anaconda.org/{}/{}", CHANNEL, package_name),
        }))
    }
}
