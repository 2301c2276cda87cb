//! PyPI JSON API client with PEP 440 release resolution

use std::collections::HashMap;
use std::str::FromStr;

use pep508_rs::pep440_rs::Version;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::registry::error::RegistryError;
use crate::release::{ReleaseRecord, parse_timestamp};

const DEFAULT_BASE_URL: &str = "https://pypi.org";

/// PyPI JSON API response structure
#[derive(Debug, Deserialize)]
struct PypiResponse {
    releases: HashMap<String, Vec<PypiFile>>,
}

/// Distribution file metadata for one release entry
#[derive(Debug, Deserialize)]
struct PypiFile {
    upload_time_iso_8601: Option<String>,
}

/// Stable and pre-release resolution result for one package.
///
/// Both fields absent means the index had no usable data for the package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexReleases {
    pub stable: Option<ReleaseRecord>,
    pub prerelease: Option<ReleaseRecord>,
}

/// Client for the PyPI JSON API
pub struct PypiRegistry {
    client: Client,
    base_url: String,
}

impl Default for PypiRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PypiRegistry {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Resolve the highest stable and highest pre-release version of a
    /// package.
    ///
    /// Only release entries with at least one distribution file carrying a
    /// parseable upload timestamp are considered. Versions are ordered per
    /// PEP 440; entries whose version string does not parse are skipped.
    /// When two entries compare equal the first one seen wins (the mapping
    /// iteration order is not defined, and neither was the upstream data).
    pub async fn latest_releases(&self, package_name: &str) -> Result<IndexReleases, RegistryError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package_name);
        debug!("Fetching PyPI package: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("PyPI API returned status {}: {}", status, url);
            return Ok(IndexReleases::default());
        }

        let pypi_response: PypiResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to parse PyPI response for {}: {}", package_name, e);
                return Ok(IndexReleases::default());
            }
        };

        let mut stable: Option<(Version, ReleaseRecord)> = None;
        let mut prerelease: Option<(Version, ReleaseRecord)> = None;

        for (raw_version, files) in &pypi_response.releases {
            let Some(uploaded_at) = files
                .iter()
                .filter_map(|f| f.upload_time_iso_8601.as_deref())
                .find_map(parse_timestamp)
            else {
                continue;
            };

            let Ok(version) = Version::from_str(raw_version) else {
                debug!("Skipping unparseable version {:?}", raw_version);
                continue;
            };

            let record = ReleaseRecord {
                version: raw_version.clone(),
                published_at: Some(uploaded_at),
                url: format!("{}/project/{}/{}/", self.base_url, package_name, raw_version),
            };

            let slot = if version.any_prerelease() {
                &mut prerelease
            } else {
                &mut stable
            };
            if slot.as_ref().is_none_or(|(best, _)| version > *best) {
                *slot = Some((version, record));
            }
        }

        Ok(IndexReleases {
            stable: stable.map(|(_, record)| record),
            prerelease: prerelease.map(|(_, record)| record),
        })
    }
}
