//! Release records and per-package summaries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single release as reported by one registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// Version string as reported by the source (tag name for GitHub)
    pub version: String,
    /// Publication instant, when the source reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Canonical web URL for the release
    pub url: String,
}

/// Aggregated release state for one configured package.
///
/// One summary per package per run, collected in configuration order.
/// Sources that returned no usable data are `None` and render as "N/A".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSummary {
    pub name: String,
    pub github_repo: String,
    pub pypi_name: String,
    /// Newest GitHub release not flagged as a pre-release
    pub github: Option<ReleaseRecord>,
    /// Highest stable version on the package index
    pub pypi: Option<ReleaseRecord>,
    /// Highest pre-release on the package index, supplementary only
    pub pypi_prerelease: Option<ReleaseRecord>,
    /// Latest version according to conda-forge (no timestamp available)
    pub conda: Option<ReleaseRecord>,
    pub github_age_days: Option<i64>,
    pub pypi_age_days: Option<i64>,
}

/// Whole days elapsed between a publish instant and the run instant.
pub fn age_in_days(published_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - published_at).num_days()
}

/// Parse an RFC 3339 timestamp as reported by GitHub and PyPI,
/// normalized to UTC. Malformed input is discarded.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
