//! Sequential reconciliation of all configured packages

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::PackageDescriptor;
use crate::registry::error::RegistryError;
use crate::registry::{CondaRegistry, GitHubRegistry, IndexReleases, PypiRegistry};
use crate::release::{PackageSummary, ReleaseRecord, age_in_days};

/// The three registry clients used for one run
pub struct Sources {
    pub github: GitHubRegistry,
    pub pypi: PypiRegistry,
    pub conda: CondaRegistry,
}

impl Sources {
    /// Clients against the public registries, with the GitHub token taken
    /// from the environment
    pub fn from_env() -> Self {
        Self {
            github: GitHubRegistry::from_env(),
            pypi: PypiRegistry::default(),
            conda: CondaRegistry::default(),
        }
    }
}

/// Query all sources for every package, one package at a time, and build
/// the summaries in configuration order.
///
/// Packages sharing a GitHub repository are served from a per-run cache so
/// the repository is queried once. A failed PyPI or conda query degrades
/// that source to absence; a GitHub rate-limit or access-denied response
/// aborts the whole run before any output is written.
pub async fn reconcile(
    packages: &[PackageDescriptor],
    sources: &Sources,
    now: DateTime<Utc>,
) -> Result<Vec<PackageSummary>, RegistryError> {
    let mut repo_cache: HashMap<String, Option<ReleaseRecord>> = HashMap::new();
    let mut summaries = Vec::with_capacity(packages.len());

    for package in packages {
        info!("Checking {}", package.name);

        let github = match repo_cache.get(&package.github) {
            Some(cached) => cached.clone(),
            None => {
                let fetched = match sources.github.latest_release(&package.github).await {
                    Ok(release) => release,
                    Err(RegistryError::Network(e)) => {
                        warn!("GitHub query failed for {}: {}", package.github, e);
                        None
                    }
                    Err(e) => return Err(e),
                };
                repo_cache.insert(package.github.clone(), fetched.clone());
                fetched
            }
        };

        let index = match sources.pypi.latest_releases(&package.pypi_name).await {
            Ok(index) => index,
            Err(e) => {
                warn!("PyPI query failed for {}: {}", package.pypi_name, e);
                IndexReleases::default()
            }
        };

        let conda = match sources.conda.latest_version(&package.pypi_name).await {
            Ok(release) => release,
            Err(e) => {
                warn!("conda-forge query failed for {}: {}", package.pypi_name, e);
                None
            }
        };

        summaries.push(PackageSummary {
            name: package.name.clone(),
            github_repo: package.github.clone(),
            pypi_name: package.pypi_name.clone(),
            github_age_days: github
                .as_ref()
                .and_then(|r| r.published_at)
                .map(|published| age_in_days(published, now)),
            pypi_age_days: index
                .stable
                .as_ref()
                .and_then(|r| r.published_at)
                .map(|published| age_in_days(published, now)),
            github,
            pypi: index.stable,
            pypi_prerelease: index.prerelease,
            conda,
        });
    }

    Ok(summaries)
}
