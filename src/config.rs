use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable holding an optional GitHub API token.
/// Unauthenticated requests share a much lower rate limit ceiling.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// A package to watch, as listed in the YAML config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageDescriptor {
    /// Display name used in the report
    pub name: String,
    /// GitHub repository in "owner/name" form
    pub github: String,
    /// Package name on PyPI, also used for the conda-forge lookup
    pub pypi_name: String,
}

/// Load the package list from a YAML file.
///
/// The file is a top-level sequence of descriptors; their order defines the
/// order of the report.
pub fn load_packages(path: &Path) -> Result<Vec<PackageDescriptor>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read package list: {}", path.display()))?;
    let packages: Vec<PackageDescriptor> = serde_yaml_ng::from_str(&raw)
        .with_context(|| format!("Failed to parse package list: {}", path.display()))?;
    Ok(packages)
}
