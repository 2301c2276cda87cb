//! Shared fixtures for the end-to-end tests

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use mockito::ServerGuard;

use release_watch::config::PackageDescriptor;
use release_watch::reconcile::{Sources, reconcile};
use release_watch::registry::{CondaRegistry, GitHubRegistry, PypiRegistry};
use release_watch::{report, snapshot};

/// Fixed run instant so ages and formatted dates are deterministic
pub fn run_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn descriptor(name: &str, github: &str, pypi_name: &str) -> PackageDescriptor {
    PackageDescriptor {
        name: name.to_string(),
        github: github.to_string(),
        pypi_name: pypi_name.to_string(),
    }
}

/// Clients pointed at per-source mock servers
#[allow(dead_code)]
pub fn mock_sources(github: &ServerGuard, pypi: &ServerGuard, conda: &ServerGuard) -> Sources {
    Sources {
        github: GitHubRegistry::new(&github.url(), None),
        pypi: PypiRegistry::new(&pypi.url()),
        conda: CondaRegistry::new(&conda.url()),
    }
}

/// One GitHub release entry as returned by the Releases API
#[allow(dead_code)]
pub fn github_release(tag: &str, prerelease: bool, published_at: &str) -> String {
    format!(
        r#"{{"tag_name": "{tag}", "prerelease": {prerelease}, "published_at": "{published_at}", "html_url": "https://github.com/example/example/releases/tag/{tag}"}}"#
    )
}

/// A PyPI releases mapping entry with a single distribution file
#[allow(dead_code)]
pub fn pypi_entry(version: &str, uploaded_at: &str) -> String {
    format!(r#""{version}": [{{"upload_time_iso_8601": "{uploaded_at}"}}]"#)
}

/// Mirror of the binary's run sequence: reconcile, persist, render.
///
/// Returns an error without touching either output file when the
/// reconciliation aborts.
#[allow(dead_code)]
pub async fn run_once(
    packages: &[PackageDescriptor],
    sources: &Sources,
    template_path: &Path,
    snapshot_path: &Path,
    output_path: &Path,
) -> anyhow::Result<()> {
    let now = run_instant();
    let summaries = reconcile(packages, sources, now).await?;
    snapshot::write(snapshot_path, &summaries)?;
    let html = report::render(template_path, &summaries, now)?;
    report::write(output_path, &html)?;
    Ok(())
}
