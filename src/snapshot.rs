//! JSON snapshot persistence
//!
//! The snapshot is the run's durable output: a pretty-printed JSON array of
//! per-package summaries, overwritten on every successful run. Render-only
//! mode reads it back instead of querying any registry.

use std::path::Path;

use anyhow::{Context, Result};

use crate::release::PackageSummary;

/// Write the summaries to `path`, replacing any previous snapshot.
pub fn write(path: &Path, summaries: &[PackageSummary]) -> Result<()> {
    let json = serde_json::to_string_pretty(summaries).context("Failed to serialize snapshot")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;
    Ok(())
}

/// Load the last persisted snapshot from `path`.
pub fn load(path: &Path) -> Result<Vec<PackageSummary>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    let summaries = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;
    Ok(summaries)
}
