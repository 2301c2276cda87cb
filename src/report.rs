//! HTML report rendering
//!
//! The template is a Tera file loaded from disk. Two helper functions are
//! registered on the instance for the duration of the render:
//!
//! - `version_gt(left=.., right=..)`: semantic greater-than over two
//!   version strings, `false` when either side does not parse
//! - `format_date(value=..)`: formats an RFC 3339 timestamp as
//!   `YYYY-MM-DD`, passing unparseable input through verbatim

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tera::{Tera, Value};

use crate::release::{PackageSummary, parse_timestamp};
use crate::version_cmp;

const TEMPLATE_NAME: &str = "report.html";

fn version_gt_fn(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let left = args
        .get("left")
        .and_then(Value::as_str)
        .ok_or_else(|| tera::Error::msg("version_gt requires a string `left` argument"))?;
    let right = args
        .get("right")
        .and_then(Value::as_str)
        .ok_or_else(|| tera::Error::msg("version_gt requires a string `right` argument"))?;

    Ok(Value::Bool(version_cmp::is_greater(left, right)))
}

fn format_date_fn(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let value = args
        .get("value")
        .and_then(Value::as_str)
        .ok_or_else(|| tera::Error::msg("format_date requires a string `value` argument"))?;

    let formatted = match parse_timestamp(value) {
        Some(timestamp) => timestamp.format("%Y-%m-%d").to_string(),
        None => value.to_string(),
    };
    Ok(Value::String(formatted))
}

/// Render the report from a template file and the run's summaries.
///
/// `generated_at` is exposed to the template; everything else rendered from
/// a fixed snapshot is stable across runs.
pub fn render(
    template_path: &Path,
    summaries: &[PackageSummary],
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let source = std::fs::read_to_string(template_path)
        .with_context(|| format!("Failed to read template: {}", template_path.display()))?;

    let mut tera = Tera::default();
    tera.register_function("version_gt", version_gt_fn);
    tera.register_function("format_date", format_date_fn);
    tera.add_raw_template(TEMPLATE_NAME, &source)
        .with_context(|| format!("Failed to parse template: {}", template_path.display()))?;

    let mut context = tera::Context::new();
    context.insert("releases", summaries);
    context.insert(
        "generated_at",
        &generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );

    tera.render(TEMPLATE_NAME, &context)
        .with_context(|| format!("Failed to render template: {}", template_path.display()))
}

/// Write the rendered document, replacing any previous report.
pub fn write(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, html)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(())
}
