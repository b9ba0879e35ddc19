//! Serialization and file-writing helpers for reports.

use anyhow::Context;
use camino::Utf8Path;
use tagwarden_types::Report;

/// Serialize a report as pretty-printed JSON with a trailing newline.
pub fn serialize_report(report: &Report) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("serialize report")?;
    out.push('\n');
    Ok(out)
}

/// Write a serialized report to `path`, creating parent directories as needed.
pub fn write_report(path: &Utf8Path, report: &Report) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_text(path, &data)
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write: {}", path))?;
    Ok(())
}
