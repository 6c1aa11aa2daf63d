//! Report output
//!
//! Rendering consumes a finished [`ResultSet`]; nothing here takes part in
//! timing.

pub mod html;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::{error::AppResult, models::ResultSet};

pub use html::render_html;

/// Write a rendered HTML report, creating parent directories as needed
pub fn write_report(path: &Path, html: &str) -> AppResult<()> {
    ensure_parent(path)?;
    fs::write(path, html)?;
    info!(path = %path.display(), bytes = html.len(), "HTML report written");
    Ok(())
}

/// Dump the raw result set as pretty-printed JSON
pub fn write_json(path: &Path, result_set: &ResultSet) -> AppResult<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(result_set)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "JSON results written");
    Ok(())
}

fn ensure_parent(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
