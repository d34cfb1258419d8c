//! Content feed: a JSON array of records, each exposing a `slug`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One feed record. Every other field in the feed is ignored.
#[derive(Debug, Deserialize)]
pub struct FeedEntry {
    pub slug: String,
}

/// Read the feed at `path` and return its slugs in feed order.
///
/// Duplicates are kept; discovery tolerates them and extraction dedups URLs.
pub fn load_slugs(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path).with_context(|| format!("read feed {}", path.display()))?;
    let entries: Vec<FeedEntry> =
        serde_json::from_str(&data).with_context(|| format!("parse feed {}", path.display()))?;
    Ok(entries.into_iter().map(|e| e.slug).collect())
}
