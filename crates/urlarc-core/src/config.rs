use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Save Page Now endpoint; the target URL is appended verbatim.
pub const DEFAULT_SAVE_ENDPOINT: &str = "https://web.archive.org/save/";

/// Global configuration loaded from `~/.config/urlarc/config.toml`.
///
/// Relative paths are resolved against the caller's base directory by
/// [`ArchiverConfig::resolve`], never implicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiverConfig {
    /// Content root; items live at `<content_dir>/<segment>/<slug>/`.
    pub content_dir: PathBuf,
    /// JSON feed listing the slugs to scan.
    pub feed_path: PathBuf,
    /// Report output file (truncated on each run).
    pub report_path: PathBuf,
    /// Maximum number of archival requests in flight.
    pub concurrency: usize,
    /// Prefix the target URL is appended to when archiving.
    pub save_endpoint: String,
}

impl Default for ArchiverConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("app/blog"),
            feed_path: PathBuf::from("data/feed.json"),
            report_path: PathBuf::from("archives_report.txt"),
            concurrency: 20,
            save_endpoint: DEFAULT_SAVE_ENDPOINT.to_string(),
        }
    }
}

/// Fully resolved inputs for one archive run. All paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveJob {
    pub content_dir: PathBuf,
    pub feed_path: PathBuf,
    pub report_path: PathBuf,
    pub concurrency: usize,
    pub save_endpoint: String,
}

impl ArchiverConfig {
    /// Resolve paths against `base` and validate the endpoint.
    pub fn resolve(&self, base: &Path) -> Result<ArchiveJob> {
        url::Url::parse(&self.save_endpoint)
            .with_context(|| format!("invalid save endpoint: {}", self.save_endpoint))?;
        Ok(ArchiveJob {
            content_dir: absolutize(base, &self.content_dir),
            feed_path: absolutize(base, &self.feed_path),
            report_path: absolutize(base, &self.report_path),
            concurrency: self.concurrency.max(1),
            save_endpoint: self.save_endpoint.clone(),
        })
    }
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlarc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ArchiverConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ArchiverConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit path; the file must exist.
pub fn load_from_path(path: &Path) -> Result<ArchiverConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: ArchiverConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
