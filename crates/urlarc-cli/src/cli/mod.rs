//! CLI for urlarc: scan site content for URLs and archive them.

mod archive;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use urlarc_core::config::{self, ArchiverConfig};

use archive::run_archive;

/// Scan MDX/JSON content for URLs and submit each one to the Wayback Machine.
///
/// Flags override the config file; unset flags fall back to it, then to the built-in defaults.
#[derive(Debug, Parser)]
#[command(name = "urlarc", version)]
#[command(about = "Archive every URL referenced by the site's content", long_about = None)]
pub struct Cli {
    /// Root directory of content items (<dir>/<year>/<slug>/) [default: app/blog]
    #[arg(long, value_name = "PATH")]
    pub content_dir: Option<PathBuf>,

    /// JSON feed listing content slugs [default: data/feed.json]
    #[arg(long, visible_alias = "feed", value_name = "PATH")]
    pub data_feed: Option<PathBuf>,

    /// Report output file, overwritten on each run [default: archives_report.txt]
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Maximum parallel archive requests [default: 20]
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Save endpoint prefix; the target URL is appended [default: https://web.archive.org/save/]
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Config file to use instead of ~/.config/urlarc/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        let cfg = cli.apply_to(cfg);
        tracing::debug!("effective config: {:?}", cfg);

        let cwd = std::env::current_dir().context("current directory")?;
        let job = cfg.resolve(&cwd)?;
        run_archive(&job).await
    }

    /// Overlay explicitly given flags onto `cfg`.
    pub fn apply_to(&self, mut cfg: ArchiverConfig) -> ArchiverConfig {
        if let Some(dir) = &self.content_dir {
            cfg.content_dir = dir.clone();
        }
        if let Some(feed) = &self.data_feed {
            cfg.feed_path = feed.clone();
        }
        if let Some(report) = &self.report {
            cfg.report_path = report.clone();
        }
        if let Some(n) = self.concurrency {
            cfg.concurrency = n;
        }
        if let Some(endpoint) = &self.endpoint {
            cfg.save_endpoint = endpoint.clone();
        }
        cfg
    }
}
