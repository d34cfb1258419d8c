//! One archive run: feed → discovery → extraction → dispatch → report.
//!
//! Stages run strictly in sequence; only dispatch is concurrent.

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use crate::archive::{self, ArchiveService};
use crate::config::ArchiveJob;
use crate::{discovery, extract, feed, report};

/// Counts from a finished run, for the CLI summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub slugs: usize,
    pub files: usize,
    pub urls: usize,
    pub archived: usize,
    pub failed: usize,
    pub report_path: PathBuf,
}

/// Runs the whole pipeline for `job` against `service`.
///
/// Fails only if the feed cannot be loaded or the report cannot be written;
/// per-file and per-URL problems end up in the log and the report.
pub async fn run(job: &ArchiveJob, service: Arc<dyn ArchiveService>) -> Result<RunSummary> {
    let slugs = feed::load_slugs(&job.feed_path)?;
    tracing::info!(slugs = slugs.len(), "loaded feed {}", job.feed_path.display());

    let paths = discovery::collect_paths(&job.content_dir, &slugs);
    tracing::info!(files = paths.len(), "collected content files");

    let urls = extract::extract_urls(&paths);
    tracing::info!(urls = urls.len(), "extracted unique URLs");
    let url_count = urls.len();

    let outcomes = archive::archive_urls(urls, job.concurrency, service).await;
    report::write_report(&job.report_path, &outcomes)?;

    let archived = outcomes.iter().filter(|o| o.archived).count();
    Ok(RunSummary {
        slugs: slugs.len(),
        files: paths.len(),
        urls: url_count,
        archived,
        failed: outcomes.len() - archived,
        report_path: job.report_path.clone(),
    })
}
