//! The archive run: pipeline against the Wayback Machine, then a summary.

use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use urlarc_core::archive::WaybackService;
use urlarc_core::config::ArchiveJob;
use urlarc_core::pipeline;

pub async fn run_archive(job: &ArchiveJob) -> Result<()> {
    let started = Instant::now();
    let service = Arc::new(WaybackService::new(job.save_endpoint.as_str()));
    let summary = pipeline::run(job, service).await?;

    tracing::info!(
        elapsed_secs = started.elapsed().as_secs_f64(),
        archived = summary.archived,
        failed = summary.failed,
        "archive run completed"
    );
    println!(
        "{} slug(s), {} file(s), {} unique URL(s): {} archived, {} not archived",
        summary.slugs, summary.files, summary.urls, summary.archived, summary.failed
    );
    println!("Archive run complete. Report: {}", summary.report_path.display());
    Ok(())
}
