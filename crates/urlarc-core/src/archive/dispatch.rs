//! Bounded fan-out of archival requests.
//!
//! One task per URL; a shared semaphore caps how many are inside
//! `ArchiveService::save` at once. Each task hands its outcome back through
//! the join set, so the collector is the only writer of the result list.

use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use super::{ArchiveError, ArchiveOutcome, ArchiveService};

/// Archives every URL with at most `concurrency` requests in flight and
/// returns one outcome per URL, in completion order.
///
/// Returns only after all requests have finished. `concurrency` of 0 is
/// treated as 1.
pub async fn archive_urls(
    urls: Vec<String>,
    concurrency: usize,
    service: Arc<dyn ArchiveService>,
) -> Vec<ArchiveOutcome> {
    let concurrency = concurrency.max(1);
    let permits = Arc::new(Semaphore::new(concurrency));
    let total = urls.len();
    tracing::info!(urls = total, concurrency, service = service.name(), "archiving");

    let mut join_set = JoinSet::new();
    for url in urls {
        let permits = Arc::clone(&permits);
        let service = Arc::clone(&service);
        join_set.spawn(archive_one(url, permits, service));
    }

    let mut outcomes = Vec::with_capacity(total);
    while let Some(res) = join_set.join_next().await {
        match res {
            Ok(outcome) => outcomes.push(outcome),
            // archive_one catches worker panics itself; this only fires on runtime shutdown.
            Err(e) => tracing::error!("archive task join: {}", e),
        }
    }
    outcomes
}

async fn archive_one(
    url: String,
    permits: Arc<Semaphore>,
    service: Arc<dyn ArchiveService>,
) -> ArchiveOutcome {
    let service_name = service.name().to_string();
    // Held until this function returns, whatever the result.
    let _permit = match permits.acquire_owned().await {
        Ok(p) => p,
        Err(e) => {
            return ArchiveOutcome::failed(url, service_name, ArchiveError::Worker(e.to_string()))
        }
    };

    let target = url.clone();
    let result = tokio::task::spawn_blocking(move || service.save(&target)).await;

    let outcome = match result {
        Ok(Ok(status)) => ArchiveOutcome::from_status(url, service_name, status),
        Ok(Err(e)) => ArchiveOutcome::failed(url, service_name, e),
        Err(join) => {
            ArchiveOutcome::failed(url, service_name, ArchiveError::Worker(join.to_string()))
        }
    };
    match &outcome.error {
        Some(e) => tracing::info!(url = %outcome.url, "archive failed: {}", e),
        None => tracing::debug!(
            url = %outcome.url,
            status = ?outcome.status,
            archived = outcome.archived,
            "archive request finished"
        ),
    }
    outcome
}
