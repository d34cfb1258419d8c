//! Per-URL archival error. Recorded in the outcome, never propagated.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Curl reported an error (timeout, connection, DNS, etc.).
    #[error("GET {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The worker running the request failed before producing a response.
    #[error("archive worker: {0}")]
    Worker(String),
}
