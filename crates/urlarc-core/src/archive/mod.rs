//! Archival dispatch.
//!
//! Submits each unique URL to an archival service with at most `concurrency`
//! requests in flight, and collects exactly one [`ArchiveOutcome`] per URL.
//! A failure on one URL never affects another; there is no retry and no
//! cancel-on-first-error.

mod dispatch;
mod error;
mod wayback;

pub use dispatch::archive_urls;
pub use error::ArchiveError;
pub use wayback::{WaybackService, REQUEST_TIMEOUT, SERVICE_NAME};

/// An archival backend. `save` is blocking; the dispatcher runs it on the
/// blocking pool.
pub trait ArchiveService: Send + Sync + 'static {
    /// Service name written to the report (e.g. `archive.org`).
    fn name(&self) -> &str;

    /// Submit one URL. Returns the final HTTP status, or the transport error.
    fn save(&self, url: &str) -> Result<u32, ArchiveError>;
}

/// Terminal result of archiving one URL.
#[derive(Debug)]
pub struct ArchiveOutcome {
    pub url: String,
    pub service: String,
    pub archived: bool,
    /// Final HTTP status, if a response was received.
    pub status: Option<u32>,
    /// Transport or worker failure. `None` for any received status.
    pub error: Option<ArchiveError>,
}

impl ArchiveOutcome {
    /// Outcome for a received response; only 200 and 201 count as archived.
    pub fn from_status(url: String, service: String, status: u32) -> Self {
        Self {
            url,
            service,
            archived: is_archived_status(status),
            status: Some(status),
            error: None,
        }
    }

    pub fn failed(url: String, service: String, error: ArchiveError) -> Self {
        Self {
            url,
            service,
            archived: false,
            status: None,
            error: Some(error),
        }
    }
}

pub fn is_archived_status(status: u32) -> bool {
    status == 200 || status == 201
}
