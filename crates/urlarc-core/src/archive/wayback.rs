//! Internet Archive "Save Page Now" client over libcurl.

use std::time::Duration;

use super::{ArchiveError, ArchiveService};
use crate::config::DEFAULT_SAVE_ENDPOINT;

/// Service name recorded in every outcome.
pub const SERVICE_NAME: &str = "archive.org";

/// Whole-request timeout, redirects and body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues `GET <endpoint><url>` per URL; the response body is discarded.
#[derive(Debug, Clone)]
pub struct WaybackService {
    endpoint: String,
}

impl WaybackService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Request URL for `target`: plain concatenation, no escaping.
    pub fn request_url(&self, target: &str) -> String {
        format!("{}{}", self.endpoint, target)
    }
}

impl Default for WaybackService {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_ENDPOINT)
    }
}

impl ArchiveService for WaybackService {
    fn name(&self) -> &str {
        SERVICE_NAME
    }

    fn save(&self, url: &str) -> Result<u32, ArchiveError> {
        let api = self.request_url(url);
        get_status(&api).map_err(|source| ArchiveError::Transport { url: api, source })
    }
}

/// Performs the GET and returns the final response code after redirects.
fn get_status(api: &str) -> Result<u32, curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(api)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.timeout(REQUEST_TIMEOUT)?;

    {
        let mut transfer = easy.transfer();
        // Drain the body; without a write callback libcurl prints it to stdout.
        transfer.write_function(|data| Ok(data.len()))?;
        transfer.perform()?;
    }

    easy.response_code()
}
