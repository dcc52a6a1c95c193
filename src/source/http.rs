//! HTTP transcript source.
//!
//! One blocking GET per load. No retries; a non-success status is a
//! `LoadError::Status` carrying the URL and the status code.

use crate::model::error::LoadError;
use std::time::Duration;
use tracing::debug;

/// Whether `location` should be fetched over HTTP rather than read from disk.
pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Fetch a transcript over HTTP.
///
/// `timeout` of `None` waits indefinitely.
///
/// # Errors
///
/// Returns `LoadError::Status` for a non-2xx response and
/// `LoadError::Transport` when no usable response arrives.
pub fn fetch(url: &str, timeout: Option<Duration>) -> Result<String, LoadError> {
    let transport = |err: reqwest::Error| LoadError::Transport {
        path: url.to_string(),
        reason: err.to_string(),
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(transport)?;

    let response = client.get(url).send().map_err(transport)?;
    let status = response.status();
    debug!(url, status = status.as_u16(), "Transcript response received");

    if !status.is_success() {
        return Err(LoadError::Status {
            path: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().map_err(transport)
}
