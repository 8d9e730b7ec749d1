//! Error types for the completion client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while requesting or streaming a completion.
#[derive(Debug, Error)]
pub enum PollinationsError {
    /// Connection failure, timeout, or a body read that failed mid-stream.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("completion request failed ({status}): {body}")]
    Status { status: StatusCode, body: String },
}
