//! Error types for skill fetching.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while loading the skill bundle.
#[derive(Debug, Error)]
pub enum SkillError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A required document could not be fetched.
    #[error("failed to fetch {name} from {url}: {source}")]
    Fetch {
        name: String,
        url: String,
        source: reqwest::Error,
    },

    /// A required document was answered with a non-success status.
    #[error("failed to fetch {name} from {url}: HTTP {status}")]
    Status {
        name: String,
        url: String,
        status: StatusCode,
    },
}
