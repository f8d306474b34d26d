use thiserror::Error;

use crate::domain::TaskId;

/// Errors raised by the marketplace collaborators.
///
/// The scoring/filter core is total and never produces one of these.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Marketplace returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Marketplace returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("submission rejected for task_id={0}: {1}")]
    SubmissionRejected(TaskId, String),

    #[error("{0}")]
    Other(String),
}
