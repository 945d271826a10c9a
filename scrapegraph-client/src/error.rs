//! Error types for the ScrapeGraphAI client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while driving a job through the API.
///
/// None of these escape the public endpoint wrappers; they are converted
/// into error envelopes at that boundary. The variants exist so the
/// conversion can produce distinguishable messages.
#[derive(Debug, Error)]
pub enum ClientError {
    /// API returned a non-2xx status. The message carries the category
    /// derived from the status code plus any server-supplied detail.
    #[error("{message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Category plus optional server detail
        message: String,
    },

    /// A single HTTP request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The job never reached a terminal state within the polling deadline.
    /// Distinct from [`ClientError::Timeout`]: no individual call hung, the
    /// job itself did not finish in budget.
    #[error("Polling timed out")]
    PollingTimeout,

    /// Server explicitly reported the job as failed.
    #[error("{0}")]
    JobFailed(String),

    /// Submit response carried no usable identifier to poll with.
    #[error("Missing {0} in response")]
    MissingJobId(String),

    /// Network-level failure (DNS, connection reset, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the JSON shape we expected.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Network(err.to_string())
        }
    }
}
