//! Random source error types.

use thiserror::Error;

/// Ways a single draw can fail. None of them are retried.
#[derive(Debug, Error)]
pub enum RandomError {
    /// Could not reach the service, or it answered with a non-success status.
    #[error("Request to random.org failed: {0}")]
    Transport(String),

    /// The service did not answer within the configured deadline.
    #[error("Request to random.org timed out.")]
    Timeout,

    /// The response body is not a decimal fraction in `[0, 1)`.
    #[error("Invalid response from random.org: {0}")]
    Format(String),
}

impl From<reqwest::Error> for RandomError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(e.to_string())
        }
    }
}
