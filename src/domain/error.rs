//! # Remote Errors
//!
//! Every way a call to the recommendation backend can fail.
//! Produced by the backend client, passed through the orchestrator unchanged and
//! rendered into chat text only by the router and the scheduler.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// Connection refused, timeout, DNS failure or a broken response body.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Non-2xx status without a parseable `{error}` body.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// The body did not match the expected success shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The backend answered with a structured `{error}` message.
    #[error("backend reported: {0}")]
    BackendReported(String),

    /// Well-formed success response without usable content.
    #[error("empty result")]
    Empty,
}

impl RemoteError {
    /// Chat-facing text for this error.
    pub fn user_message(&self) -> String {
        crate::strings::messages::remote_error(self)
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        RemoteError::Transport(err.to_string())
    }
}
