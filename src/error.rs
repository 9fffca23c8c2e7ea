//! Load Errors
//!
//! Failure taxonomy for fetching the timeline. The filter and reveal logic
//! operate on validated in-memory data and have no error paths.

use thiserror::Error;

/// Shown when the request itself fails
pub const TRANSPORT_MESSAGE: &str = "Failed to fetch timeline data";
/// Shown when the server answers with something other than the envelope
pub const MALFORMED_MESSAGE: &str = "Invalid data received from server";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Network failure, CORS rejection or non-2xx status.
    #[error("transport error: {0}")]
    Transport(String),

    /// A response arrived but did not match `{ "Timeline": [...] }`.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl LoadError {
    /// Fixed user-facing text for this failure
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::Transport(_) => TRANSPORT_MESSAGE,
            LoadError::MalformedResponse(_) => MALFORMED_MESSAGE,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, LoadError::Transport(_))
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::MalformedResponse(err.to_string())
    }
}
