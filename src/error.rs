//! Error types shared by the orchestration layer.
//!
//! Read paths (search) catch these at their boundary and degrade to an empty
//! result. Write paths (playlist save) hand them back to the caller.

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A required setting (client id, endpoint URL) is missing or unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No usable access token; an authorization redirect may already be under way.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// The provider answered with a non-success status.
    #[error("{step} failed with HTTP status {status}")]
    Transport {
        step: &'static str,
        status: StatusCode,
    },

    /// The request never produced a response (connection, TLS, body decoding).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A success response lacked a field the operation depends on.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// HTTP status carried by a transport failure, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Transport { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_auth_required(&self) -> bool {
        matches!(self, Error::AuthenticationRequired)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}
