//! Error model used by Toggl API client operations.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TogglError>;

/// Represents the failures a report fetch can hit: non-success HTTP statuses with the response body, rejected credentials, transport problems, undecodable payloads and the workspace/pagination conditions the session refuses to paper over.
#[derive(Debug, Error)]
pub enum TogglError {
    #[error("http {status}: {message}")]
    Http { status: StatusCode, message: String },
    #[error("authentication error ({status}): {message}")]
    Authentication { status: StatusCode, message: String },
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to decode {context}: {message}")]
    Decode { context: String, message: String },
    #[error("workspace lookup returned no workspaces")]
    NoWorkspace,
    #[error("report metadata has per_page = {per_page}")]
    InvalidPagination { per_page: u64 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl TogglError {
    /// Builds the error for a non-success response, splitting out rejected credentials.
    pub fn from_status(status: StatusCode, body: impl Into<String>) -> Self {
        let message = body.into();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            TogglError::Authentication { status, message }
        } else {
            TogglError::Http { status, message }
        }
    }

    pub fn decode(context: impl Into<String>, err: serde_json::Error) -> Self {
        TogglError::Decode {
            context: context.into(),
            message: err.to_string(),
        }
    }

    /// Returns the HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TogglError::Http { status, .. } | TogglError::Authentication { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TogglError {
    /// Converts reqwest errors into semantic TogglError variants.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TogglError::Timeout(err.to_string())
        } else if err.is_status() {
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            TogglError::from_status(status, err.to_string())
        } else if err.is_connect() {
            TogglError::Network(err.to_string())
        } else {
            TogglError::Other(err.to_string())
        }
    }
}
