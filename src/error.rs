use reqwest::StatusCode;
use std::fmt;

/// Error type shared across the whole client.
///
/// Every failure a caller can observe funnels into one of these variants:
/// transport problems, non-2xx answers from the backend (the verbatim body
/// text is kept so it can be shown to the user), malformed payloads, and
/// local pre-submission validation failures that never reach the network.
#[derive(Debug)]
pub enum AppError {
    /// The backend answered with a non-success status code
    Http {
        /// HTTP status code of the response
        status: StatusCode,
        /// Response body, passed through verbatim
        body: String,
    },
    /// The request never completed (connection, DNS, timeout, ...)
    Network(reqwest::Error),
    /// The response body could not be decoded as the expected JSON shape
    Json(serde_json::Error),
    /// A locally validated input was rejected before any request was made
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http { status, body } => {
                if body.is_empty() {
                    write!(f, "http status {status}")
                } else {
                    write!(f, "http status {status}: {body}")
                }
            }
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "deserialization error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
