//! Failure taxonomy for catalog API calls.
//!
//! # Design
//! - Transport clients map every failure into [`ApiError`] so callers never see
//!   browser-specific error types.
//! - Only HTTP 401 counts as an authentication failure; it is the single trigger for
//!   forced logout.
//! - Display text for the UI prefers the server-provided message.

use catalog_api_models::ErrorBody;
use thiserror::Error;

/// Status code treated as an authentication failure.
pub const UNAUTHORIZED: u16 = 401;

/// Errors surfaced by the catalog API client.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {detail}")]
    Network {
        /// Transport failure detail.
        detail: String,
    },
    /// The server rejected the credentials or bearer token.
    #[error("authentication rejected")]
    Authentication {
        /// Server message, when one was sent.
        message: Option<String>,
    },
    /// The response could not be decoded into the expected shape.
    #[error("malformed response: {detail}")]
    Validation {
        /// Decoder failure detail.
        detail: String,
    },
    /// Any other non-success status.
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server message, when one was sent.
        message: Option<String>,
    },
}

impl ApiError {
    /// Classify a non-success response by status and optional error document.
    #[must_use]
    pub fn from_status(status: u16, body: Option<&ErrorBody>) -> Self {
        let message = body.and_then(ErrorBody::message).map(str::to_string);
        if status == UNAUTHORIZED {
            Self::Authentication { message }
        } else {
            Self::Status { status, message }
        }
    }

    /// Whether this failure must end the current session.
    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Message shown to the user: the server text when present, otherwise `fallback`.
    #[must_use]
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            Self::Authentication {
                message: Some(message),
            }
            | Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
