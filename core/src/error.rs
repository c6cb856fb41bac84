//! Error types for the item API client.
//!
//! `NotFound` and `BadRequest` get dedicated variants because the CLI reports
//! them differently from other statuses. Anything else unexpected lands in
//! `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `ItemClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("item not found")]
    NotFound,

    /// The server returned 400; the body carries its reason.
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// Status code of the response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::BadRequest(_) => Some(400),
            ApiError::HttpError { status, .. } => Some(*status),
            ApiError::DeserializationError(_) | ApiError::SerializationError(_) => None,
        }
    }
}
