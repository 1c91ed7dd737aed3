//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because "the todo does not exist" is
//! the one failure the service reports per-item (unknown id on update or
//! delete). All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging. `Network` and `Timeout` cover
//! failures that happen before a status code exists at all.

use thiserror::Error;

/// Errors returned by transport operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the addressed todo does not exist.
    #[error("todo not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request could not be delivered or the connection failed before a
    /// response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The configured request deadline elapsed without a response.
    #[error("request timed out")]
    Timeout,

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
