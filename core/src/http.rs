//! Plain-data HTTP request and response types.
//!
//! # Design
//! These types describe HTTP round-trips as plain data. `TodoClient` builds
//! `HttpRequest` values and interprets `HttpResponse` values without ever
//! touching the network — executing the round-trip belongs to the `TodoApi`
//! implementation. The split keeps request construction and status/body
//! interpretation deterministic and testable without a server.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! freely between the builder, the executor, and test code.

/// Request method, restricted to the verbs the todo service uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A not-yet-executed request.
///
/// Built by `TodoClient::build_*` methods and handed to an executor for the
/// actual network round-trip.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// The observable outcome of an executed request.
///
/// Produced by the executor after completing an `HttpRequest`, then passed
/// to `TodoClient::parse_*` methods for status interpretation and decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
