//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the remote service's wire schema but are defined
//! independently of the mock-server crate; integration tests catch any
//! schema drift between the two. Ids always originate from the server —
//! nothing in this crate fabricates a `TodoId`.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote store when a todo is created.
///
/// Opaque to the client: unique among currently-live todos, never reused.
pub type TodoId = u64;

/// A single todo item as known to the remote service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
}

/// Request payload for creating a new todo. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

/// Request payload for replacing the text of an existing todo. The id is
/// immutable and travels in the request path, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub text: String,
}
