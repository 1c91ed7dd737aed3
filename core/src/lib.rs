//! Client core for keeping a todo list synchronized with its HTTP service.
//!
//! # Overview
//! Two layers. The transport layer builds `HttpRequest` values and parses
//! `HttpResponse` values (`TodoClient`), with `HttpTodoApi` executing the
//! round-trips behind the `TodoApi` trait. The synchronizer layer
//! (`TodoList` over `ListState`) mirrors the server's list and mutates it
//! only on confirmed completions.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`. Each CRUD
//!   operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Mutations are confirmation-gated: `ListState` changes items only when
//!   a `finish_*` call delivers a success result, never at dispatch.
//! - `TodoApi` is the seam for substituting transports; tests script it,
//!   production uses reqwest.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod state;
pub mod sync;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::{ListSnapshot, ListState};
pub use sync::TodoList;
pub use transport::{HttpTodoApi, TodoApi};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
