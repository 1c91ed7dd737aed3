//! Mirrored list state and its transition rules.
//!
//! # Design
//! `ListState` is a plain state machine with no I/O: every server operation
//! is bracketed by one `begin` call at dispatch and exactly one `finish_*`
//! call at completion. Items change only in `finish_*` on a success result,
//! so the mirror never shows a todo the server has not confirmed. Because
//! the transitions are synchronous functions, tests can interleave begins
//! and finishes in any order the network could produce.

use tracing::{debug, warn};

use crate::error::ApiError;
use crate::types::{Todo, TodoId};

/// Point-in-time copy of the synchronized list, for callers that want an
/// owned view rather than borrowed accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    pub items: Vec<Todo>,
    pub busy: bool,
    pub last_error: Option<String>,
}

/// Client-side mirror of the server's todo list.
///
/// `busy` derives from a counter of unresolved operations, so it stays true
/// while any request is outstanding and drops to false only when the last
/// one resolves. `last_error` holds the most recent failure description and
/// is cleared when a new operation begins.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    items: Vec<Todo>,
    in_flight: u32,
    last_error: Option<String>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            items: self.items.clone(),
            busy: self.busy(),
            last_error: self.last_error.clone(),
        }
    }

    /// Mark one operation as dispatched. Every `begin` must be paired with
    /// exactly one `finish_*` call.
    pub fn begin(&mut self) {
        self.in_flight += 1;
        self.last_error = None;
    }

    /// Resolve a refresh: on success the server's list replaces the mirror
    /// wholesale.
    pub fn finish_load(&mut self, result: Result<Vec<Todo>, ApiError>) {
        match result {
            Ok(todos) => {
                debug!(count = todos.len(), "list replaced from server");
                self.items = todos;
            }
            Err(err) => self.record_failure("loading todos failed", &err),
        }
        self.resolve();
    }

    /// Resolve a create: on success the server-assigned todo is appended.
    pub fn finish_add(&mut self, result: Result<Todo, ApiError>) {
        match result {
            Ok(todo) => {
                debug!(id = todo.id, "todo added");
                self.items.push(todo);
            }
            Err(err) => self.record_failure("adding todo failed", &err),
        }
        self.resolve();
    }

    /// Resolve an update: on success the confirmed todo replaces the entry
    /// with the matching id. If the entry is gone (deleted while the update
    /// was in flight) the completion is dropped.
    pub fn finish_edit(&mut self, result: Result<Todo, ApiError>) {
        match result {
            Ok(updated) => match self.items.iter_mut().find(|item| item.id == updated.id) {
                Some(item) => {
                    debug!(id = updated.id, "todo updated");
                    *item = updated;
                }
                None => warn!(id = updated.id, "updated todo no longer present"),
            },
            Err(err) => self.record_failure("updating todo failed", &err),
        }
        self.resolve();
    }

    /// Resolve a delete: on success every entry with the given id is removed.
    pub fn finish_remove(&mut self, id: TodoId, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                debug!(id, "todo removed");
                self.items.retain(|item| item.id != id);
            }
            Err(err) => self.record_failure("deleting todo failed", &err),
        }
        self.resolve();
    }

    fn record_failure(&mut self, what: &str, err: &ApiError) {
        warn!(%err, "{what}");
        self.last_error = Some(format!("{what}: {err}"));
    }

    fn resolve(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}
