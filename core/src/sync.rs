//! Async driver that keeps a `ListState` synchronized through a `TodoApi`.

use tracing::trace;

use crate::state::{ListSnapshot, ListState};
use crate::transport::TodoApi;
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// A server-synchronized todo list.
///
/// Each operation awaits server confirmation before the mirrored items
/// change; failures leave the items as they were and surface through
/// `last_error`. Inputs that would be rejected anyway (blank text) are
/// dropped before dispatch without touching the state at all.
pub struct TodoList<A> {
    api: A,
    state: ListState,
}

impl<A: TodoApi> TodoList<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ListState::new(),
        }
    }

    /// Fetch the server's list and replace the mirror with it.
    pub async fn load(&mut self) {
        self.state.begin();
        let result = self.api.list_todos().await;
        self.state.finish_load(result);
    }

    /// Create a todo with the given text. Blank text is ignored.
    pub async fn add(&mut self, text: &str) {
        if text.trim().is_empty() {
            trace!("ignoring add with blank text");
            return;
        }
        self.state.begin();
        let input = CreateTodo {
            text: text.to_string(),
        };
        let result = self.api.create_todo(&input).await;
        self.state.finish_add(result);
    }

    /// Replace the text of the todo with the given id. Blank text is ignored.
    pub async fn edit(&mut self, id: TodoId, text: &str) {
        if text.trim().is_empty() {
            trace!(id, "ignoring edit with blank text");
            return;
        }
        self.state.begin();
        let input = UpdateTodo {
            text: text.to_string(),
        };
        let result = self.api.update_todo(id, &input).await;
        self.state.finish_edit(result);
    }

    /// Delete the todo with the given id.
    pub async fn remove(&mut self, id: TodoId) {
        self.state.begin();
        let result = self.api.delete_todo(id).await;
        self.state.finish_remove(id, result);
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn items(&self) -> &[Todo] {
        self.state.items()
    }

    pub fn busy(&self) -> bool {
        self.state.busy()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error()
    }

    pub fn snapshot(&self) -> ListSnapshot {
        self.state.snapshot()
    }
}
