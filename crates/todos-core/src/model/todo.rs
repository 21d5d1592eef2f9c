use serde::{Deserialize, Serialize};

/// Identifier of a todo, unique within its list
pub type TodoId = i64;

/// Todo - a titled task inside a todo list
///
/// A todo is either undone or done; both transitions are user-triggered and
/// reversible. Deleting removes the todo rather than moving it to a final state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

impl Todo {
    /// Create a new todo in the undone state
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }
}
