use serde::{Deserialize, Serialize};

use super::todo::{Todo, TodoId};

/// Identifier of a todo list, unique per owner
pub type ListId = i64;

/// TodoList - a named, ordered collection of todos belonging to one owner
///
/// The owner is not stored on the value: every store operation is already
/// scoped by owner, and lists are never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: ListId,
    pub title: String,
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Create a new empty list
    pub fn new(id: ListId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// A list is done iff it has at least one todo and every todo is done
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(Todo::is_done)
    }

    pub fn has_undone_todos(&self) -> bool {
        self.todos.iter().any(|todo| !todo.done)
    }

    pub fn count_all(&self) -> usize {
        self.todos.len()
    }

    pub fn count_done(&self) -> usize {
        self.todos.iter().filter(|todo| todo.done).count()
    }

    pub fn find_todo(&self, todo_id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == todo_id)
    }

    pub(crate) fn find_todo_mut(&mut self, todo_id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == todo_id)
    }
}
