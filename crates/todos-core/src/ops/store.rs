use todos_core_types::Sensitive;

use crate::errors::Result;
use crate::model::{ListId, Todo, TodoId, TodoList};

/// Persistence contract shared by the relational and session-memory backends
///
/// Every operation is scoped by `owner`; an owner can never observe or mutate
/// another owner's lists. Reads return owned snapshots. Lists and todos coming
/// out of [`all_lists`](TodoStore::all_lists) and
/// [`get_list`](TodoStore::get_list) are ordered by [`crate::ops::sort`].
pub trait TodoStore {
    /// Check a password against the stored credential of `username`
    ///
    /// Returns `Ok(false)` for unknown usernames and wrong passwords alike.
    ///
    /// # Errors
    ///
    /// `PasswordHash` if the stored credential is not a valid hash,
    /// `Persistence` if the credential could not be read.
    fn authenticate(&self, username: &str, password: &Sensitive<String>) -> Result<bool>;

    /// All lists of `owner`: not-done lists first, each partition by title
    ///
    /// # Errors
    ///
    /// `Persistence` on backend failure.
    fn all_lists(&self, owner: &str) -> Result<Vec<TodoList>>;

    /// Load a single list with its sorted todos
    ///
    /// # Errors
    ///
    /// `Persistence` on backend failure. A missing list is `Ok(None)`.
    fn get_list(&self, owner: &str, list_id: ListId) -> Result<Option<TodoList>>;

    /// Load a single todo
    ///
    /// # Errors
    ///
    /// `Persistence` on backend failure. A missing list or todo is `Ok(None)`.
    fn get_todo(&self, owner: &str, list_id: ListId, todo_id: TodoId) -> Result<Option<Todo>>;

    fn is_list_done(&self, list: &TodoList) -> bool {
        list.is_done()
    }

    fn has_undone_todos(&self, list: &TodoList) -> bool {
        list.has_undone_todos()
    }

    /// Whether `owner` already has a list titled `title`
    ///
    /// # Errors
    ///
    /// `Persistence` on backend failure.
    fn exists_list_title(&self, owner: &str, title: &str) -> Result<bool>;

    /// Create an empty list
    ///
    /// # Errors
    ///
    /// `DuplicateTitle` if the owner already has a list with this title.
    fn create_list(&mut self, owner: &str, title: &str) -> Result<ListId>;

    /// Rename a list; `Ok(false)` if the list does not exist
    ///
    /// # Errors
    ///
    /// `DuplicateTitle` if another list of the owner already has this title.
    fn rename_list(&mut self, owner: &str, list_id: ListId, title: &str) -> Result<bool>;

    /// Delete a list and its todos; `Ok(false)` if nothing was removed
    ///
    /// # Errors
    ///
    /// `Persistence` on backend failure.
    fn delete_list(&mut self, owner: &str, list_id: ListId) -> Result<bool>;

    /// Append a new undone todo to a list
    ///
    /// # Errors
    ///
    /// `ListNotFound` if the list does not exist for the owner.
    fn create_todo(&mut self, owner: &str, list_id: ListId, title: &str) -> Result<TodoId>;

    /// Delete a todo; `Ok(false)` if nothing was removed
    ///
    /// # Errors
    ///
    /// `Persistence` on backend failure.
    fn delete_todo(&mut self, owner: &str, list_id: ListId, todo_id: TodoId) -> Result<bool>;

    /// Set the done flag of a todo; `Ok(false)` if the todo does not exist
    ///
    /// # Errors
    ///
    /// `Persistence` on backend failure.
    fn set_todo_done(
        &mut self,
        owner: &str,
        list_id: ListId,
        todo_id: TodoId,
        done: bool,
    ) -> Result<bool>;

    /// Mark every todo of a list done, returning how many rows were touched
    ///
    /// # Errors
    ///
    /// `Persistence` on backend failure.
    fn mark_all_done(&mut self, owner: &str, list_id: ListId) -> Result<usize>;
}
