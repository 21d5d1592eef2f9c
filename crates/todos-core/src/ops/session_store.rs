use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use todos_core_types::Sensitive;

use super::sort::{sort_list_todos, sort_todo_lists};
use super::store::TodoStore;
use crate::auth::UserDirectory;
use crate::errors::{Result, TodosError};
use crate::model::{ListId, Todo, TodoId, TodoList};
use crate::seed::seed_lists;

/// Lists of one owner plus the id sequence they draw from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerLists {
    lists: Vec<TodoList>,
    next_id: i64,
}

impl OwnerLists {
    /// The seed lists every owner starts with
    pub fn seeded() -> Self {
        let mut next_id = 0;
        let lists = seed_lists(&mut next_id);
        Self { lists, next_id }
    }

    fn take_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn find(&self, list_id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    fn find_mut(&mut self, list_id: ListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|list| list.id == list_id)
    }

    fn title_taken(&self, title: &str, except: Option<ListId>) -> bool {
        self.lists
            .iter()
            .any(|list| list.title == title && Some(list.id) != except)
    }
}

/// To-do data attached to one session
///
/// Owners are seeded lazily: an owner that has never been written to reads
/// as the seed data, and the first mutation materializes exactly that data.
/// Seeding is deterministic, so reads before and after materialization agree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    owners: BTreeMap<String, OwnerLists>,
}

impl SessionData {
    pub fn new() -> Self {
        Self::default()
    }

    fn owner(&self, owner: &str) -> Cow<'_, OwnerLists> {
        match self.owners.get(owner) {
            Some(lists) => Cow::Borrowed(lists),
            None => Cow::Owned(OwnerLists::seeded()),
        }
    }

    fn owner_mut(&mut self, owner: &str) -> &mut OwnerLists {
        self.owners
            .entry(owner.to_string())
            .or_insert_with(OwnerLists::seeded)
    }

    /// Whether `owner` has been written to in this session
    pub fn is_materialized(&self, owner: &str) -> bool {
        self.owners.contains_key(owner)
    }
}

/// Session-memory backend
///
/// Borrows the session's [`SessionData`] for the duration of one request.
/// All operations are synchronous scans over small vectors; results are
/// cloned snapshots, never references into the session.
pub struct SessionStore<'a> {
    data: &'a mut SessionData,
    users: &'a UserDirectory,
}

impl<'a> SessionStore<'a> {
    pub fn new(data: &'a mut SessionData, users: &'a UserDirectory) -> Self {
        Self { data, users }
    }
}

impl TodoStore for SessionStore<'_> {
    fn authenticate(&self, username: &str, password: &Sensitive<String>) -> Result<bool> {
        self.users.authenticate(username, password)
    }

    fn all_lists(&self, owner: &str) -> Result<Vec<TodoList>> {
        Ok(sort_todo_lists(self.data.owner(owner).lists.clone()))
    }

    fn get_list(&self, owner: &str, list_id: ListId) -> Result<Option<TodoList>> {
        Ok(self
            .data
            .owner(owner)
            .find(list_id)
            .cloned()
            .map(sort_list_todos))
    }

    fn get_todo(&self, owner: &str, list_id: ListId, todo_id: TodoId) -> Result<Option<Todo>> {
        Ok(self
            .data
            .owner(owner)
            .find(list_id)
            .and_then(|list| list.find_todo(todo_id))
            .cloned())
    }

    fn exists_list_title(&self, owner: &str, title: &str) -> Result<bool> {
        Ok(self.data.owner(owner).title_taken(title, None))
    }

    fn create_list(&mut self, owner: &str, title: &str) -> Result<ListId> {
        let lists = self.data.owner_mut(owner);
        if lists.title_taken(title, None) {
            return Err(TodosError::DuplicateTitle {
                title: title.to_string(),
            });
        }

        let id = lists.take_id();
        lists.lists.push(TodoList::new(id, title));
        tracing::debug!(owner, list_id = id, "session list created");
        Ok(id)
    }

    fn rename_list(&mut self, owner: &str, list_id: ListId, title: &str) -> Result<bool> {
        let lists = self.data.owner_mut(owner);
        if lists.find(list_id).is_none() {
            return Ok(false);
        }
        if lists.title_taken(title, Some(list_id)) {
            return Err(TodosError::DuplicateTitle {
                title: title.to_string(),
            });
        }

        if let Some(list) = lists.find_mut(list_id) {
            list.title = title.to_string();
        }
        Ok(true)
    }

    fn delete_list(&mut self, owner: &str, list_id: ListId) -> Result<bool> {
        let lists = self.data.owner_mut(owner);
        let before = lists.lists.len();
        lists.lists.retain(|list| list.id != list_id);
        Ok(lists.lists.len() < before)
    }

    fn create_todo(&mut self, owner: &str, list_id: ListId, title: &str) -> Result<TodoId> {
        let lists = self.data.owner_mut(owner);
        if lists.find(list_id).is_none() {
            return Err(TodosError::ListNotFound { list_id });
        }

        let id = lists.take_id();
        if let Some(list) = lists.find_mut(list_id) {
            list.todos.push(Todo::new(id, title));
        }
        tracing::debug!(owner, list_id, todo_id = id, "session todo created");
        Ok(id)
    }

    fn delete_todo(&mut self, owner: &str, list_id: ListId, todo_id: TodoId) -> Result<bool> {
        let Some(list) = self.data.owner_mut(owner).find_mut(list_id) else {
            return Ok(false);
        };
        let before = list.todos.len();
        list.todos.retain(|todo| todo.id != todo_id);
        Ok(list.todos.len() < before)
    }

    fn set_todo_done(
        &mut self,
        owner: &str,
        list_id: ListId,
        todo_id: TodoId,
        done: bool,
    ) -> Result<bool> {
        let todo = self
            .data
            .owner_mut(owner)
            .find_mut(list_id)
            .and_then(|list| list.find_todo_mut(todo_id));

        match todo {
            Some(todo) => {
                if done {
                    todo.mark_done();
                } else {
                    todo.mark_undone();
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn mark_all_done(&mut self, owner: &str, list_id: ListId) -> Result<usize> {
        let Some(list) = self.data.owner_mut(owner).find_mut(list_id) else {
            return Ok(0);
        };
        list.todos.iter_mut().for_each(Todo::mark_done);
        Ok(list.todos.len())
    }
}
