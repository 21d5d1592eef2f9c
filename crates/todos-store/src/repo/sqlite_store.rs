//! Relational `TodoStore`
//!
//! Every operation is a single statement scoped by `username`, except the
//! two reads that load lists and their todos with independent SELECTs.

use std::collections::HashMap;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use todos_core::auth::verify_password;
use todos_core::errors::TodosError;
use todos_core::model::{ListId, Todo, TodoId, TodoList};
use todos_core::ops::sort::{sort_list_todos, sort_todo_lists};
use todos_core::ops::TodoStore;
use todos_core_types::Sensitive;

use crate::db;
use crate::errors::{from_title_write, in_op, Result};
use crate::migrations::apply_migrations;

/// SQLite-backed store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Wrap an already configured and migrated connection
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open (creating if needed) the database at `path` and migrate it
    ///
    /// # Errors
    ///
    /// `Persistence` if the file cannot be opened, `Migration` if the schema
    /// cannot be brought up to date.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut conn = db::open(path)?;
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self::new(conn))
    }

    /// Migrated in-memory database
    ///
    /// # Errors
    ///
    /// Same as [`SqliteStore::open`].
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = db::open_in_memory()?;
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self::new(conn))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn load_todos(&self, owner: &str, list_id: ListId) -> Result<Vec<Todo>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, done FROM todos
                 WHERE todolist_id = ?1 AND username = ?2",
            )
            .map_err(in_op("get_list"))?;

        let todos = stmt
            .query_map(params![list_id, owner], |row| {
                Ok(Todo {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    done: row.get(2)?,
                })
            })
            .map_err(in_op("get_list"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(in_op("get_list"))?;
        Ok(todos)
    }
}

impl TodoStore for SqliteStore {
    fn authenticate(&self, username: &str, password: &Sensitive<String>) -> Result<bool> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT password FROM users WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .optional()
            .map_err(in_op("authenticate"))?;

        match stored {
            Some(hash) => verify_password(password, &hash),
            None => Ok(false),
        }
    }

    fn all_lists(&self, owner: &str) -> Result<Vec<TodoList>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title FROM todolists WHERE username = ?1")
            .map_err(in_op("all_lists"))?;
        let mut lists = stmt
            .query_map(params![owner], |row| {
                Ok(TodoList::new(row.get(0)?, row.get::<_, String>(1)?))
            })
            .map_err(in_op("all_lists"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(in_op("all_lists"))?;

        let mut stmt = self
            .conn
            .prepare("SELECT todolist_id, id, title, done FROM todos WHERE username = ?1")
            .map_err(in_op("all_lists"))?;
        let rows = stmt
            .query_map(params![owner], |row| {
                Ok((
                    row.get::<_, ListId>(0)?,
                    Todo {
                        id: row.get(1)?,
                        title: row.get(2)?,
                        done: row.get(3)?,
                    },
                ))
            })
            .map_err(in_op("all_lists"))?;

        let mut by_list: HashMap<ListId, Vec<Todo>> = HashMap::new();
        for row in rows {
            let (list_id, todo) = row.map_err(in_op("all_lists"))?;
            by_list.entry(list_id).or_default().push(todo);
        }
        for list in &mut lists {
            list.todos = by_list.remove(&list.id).unwrap_or_default();
        }

        tracing::debug!(owner, count = lists.len(), "lists loaded");
        Ok(sort_todo_lists(lists))
    }

    fn get_list(&self, owner: &str, list_id: ListId) -> Result<Option<TodoList>> {
        let list = self
            .conn
            .query_row(
                "SELECT id, title FROM todolists WHERE id = ?1 AND username = ?2",
                params![list_id, owner],
                |row| Ok(TodoList::new(row.get(0)?, row.get::<_, String>(1)?)),
            )
            .optional()
            .map_err(in_op("get_list"))?;

        let Some(mut list) = list else {
            return Ok(None);
        };
        list.todos = self.load_todos(owner, list_id)?;
        Ok(Some(sort_list_todos(list)))
    }

    fn get_todo(&self, owner: &str, list_id: ListId, todo_id: TodoId) -> Result<Option<Todo>> {
        self.conn
            .query_row(
                "SELECT id, title, done FROM todos
                 WHERE id = ?1 AND todolist_id = ?2 AND username = ?3",
                params![todo_id, list_id, owner],
                |row| {
                    Ok(Todo {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        done: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(in_op("get_todo"))
    }

    fn exists_list_title(&self, owner: &str, title: &str) -> Result<bool> {
        self.conn
            .query_row(
                "SELECT EXISTS (SELECT 1 FROM todolists WHERE username = ?1 AND title = ?2)",
                params![owner, title],
                |row| row.get(0),
            )
            .map_err(in_op("exists_list_title"))
    }

    fn create_list(&mut self, owner: &str, title: &str) -> Result<ListId> {
        self.conn
            .execute(
                "INSERT INTO todolists (title, username) VALUES (?1, ?2)",
                params![title, owner],
            )
            .map_err(from_title_write("create_list", title))?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(owner, list_id = id, "list inserted");
        Ok(id)
    }

    fn rename_list(&mut self, owner: &str, list_id: ListId, title: &str) -> Result<bool> {
        let changed = self
            .conn
            .execute(
                "UPDATE todolists SET title = ?1 WHERE id = ?2 AND username = ?3",
                params![title, list_id, owner],
            )
            .map_err(from_title_write("rename_list", title))?;
        Ok(changed > 0)
    }

    fn delete_list(&mut self, owner: &str, list_id: ListId) -> Result<bool> {
        let removed = self
            .conn
            .execute(
                "DELETE FROM todolists WHERE id = ?1 AND username = ?2",
                params![list_id, owner],
            )
            .map_err(in_op("delete_list"))?;
        Ok(removed > 0)
    }

    fn create_todo(&mut self, owner: &str, list_id: ListId, title: &str) -> Result<TodoId> {
        let inserted = self
            .conn
            .execute(
                "INSERT INTO todos (title, todolist_id, username)
                 SELECT ?1, id, username FROM todolists WHERE id = ?2 AND username = ?3",
                params![title, list_id, owner],
            )
            .map_err(in_op("create_todo"))?;

        if inserted == 0 {
            return Err(TodosError::ListNotFound { list_id });
        }

        let id = self.conn.last_insert_rowid();
        tracing::debug!(owner, list_id, todo_id = id, "todo inserted");
        Ok(id)
    }

    fn delete_todo(&mut self, owner: &str, list_id: ListId, todo_id: TodoId) -> Result<bool> {
        let removed = self
            .conn
            .execute(
                "DELETE FROM todos WHERE id = ?1 AND todolist_id = ?2 AND username = ?3",
                params![todo_id, list_id, owner],
            )
            .map_err(in_op("delete_todo"))?;
        Ok(removed > 0)
    }

    fn set_todo_done(
        &mut self,
        owner: &str,
        list_id: ListId,
        todo_id: TodoId,
        done: bool,
    ) -> Result<bool> {
        let changed = self
            .conn
            .execute(
                "UPDATE todos SET done = ?1
                 WHERE id = ?2 AND todolist_id = ?3 AND username = ?4",
                params![done, todo_id, list_id, owner],
            )
            .map_err(in_op("set_todo_done"))?;
        Ok(changed > 0)
    }

    fn mark_all_done(&mut self, owner: &str, list_id: ListId) -> Result<usize> {
        self.conn
            .execute(
                "UPDATE todos SET done = 1 WHERE todolist_id = ?1 AND username = ?2",
                params![list_id, owner],
            )
            .map_err(in_op("mark_all_done"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_list_cascades_to_todos() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let list_id = store.create_list("alice", "Groceries").unwrap();
        store.create_todo("alice", list_id, "Milk").unwrap();

        assert!(store.delete_list("alice", list_id).unwrap());

        let remaining: i64 = store
            .connection()
            .query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0))
            .unwrap();
        assert_eq!(remaining, 0);
    }

    #[test]
    fn test_create_todo_in_foreign_list_is_not_found() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let list_id = store.create_list("alice", "Groceries").unwrap();

        let err = store.create_todo("bob", list_id, "Milk").unwrap_err();
        assert_eq!(err, TodosError::ListNotFound { list_id });
    }

    #[test]
    fn test_same_title_for_different_owners() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.create_list("alice", "Groceries").unwrap();
        store.create_list("bob", "Groceries").unwrap();
    }
}
