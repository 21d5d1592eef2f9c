#![allow(clippy::unwrap_used, clippy::expect_used)]

use rusqlite::Connection;
use tempfile::TempDir;
use todos_core::TodoStore;
use todos_store::SqliteStore;

fn table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // GIVEN an empty database
    let mut conn = Connection::open_in_memory().unwrap();

    // WHEN migrations are applied
    todos_store::migrations::apply_migrations(&mut conn).unwrap();

    // THEN the schema tables exist
    assert_eq!(
        table_names(&conn),
        vec!["schema_version", "todolists", "todos", "users"]
    );
}

#[test]
fn test_reopen_file_database_keeps_data() {
    // GIVEN a file database with one list
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.db");
    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.create_list("alice", "Groceries").unwrap();
    }

    // WHEN it is reopened (migrations run again)
    let store = SqliteStore::open(&path).unwrap();

    // THEN the data survived and no migration was re-recorded
    assert_eq!(store.all_lists("alice").unwrap().len(), 1);
    let applied = todos_store::migrations::applied_migrations(store.connection()).unwrap();
    assert_eq!(applied.len(), todos_store::migrations::get_migrations().len());
}
