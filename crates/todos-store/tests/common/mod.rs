use std::path::Path;

use todos_core::auth::hash_password_with_cost;
use todos_core_types::Sensitive;
use todos_store::users::insert_user;
use todos_store::SqliteStore;

/// Migrated in-memory store
#[allow(dead_code)]
pub fn setup_store() -> SqliteStore {
    SqliteStore::open_in_memory().expect("Failed to open in-memory store")
}

/// Migrated store in a database file under `dir`
#[allow(dead_code)]
pub fn setup_file_store(dir: &Path) -> SqliteStore {
    SqliteStore::open(dir.join("store.db")).expect("Failed to open file store")
}

/// Insert a user hashed at the minimum bcrypt cost
#[allow(dead_code)]
pub fn add_user(store: &SqliteStore, username: &str, password: &str) {
    let hash = hash_password_with_cost(&Sensitive::from(password), 4).unwrap();
    insert_user(store.connection(), username, &hash).unwrap();
}
