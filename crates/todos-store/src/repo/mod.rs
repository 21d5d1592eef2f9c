//! Repository layer implementing the store contract on SQLite

pub mod sqlite_store;

pub use sqlite_store::SqliteStore;
