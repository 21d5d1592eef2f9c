//! Todos Store - relational backend on SQLite
//!
//! Provides:
//! - SQLite schema with a checksummed migrations framework
//! - `SqliteStore`, the relational implementation of `TodoStore`
//! - User provisioning for the `users` table

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod users;

// Re-export key types
pub use repo::SqliteStore;
pub use errors::Result;
