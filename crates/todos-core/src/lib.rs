//! Todos Core - domain model and store contract
//!
//! This crate holds everything both storage backends share:
//! - `TodoList` and `Todo` models with derived done-state
//! - The `TodoStore` contract every backend implements
//! - Deterministic list/todo ordering
//! - The session-memory backend and its seed data
//! - Title validation, password hashing, error taxonomy and logging facility

pub mod auth;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;
pub mod seed;

// Schema constants referenced by the logging macros
pub use todos_core_types::schema;

// Re-export commonly used types
pub use auth::{UserDirectory, UserRecord};
pub use errors::{ExError, ExErrorKind, Result, TodosError};
pub use model::{ListId, Todo, TodoId, TodoList};
pub use ops::{SessionData, SessionStore, TodoStore};
