//! Todos Engine - request handling layer
//!
//! Maps sign-in and list/todo requests onto a `TodoStore`, manages the
//! per-session state (auth, flash messages, session-memory data) and owns
//! lifecycle logging for every handled request.

pub mod app;
pub mod commands;
pub mod config;
pub mod session;

pub use app::{Backend, TodoApp};
pub use commands::{ListSummary, Request, Response, View};
pub use config::{AppConfig, BackendKind};
pub use session::{Flash, FlashKind, Session, SessionState};
