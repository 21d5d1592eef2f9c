//! Top-level request handling
//!
//! `TodoApp::handle` is the one place that logs request lifecycles and turns
//! unexpected errors into failure responses.

use std::collections::HashMap;
use std::time::Instant;

use todos_core::auth::UserDirectory;
use todos_core::errors::{ExError, TodosError};
use todos_core::ops::SessionStore;
use todos_core::{log_op_end, log_op_error, log_op_start};
use todos_core_types::RequestContext;
use todos_store::SqliteStore;

use crate::commands::{handle_request, Method, Request, Response};
use crate::config::{AppConfig, BackendKind, ConfigError};
use crate::session::Session;

const MSG_NOT_FOUND: &str = "Not found.";
const MSG_UNEXPECTED: &str = "Something went wrong.";

/// The store serving requests
pub enum Backend {
    /// Shared SQLite database
    Relational(SqliteStore),
    /// Per-session data; the directory holds the known credentials
    SessionMemory(UserDirectory),
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Relational(_) => "relational",
            Backend::SessionMemory(_) => "session",
        }
    }

    /// Open the backend selected by `config`
    ///
    /// The relational backend creates the database's parent directory if
    /// needed and migrates the schema.
    ///
    /// # Errors
    ///
    /// `Store` if the database cannot be opened or migrated; users file
    /// errors for the session backend.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        match config.backend {
            BackendKind::Relational => {
                if let Some(parent) = config.db_path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent).map_err(|e| TodosError::Persistence {
                            op: "open_store".to_string(),
                            message: e.to_string(),
                        })?;
                    }
                }
                Ok(Backend::Relational(SqliteStore::open(&config.db_path)?))
            }
            BackendKind::Session => Ok(Backend::SessionMemory(config.load_users()?)),
        }
    }
}

pub struct TodoApp {
    backend: Backend,
}

impl TodoApp {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Route and handle one raw request
    ///
    /// Unroutable paths answer with a 404 failure.
    pub fn dispatch(
        &mut self,
        session: &mut Session,
        method: Method,
        path: &str,
        form: &HashMap<String, String>,
    ) -> Response {
        match Request::route(method, path, form) {
            Some(request) => self.handle(session, request),
            None => {
                tracing::warn!(?method, path, "no route");
                Response::Failure {
                    status: 404,
                    message: MSG_NOT_FOUND.to_string(),
                }
            }
        }
    }

    /// Handle one request for `session`
    pub fn handle(&mut self, session: &mut Session, request: Request) -> Response {
        let mut ctx = RequestContext::new().with_session_id(session.id.clone());
        if let Some(owner) = session.state.owner() {
            ctx = ctx.with_owner(owner);
        }

        let op = request.op();
        let backend = self.backend.name();
        let owner = ctx.owner.as_deref().unwrap_or_default();
        let start = Instant::now();
        log_op_start!(
            op,
            request_id = ctx.request_id.as_str(),
            owner = owner,
            backend = backend
        );

        let Session { state, data, .. } = session;
        let result = match &mut self.backend {
            Backend::Relational(store) => handle_request(request, state, store),
            Backend::SessionMemory(users) => {
                let mut store = SessionStore::new(data, users);
                handle_request(request, state, &mut store)
            }
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        match result {
            Ok(response) => {
                log_op_end!(
                    op,
                    duration_ms = duration_ms,
                    request_id = ctx.request_id.as_str(),
                    owner = owner,
                    backend = backend,
                    status = response.status()
                );
                response
            }
            Err(err) => {
                let ex = ExError::from(err)
                    .with_op(op)
                    .with_request_id(ctx.request_id.clone());
                let status = ex.kind().status();
                log_op_error!(
                    op,
                    ex.clone(),
                    duration_ms = duration_ms,
                    request_id = ctx.request_id.as_str(),
                    owner = owner,
                    backend = backend,
                    status = status
                );

                let message = if status == 404 {
                    MSG_NOT_FOUND
                } else {
                    MSG_UNEXPECTED
                };
                Response::Failure {
                    status,
                    message: message.to_string(),
                }
            }
        }
    }
}
