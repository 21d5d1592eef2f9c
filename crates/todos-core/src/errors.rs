use todos_core_types::RequestId;
use thiserror::Error;

use crate::model::{ListId, TodoId};

/// Result type alias using TodosError
pub type Result<T> = std::result::Result<T, TodosError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in logs and failure responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Recoverable at the call site
    NotFound,
    DuplicateTitle,
    InvalidTitle,

    // Unexpected
    Persistence,
    Migration,
    PasswordHash,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::DuplicateTitle => "ERR_DUPLICATE_TITLE",
            ExErrorKind::InvalidTitle => "ERR_INVALID_TITLE",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Migration => "ERR_MIGRATION",
            ExErrorKind::PasswordHash => "ERR_PASSWORD_HASH",
        }
    }

    /// HTTP status the top-level handler answers with: 404 for lookups,
    /// 500 for everything else
    pub fn status(&self) -> u16 {
        match self {
            ExErrorKind::NotFound => 404,
            _ => 500,
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus request context so the top-level handler
/// can log one self-describing line per failed request.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    owner: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            owner: None,
            request_id: None,
            message: String::new(),
        }
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for store and request operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TodosError {
    // ===== Lookup Errors =====
    /// Todo list absent for the owner
    #[error("Todo list not found: {list_id}")]
    ListNotFound { list_id: ListId },

    /// Todo absent from the list
    #[error("Todo {todo_id} not found in list {list_id}")]
    TodoNotFound { list_id: ListId, todo_id: TodoId },

    // ===== Validation Errors =====
    /// Another list of the same owner already uses this title
    #[error("Todo list title already exists: {title}")]
    DuplicateTitle { title: String },

    /// Title failed length validation
    #[error("Invalid title: {reason}")]
    InvalidTitle { reason: String },

    // ===== Backend Errors =====
    /// Database failure other than a uniqueness violation
    #[error("Persistence error in {op}: {message}")]
    Persistence { op: String, message: String },

    /// Schema migration failed to apply
    #[error("Migration {migration_id} failed: {reason}")]
    Migration { migration_id: String, reason: String },

    /// Hashing or verifying a password failed (malformed stored hash)
    #[error("Password hash error: {message}")]
    PasswordHash { message: String },
}

impl TodosError {
    /// True for the recoverable duplicate-title condition
    pub fn is_duplicate_title(&self) -> bool {
        matches!(self, TodosError::DuplicateTitle { .. })
    }

    /// True for list/todo lookups that came back empty
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TodosError::ListNotFound { .. } | TodosError::TodoNotFound { .. }
        )
    }

    pub fn kind(&self) -> ExErrorKind {
        match self {
            TodosError::ListNotFound { .. } | TodosError::TodoNotFound { .. } => {
                ExErrorKind::NotFound
            }
            TodosError::DuplicateTitle { .. } => ExErrorKind::DuplicateTitle,
            TodosError::InvalidTitle { .. } => ExErrorKind::InvalidTitle,
            TodosError::Persistence { .. } => ExErrorKind::Persistence,
            TodosError::Migration { .. } => ExErrorKind::Migration,
            TodosError::PasswordHash { .. } => ExErrorKind::PasswordHash,
        }
    }
}

/// Distinguish the duplicate-title condition from other failures
///
/// Handlers call this on errors coming back from `create_list`/`rename_list`.
pub fn is_duplicate_title_error(err: &TodosError) -> bool {
    err.is_duplicate_title()
}

/// Conversion from TodosError to ExError
impl From<TodosError> for ExError {
    fn from(err: TodosError) -> Self {
        let kind = err.kind();
        match err {
            TodosError::ListNotFound { list_id } => ExError::new(kind)
                .with_entity_id(list_id.to_string())
                .with_message("Todo list not found"),
            TodosError::TodoNotFound { list_id, todo_id } => ExError::new(kind)
                .with_entity_id(todo_id.to_string())
                .with_message(format!("Todo not found in list {}", list_id)),
            TodosError::DuplicateTitle { title } => {
                ExError::new(kind).with_message(format!("Title already exists: {}", title))
            }
            TodosError::InvalidTitle { reason } => ExError::new(kind).with_message(reason),
            TodosError::Persistence { op, message } => {
                ExError::new(kind).with_op(op).with_message(message)
            }
            TodosError::Migration {
                migration_id,
                reason,
            } => ExError::new(kind)
                .with_op("migration")
                .with_entity_id(migration_id)
                .with_message(reason),
            TodosError::PasswordHash { message } => ExError::new(kind)
                .with_op("authenticate")
                .with_message(message),
        }
    }
}

impl From<&TodosError> for ExError {
    fn from(err: &TodosError) -> Self {
        ExError::from(err.clone())
    }
}
