//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical between the store backends
//! and the request layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_SESSION_ID: &str = "session_id";

// Entity identifiers
pub const FIELD_OWNER: &str = "owner";
pub const FIELD_LIST_ID: &str = "list_id";
pub const FIELD_TODO_ID: &str = "todo_id";

// Request outcome
pub const FIELD_BACKEND: &str = "backend";
pub const FIELD_STATUS: &str = "status";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
