//! Core types shared across the Todos crates
//!
//! This crate provides foundational types used by the error, logging and
//! request-handling facilities:
//!
//! - **Correlation types**: RequestId, SessionId, RequestContext
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction of passwords
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{RequestContext, RequestId, SessionId};
pub use sensitive::Sensitive;
