//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Lifecycle macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for assertions on emitted events
//!
//! The request layer owns lifecycle events: it logs start/end/error once per
//! request. Store backends only emit `debug!` lines.
//!
//! # Usage
//!
//! ```rust
//! use todos_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
