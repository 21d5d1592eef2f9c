//! Request dispatch
//!
//! `Request` is the typed form of one inbound request, `Response` what the
//! handlers produce for it. `handle_request` is the single entry point that
//! runs a request against a store.

pub mod handlers;
pub mod request;
pub mod response;

pub use handlers::handle_request;
pub use request::{Method, Request};
pub use response::{ListSummary, Response, View};
