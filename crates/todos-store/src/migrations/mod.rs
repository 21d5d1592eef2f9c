//! Migration framework
//!
//! - Embedded SQL migrations, applied in order
//! - One transaction per migration, recorded in `schema_version`
//! - Idempotent re-application with checksum verification

mod checksums;
mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::{applied_migrations, apply_migrations};
