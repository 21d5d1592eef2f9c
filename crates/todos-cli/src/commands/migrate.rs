//! Migrate command
//!
//! Usage: todos migrate [--db <PATH>]

use clap::Args;
use todos_engine::{AppConfig, Backend};

#[derive(Debug, Args)]
pub struct MigrateArgs {}

pub fn execute(_args: MigrateArgs, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let relational = AppConfig {
        backend: todos_engine::BackendKind::Relational,
        ..config.clone()
    };

    // Opening the relational backend applies pending migrations
    let Backend::Relational(store) = Backend::from_config(&relational)? else {
        return Err("relational backend expected".into());
    };

    let applied = todos_store::migrations::applied_migrations(store.connection())?;
    println!(
        "✓ Database {} is at {}",
        relational.db_path.display(),
        applied.last().map(String::as_str).unwrap_or("no migrations")
    );
    Ok(())
}
