//! Todos CLI
//!
//! Command-line interface for the todos store and request layer

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use todos_engine::{AppConfig, BackendKind};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "todos")]
#[command(about = "Todos - session-authenticated todo lists", long_about = None)]
struct Cli {
    /// SQLite database path
    #[arg(long, global = true, env = "TODOS_DB_PATH")]
    db: Option<PathBuf>,

    /// Store backend: relational or session
    #[arg(long, global = true, env = "TODOS_BACKEND", value_parser = parse_backend)]
    backend: Option<BackendKind>,

    /// TOML file of users for the session backend
    #[arg(long, global = true, env = "TODOS_USERS_FILE")]
    users_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn parse_backend(value: &str) -> Result<BackendKind, String> {
    value
        .parse()
        .map_err(|v| format!("unknown backend '{}'", v))
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply schema migrations
    Migrate(commands::migrate::MigrateArgs),
    /// User provisioning
    User(commands::user::UserArgs),
    /// Sign in and show all lists
    Lists(commands::lists::ListsArgs),
    /// Sign in and run a single request
    Request(commands::request::RequestArgs),
}

fn load_config(cli: &Cli) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut config = AppConfig::from_env()?;
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    if let Some(users_file) = &cli.users_file {
        config.users_file = Some(users_file.clone());
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli)?;
    todos_core::logging_facility::init(config.log_profile);

    match cli.command {
        Commands::Migrate(args) => commands::migrate::execute(args, &config),
        Commands::User(args) => commands::user::execute(args, &config),
        Commands::Lists(args) => commands::lists::execute(args, &config),
        Commands::Request(args) => commands::request::execute(args, &config),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
