//! User provisioning
//!
//! Usage: todos user add <USERNAME> --password <PW>
//!        todos user hash --password <PW>

use clap::{Args, Subcommand};
use todos_core::auth::hash_password_with_cost;
use todos_core_types::Sensitive;
use todos_engine::AppConfig;
use todos_store::users::create_user;
use todos_store::SqliteStore;

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Add a user to the relational database
    Add(AddArgs),
    /// Print a bcrypt hash for a session-backend users file
    Hash(HashArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    pub username: String,

    #[arg(long, env = "TODOS_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// bcrypt cost factor
    #[arg(long, default_value_t = bcrypt::DEFAULT_COST)]
    pub cost: u32,
}

#[derive(Debug, Args)]
pub struct HashArgs {
    #[arg(long, env = "TODOS_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// bcrypt cost factor
    #[arg(long, default_value_t = bcrypt::DEFAULT_COST)]
    pub cost: u32,
}

pub fn execute(args: UserArgs, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        UserCommand::Add(add_args) => execute_add(add_args, config),
        UserCommand::Hash(hash_args) => {
            let hash = hash_password_with_cost(&Sensitive::new(hash_args.password), hash_args.cost)?;
            println!("{}", hash);
            Ok(())
        }
    }
}

fn execute_add(args: AddArgs, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let username = args.username.trim();
    if username.is_empty() {
        return Err("username must not be empty".into());
    }

    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let store = SqliteStore::open(&config.db_path)?;

    let password = Sensitive::new(args.password);
    if !create_user(store.connection(), username, &password, args.cost)? {
        return Err(format!("user '{}' already exists", username).into());
    }

    println!("✓ Added user {}", username);
    Ok(())
}
