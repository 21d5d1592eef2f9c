//! Application configuration from the environment
//!
//! | Variable | Default |
//! |---|---|
//! | `TODOS_BACKEND` | `relational` (or `session`) |
//! | `TODOS_DB_PATH` | `.todos/store.db` |
//! | `TODOS_LOG_PROFILE` | `development` |
//! | `TODOS_USERS_FILE` | none; required by the `session` backend |
//!
//! A `.env` file in the working directory is loaded first.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use todos_core::auth::{UserDirectory, UserRecord};
use todos_core::errors::TodosError;
use todos_core::logging_facility::Profile;

pub const ENV_BACKEND: &str = "TODOS_BACKEND";
pub const ENV_DB_PATH: &str = "TODOS_DB_PATH";
pub const ENV_LOG_PROFILE: &str = "TODOS_LOG_PROFILE";
pub const ENV_USERS_FILE: &str = "TODOS_USERS_FILE";

pub const DEFAULT_DB_PATH: &str = ".todos/store.db";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },

    #[error("The session backend needs TODOS_USERS_FILE")]
    MissingUsersFile,

    #[error("Cannot read users file {path}: {message}")]
    UsersFile { path: PathBuf, message: String },

    #[error(transparent)]
    Store(#[from] TodosError),
}

/// Which `TodoStore` implementation serves requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    Relational,
    Session,
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "relational" | "sqlite" => Ok(BackendKind::Relational),
            "session" | "memory" => Ok(BackendKind::Session),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend: BackendKind,
    pub db_path: PathBuf,
    pub log_profile: Profile,
    pub users_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_profile: Profile::default(),
            users_file: None,
        }
    }
}

#[derive(Deserialize)]
struct UsersFile {
    #[serde(default)]
    users: Vec<UserRecord>,
}

impl AppConfig {
    /// Load `.env` (if present) and read the process environment
    ///
    /// # Errors
    ///
    /// `InvalidValue` for an unrecognised backend or log profile.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// `InvalidValue` for an unrecognised backend or log profile.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_BACKEND) {
            config.backend = value.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_BACKEND,
                value,
            })?;
        }
        if let Some(value) = lookup(ENV_DB_PATH) {
            config.db_path = PathBuf::from(value);
        }
        if let Some(value) = lookup(ENV_LOG_PROFILE) {
            config.log_profile = value.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_LOG_PROFILE,
                value,
            })?;
        }
        config.users_file = lookup(ENV_USERS_FILE).map(PathBuf::from);

        Ok(config)
    }

    /// Credentials for the session backend
    ///
    /// # Errors
    ///
    /// `MissingUsersFile` if no users file is configured, `UsersFile` if it
    /// cannot be read or parsed.
    pub fn load_users(&self) -> Result<UserDirectory, ConfigError> {
        let path = self
            .users_file
            .as_deref()
            .ok_or(ConfigError::MissingUsersFile)?;
        load_users_file(path)
    }
}

/// Parse a TOML file of `[[users]]` tables with `username` and `password_hash`
///
/// # Errors
///
/// `UsersFile` if the file cannot be read or is not valid TOML.
pub fn load_users_file(path: &Path) -> Result<UserDirectory, ConfigError> {
    let users_file_error = |message: String| ConfigError::UsersFile {
        path: path.to_path_buf(),
        message,
    };

    let content = std::fs::read_to_string(path).map_err(|e| users_file_error(e.to_string()))?;
    let parsed: UsersFile = toml::from_str(&content).map_err(|e| users_file_error(e.to_string()))?;

    tracing::debug!(path = %path.display(), count = parsed.users.len(), "users file loaded");
    Ok(parsed.users.into_iter().collect())
}
