//! User provisioning for the relational backend

use rusqlite::{params, Connection};
use todos_core::auth::hash_password_with_cost;
use todos_core_types::Sensitive;

use crate::errors::{in_op, Result};

/// Insert a user with an already computed bcrypt hash
///
/// Returns `false` and leaves the stored credential untouched if the
/// username is taken.
///
/// # Errors
///
/// `Persistence` on database failure.
pub fn insert_user(conn: &Connection, username: &str, password_hash: &str) -> Result<bool> {
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO users (username, password) VALUES (?1, ?2)",
            params![username, password_hash],
        )
        .map_err(in_op("create_user"))?;

    if inserted > 0 {
        tracing::debug!(username, "user created");
    }
    Ok(inserted > 0)
}

/// Hash `password` at bcrypt `cost` and insert the user; see [`insert_user`]
///
/// # Errors
///
/// `PasswordHash` if the cost is out of range, `Persistence` on database
/// failure.
pub fn create_user(
    conn: &Connection,
    username: &str,
    password: &Sensitive<String>,
    cost: u32,
) -> Result<bool> {
    let hash = hash_password_with_cost(password, cost)?;
    insert_user(conn, username, &hash)
}

/// # Errors
///
/// `Persistence` on database failure.
pub fn user_exists(conn: &Connection, username: &str) -> Result<bool> {
    conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM users WHERE username = ?1)",
        params![username],
        |row| row.get(0),
    )
    .map_err(in_op("user_exists"))
}
