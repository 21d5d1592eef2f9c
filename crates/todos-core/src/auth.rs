//! Password hashing and the credential directory used by the session backend

use std::collections::HashMap;

use bcrypt::{hash, verify, BcryptError};
use serde::{Deserialize, Serialize};
use todos_core_types::Sensitive;

use crate::errors::{Result, TodosError};

fn hash_error(err: BcryptError) -> TodosError {
    TodosError::PasswordHash {
        message: err.to_string(),
    }
}

/// Hash a password with an explicit bcrypt cost (tests use the minimum of 4)
///
/// # Errors
///
/// `PasswordHash` if the cost is out of range.
pub fn hash_password_with_cost(password: &Sensitive<String>, cost: u32) -> Result<String> {
    hash(password.expose(), cost).map_err(hash_error)
}

/// Compare a password against a stored bcrypt hash
///
/// # Errors
///
/// `PasswordHash` if `stored_hash` is not a bcrypt hash.
pub fn verify_password(password: &Sensitive<String>, stored_hash: &str) -> Result<bool> {
    verify(password.expose(), stored_hash).map_err(hash_error)
}

/// One entry of a users file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
}

/// Username to password-hash map backing `authenticate` for the session backend
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, String>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, username: impl Into<String>, password_hash: impl Into<String>) {
        self.users.insert(username.into(), password_hash.into());
    }

    pub fn password_hash(&self, username: &str) -> Option<&str> {
        self.users.get(username).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Check `password` for `username`; unknown users are `Ok(false)`
    ///
    /// # Errors
    ///
    /// `PasswordHash` if the stored hash is malformed.
    pub fn authenticate(&self, username: &str, password: &Sensitive<String>) -> Result<bool> {
        match self.password_hash(username) {
            Some(stored) => verify_password(password, stored),
            None => Ok(false),
        }
    }
}

impl FromIterator<UserRecord> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = UserRecord>>(iter: I) -> Self {
        let mut directory = UserDirectory::new();
        for record in iter {
            directory.insert(record.username, record.password_hash);
        }
        directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory_with(username: &str, password: &str) -> UserDirectory {
        let stored = hash_password_with_cost(&Sensitive::from(password), 4).unwrap();
        let mut directory = UserDirectory::new();
        directory.insert(username, stored);
        directory
    }

    #[test]
    fn test_verify_matching_password() {
        let directory = directory_with("alice", "secret");
        assert!(directory
            .authenticate("alice", &Sensitive::from("secret"))
            .unwrap());
    }

    #[test]
    fn test_wrong_password_is_false_not_error() {
        let directory = directory_with("alice", "secret");
        assert!(!directory
            .authenticate("alice", &Sensitive::from("wrong-password"))
            .unwrap());
    }

    #[test]
    fn test_unknown_user_is_false() {
        let directory = directory_with("alice", "secret");
        assert!(!directory
            .authenticate("bob", &Sensitive::from("secret"))
            .unwrap());
    }

    #[test]
    fn test_malformed_hash_is_error() {
        let mut directory = UserDirectory::new();
        directory.insert("alice", "not-a-bcrypt-hash");
        let result = directory.authenticate("alice", &Sensitive::from("secret"));
        assert!(matches!(result, Err(TodosError::PasswordHash { .. })));
    }

    #[test]
    fn test_collect_from_records() {
        let directory: UserDirectory = vec![
            UserRecord {
                username: "alice".to_string(),
                password_hash: "h1".to_string(),
            },
            UserRecord {
                username: "bob".to_string(),
                password_hash: "h2".to_string(),
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.password_hash("bob"), Some("h2"));
    }
}
