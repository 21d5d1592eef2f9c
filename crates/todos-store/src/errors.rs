//! Conversions from `rusqlite::Error` into `TodosError`

use rusqlite::ffi;
use todos_core::errors::TodosError;

pub use todos_core::errors::Result;

/// Whether `err` is a violation of a UNIQUE constraint
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Create a persistence error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> TodosError {
    TodosError::Persistence {
        op: "sqlite".to_string(),
        message: err.to_string(),
    }
}

/// Like [`from_rusqlite`], tagged with the store operation that failed
pub fn in_op(op: &'static str) -> impl Fn(rusqlite::Error) -> TodosError {
    move |err| TodosError::Persistence {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Map errors from writing a list title
///
/// A UNIQUE violation on `(title, username)` becomes `DuplicateTitle`;
/// anything else stays a persistence failure.
pub fn from_title_write(op: &'static str, title: &str) -> impl Fn(rusqlite::Error) -> TodosError {
    let title = title.to_string();
    move |err| {
        if is_unique_violation(&err) {
            TodosError::DuplicateTitle {
                title: title.clone(),
            }
        } else {
            in_op(op)(err)
        }
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> TodosError {
    TodosError::Migration {
        migration_id: migration_id.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> TodosError {
    migration_error(
        migration_id,
        &format!("checksum mismatch: recorded {}, embedded {}", expected, actual),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn unique_violation() -> rusqlite::Error {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT UNIQUE); INSERT INTO t VALUES ('a');")
            .unwrap();
        conn.execute("INSERT INTO t VALUES ('a')", []).unwrap_err()
    }

    #[test]
    fn test_unique_violation_maps_to_duplicate_title() {
        let err = from_title_write("create_list", "Groceries")(unique_violation());
        assert_eq!(
            err,
            TodosError::DuplicateTitle {
                title: "Groceries".to_string()
            }
        );
    }

    #[test]
    fn test_other_errors_stay_persistence() {
        let err = from_title_write("create_list", "Groceries")(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, TodosError::Persistence { ref op, .. } if op == "create_list"));
    }

    #[test]
    fn test_not_null_violation_is_not_unique() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT NOT NULL);").unwrap();
        let err = conn
            .execute("INSERT INTO t VALUES (NULL)", [])
            .unwrap_err();
        assert!(!is_unique_violation(&err));
    }
}
