//! Storage error types for roster-storage.
//!
//! [`StorageError`] covers all anticipated failure modes in the storage
//! layer: SQLite failures, migration failures, lookups that find no row, and
//! the one validation rule the store itself enforces (a non-empty full name
//! on insert).

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An underlying SQLite operation failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// No employee row exists with the given id.
    #[error("employee not found: {0}")]
    EmployeeNotFound(i64),

    /// An employee was submitted without a full name.
    #[error("fullName is required and must be non-empty")]
    MissingFullName,
}

impl StorageError {
    /// True when the failure signals the database itself is unreachable or
    /// refusing work (cannot open, busy, locked), as opposed to a
    /// statement-level fault.
    pub fn is_unavailable(&self) -> bool {
        match self {
            StorageError::Sqlite(rusqlite::Error::SqliteFailure(e, _)) => matches!(
                e.code,
                rusqlite::ErrorCode::CannotOpen
                    | rusqlite::ErrorCode::DatabaseBusy
                    | rusqlite::ErrorCode::DatabaseLocked
                    | rusqlite::ErrorCode::NotADatabase
            ),
            _ => false,
        }
    }
}
