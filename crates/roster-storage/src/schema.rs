//! Connection setup and schema migrations for the SQLite backend.
//!
//! Migrations are embedded at compile time via `include_str!` and tracked
//! through SQLite's `user_version` pragma by `rusqlite_migration`. Every
//! connection enables foreign key enforcement before use; contact cleanup
//! relies on the `ON DELETE CASCADE` clause, which SQLite ignores while
//! `foreign_keys` is off.

use rusqlite::Connection;
use rusqlite_migration::{Migrations, M};

use crate::error::StorageError;

/// All schema migrations, applied in order via `user_version` tracking.
fn migrations() -> Migrations<'static> {
    Migrations::new(vec![
        M::up(include_str!("migrations/001_employees_and_contacts.sql")),
        // Future migrations added here as new M::up(...) entries.
    ])
}

/// Opens (or creates) a SQLite database at `path`, configures pragmas, and
/// applies all pending migrations.
pub fn open_database(path: &str) -> Result<Connection, StorageError> {
    let mut conn = Connection::open(path)?;
    configure_and_migrate(&mut conn)?;
    Ok(conn)
}

/// Opens a fresh in-memory database with the same pragmas and schema.
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let mut conn = Connection::open_in_memory()?;
    configure_and_migrate(&mut conn)?;
    Ok(conn)
}

fn configure_and_migrate(conn: &mut Connection) -> Result<(), StorageError> {
    // WAL allows concurrent readers alongside the single writer.
    conn.pragma_update(None, "journal_mode", "WAL")?;
    // NORMAL synchronous is durable enough under WAL.
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    // Off by default in SQLite; required for the contacts cascade.
    conn.pragma_update(None, "foreign_keys", "ON")?;

    migrations()
        .to_latest(conn)
        .map_err(|e| StorageError::Migration(e.to_string()))?;

    Ok(())
}
