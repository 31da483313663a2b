//! Application state with a shared `EmployeeService` for concurrent access.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Uses `tokio::sync::Mutex` (async-aware) instead of
//! `std::sync::Mutex` (blocking) so handlers await the lock without blocking
//! the tokio runtime.
//!
//! Note: `tokio::sync::RwLock` would allow concurrent reads, but
//! `EmployeeService` contains `rusqlite::Connection` which is `!Sync`,
//! preventing it from being held behind an `RwLock`. The `Mutex` approach
//! is correct and non-blocking.

use std::sync::Arc;

use crate::error::ApiError;
use crate::service::EmployeeService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared employee service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<EmployeeService>>,
    /// When set, every error response is collapsed to a bodyless 500. Kept
    /// for clients written against the old wire contract.
    pub legacy_errors: bool,
}

impl AppState {
    /// Creates a new `AppState` with an `EmployeeService` backed by the given
    /// SQLite database path.
    pub fn new(db_path: &str, legacy_errors: bool) -> Result<Self, ApiError> {
        let service = EmployeeService::new(db_path)?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
            legacy_errors,
        })
    }

    /// Creates a new `AppState` with an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let service = EmployeeService::in_memory()?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
            legacy_errors: false,
        })
    }

    /// In-memory `AppState` with legacy error mode enabled (for testing).
    pub fn in_memory_legacy() -> Result<Self, ApiError> {
        let service = EmployeeService::in_memory()?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
            legacy_errors: true,
        })
    }
}
