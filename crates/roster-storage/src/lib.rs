//! Storage layer for employee records and their contacts.
//!
//! Defines the relational schema (two tables joined by one cascading foreign
//! key) and the [`EmployeeStore`] with the five operations the HTTP API is
//! built on: create (employee plus linked contacts in one transaction),
//! fetch by id (with contacts), partial update, delete (cascading), and
//! fixed-size paginated listing.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: EmployeeId plus the row and payload types
//! - [`schema`]: connection setup and schema migrations
//! - [`store`]: EmployeeStore implementation

pub mod error;
pub mod schema;
pub mod store;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use store::{EmployeeStore, PAGE_SIZE};
pub use types::{
    Contact, Employee, EmployeeId, EmployeeUpdate, EmployeeWithContacts, NewContact, NewEmployee,
};
