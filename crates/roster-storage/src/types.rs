//! Model types for employees and their contacts.
//!
//! [`EmployeeId`] is defined here because employee identity is a storage
//! concern: a record only gains an id when its row is inserted. The row types
//! double as API response bodies, so serde renames map the snake_case column
//! names to the camelCase field names the wire format uses. Optional columns
//! serialize as explicit `null` rather than being dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored employee.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY` rowid type.
/// Ids are allocated by the database and are never reused within one
/// database file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub i64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted employee row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    /// Required display name; the only column the store validates.
    pub full_name: String,
    pub job_title: Option<String>,
    pub primary_contact_name: Option<String>,
    pub primary_contact_phone: Option<String>,
    pub primary_contact_relation: Option<String>,
    pub secondary_contact_name: Option<String>,
    pub secondary_contact_phone: Option<String>,
    pub secondary_contact_relation: Option<String>,
    /// RFC 3339 UTC timestamp assigned on insert.
    pub created_at: String,
    /// RFC 3339 UTC timestamp refreshed whenever a field changes.
    pub updated_at: String,
}

/// A persisted contact row, owned by exactly one employee.
///
/// Contacts are only ever created alongside their employee and only ever
/// read through it, so they carry no standalone id newtype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i64,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// Owning employee; the row is cascade-deleted with it.
    pub employee_id: EmployeeId,
    pub created_at: String,
    pub updated_at: String,
}

/// Employee attributes for insertion, before the row has an id or
/// timestamps.
#[derive(Debug, Clone, Default)]
pub struct NewEmployee {
    pub full_name: String,
    pub job_title: Option<String>,
    pub primary_contact_name: Option<String>,
    pub primary_contact_phone: Option<String>,
    pub primary_contact_relation: Option<String>,
    pub secondary_contact_name: Option<String>,
    pub secondary_contact_phone: Option<String>,
    pub secondary_contact_relation: Option<String>,
}

/// Contact attributes for insertion alongside a new employee.
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// A partial employee patch. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub primary_contact_name: Option<String>,
    pub primary_contact_phone: Option<String>,
    pub primary_contact_relation: Option<String>,
    pub secondary_contact_name: Option<String>,
    pub secondary_contact_phone: Option<String>,
    pub secondary_contact_relation: Option<String>,
}

impl EmployeeUpdate {
    /// True when the patch supplies no fields at all.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.job_title.is_none()
            && self.primary_contact_name.is_none()
            && self.primary_contact_phone.is_none()
            && self.primary_contact_relation.is_none()
            && self.secondary_contact_name.is_none()
            && self.secondary_contact_phone.is_none()
            && self.secondary_contact_relation.is_none()
    }
}

/// An employee joined with all of its contacts, the shape returned by
/// fetch-by-id.
///
/// The employee's own fields are flattened to the top level so the JSON body
/// reads as one record with a nested `contacts` array.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeWithContacts {
    #[serde(flatten)]
    pub employee: Employee,
    pub contacts: Vec<Contact>,
}
