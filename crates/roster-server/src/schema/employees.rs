//! Employee endpoint request/response types.

use roster_storage::{Employee, NewContact};
use serde::{Deserialize, Serialize};

/// Request to create an employee, optionally with owned contacts.
///
/// Every field is optional at the deserialization layer. The one required
/// field, `fullName`, is enforced by the store, so an absent and an empty
/// name are rejected identically.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub primary_contact_name: Option<String>,
    pub primary_contact_phone: Option<String>,
    pub primary_contact_relation: Option<String>,
    pub secondary_contact_name: Option<String>,
    pub secondary_contact_phone: Option<String>,
    pub secondary_contact_relation: Option<String>,
    /// Contacts to batch-create and link to the new employee.
    #[serde(default)]
    pub contacts: Vec<ContactPayload>,
}

/// A contact submitted inside a create-employee request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl From<ContactPayload> for NewContact {
    fn from(payload: ContactPayload) -> Self {
        NewContact {
            phone: payload.phone,
            address: payload.address,
            city: payload.city,
            state: payload.state,
        }
    }
}

/// Partial employee patch; only the supplied fields change.
///
/// Unknown keys (including a stray `contacts` array) are ignored rather
/// than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub primary_contact_name: Option<String>,
    pub primary_contact_phone: Option<String>,
    pub primary_contact_relation: Option<String>,
    pub secondary_contact_name: Option<String>,
    pub secondary_contact_phone: Option<String>,
    pub secondary_contact_relation: Option<String>,
}

/// Acknowledgment body for update and delete.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation message.
    pub message: String,
}

/// One page of the employee listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePageResponse {
    /// Always the requested page plus one, even past the end of the data.
    pub next_page: u32,
    /// True when this page held fewer rows than the page size. A final page
    /// that is exactly full reads as non-final; the next fetch comes back
    /// empty and final.
    pub is_final: bool,
    /// The page of employee rows, ordered by id ascending.
    pub employees: Vec<Employee>,
}

/// Query parameters for the employee listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    /// 1-based page number; defaults to 1 when absent.
    pub page: Option<u32>,
}
