//! EmployeeService: the single coordinator between HTTP handlers and the
//! storage crate.
//!
//! All business logic flows through [`EmployeeService`]. Handlers are thin
//! wrappers that delegate to these methods. The service converts request
//! payloads into storage types, maps storage errors onto the API error
//! taxonomy via `From`, and assembles the listing envelope.

use roster_storage::{
    Employee, EmployeeId, EmployeeStore, EmployeeUpdate, EmployeeWithContacts, NewContact,
    NewEmployee, PAGE_SIZE,
};

use crate::error::ApiError;
use crate::schema::employees::{
    CreateEmployeeRequest, EmployeePageResponse, UpdateEmployeeRequest,
};

/// The central service coordinating employee persistence and retrieval.
pub struct EmployeeService {
    /// SQLite storage backend.
    store: EmployeeStore,
}

impl EmployeeService {
    /// Creates a new EmployeeService, opening a SQLite database at `db_path`.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = EmployeeStore::new(db_path)
            .map_err(|e| ApiError::InternalError(format!("failed to open store: {}", e)))?;
        Ok(EmployeeService { store })
    }

    /// Creates a new EmployeeService with an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let store = EmployeeStore::in_memory()
            .map_err(|e| ApiError::InternalError(format!("failed to open store: {}", e)))?;
        Ok(EmployeeService { store })
    }

    /// Creates an employee, batch-creating and linking any submitted contacts
    /// in the same transaction.
    ///
    /// An absent `fullName` is treated as empty so the store's single
    /// required-field rule rejects both the same way. Returns the created
    /// employee row without its contacts.
    pub fn create_employee(&mut self, req: CreateEmployeeRequest) -> Result<Employee, ApiError> {
        let new = NewEmployee {
            full_name: req.full_name.unwrap_or_default(),
            job_title: req.job_title,
            primary_contact_name: req.primary_contact_name,
            primary_contact_phone: req.primary_contact_phone,
            primary_contact_relation: req.primary_contact_relation,
            secondary_contact_name: req.secondary_contact_name,
            secondary_contact_phone: req.secondary_contact_phone,
            secondary_contact_relation: req.secondary_contact_relation,
        };
        let contacts: Vec<NewContact> = req.contacts.into_iter().map(Into::into).collect();

        let employee = self.store.create_employee(&new, &contacts)?;
        Ok(employee)
    }

    /// Fetches an employee with its nested contacts.
    pub fn get_employee(&self, id: EmployeeId) -> Result<EmployeeWithContacts, ApiError> {
        let employee = self.store.get_employee(id)?;
        Ok(employee)
    }

    /// Applies a partial patch to an employee.
    ///
    /// Matching no row is not an error here; the endpoint acknowledges the
    /// request either way, as the API always has.
    pub fn update_employee(
        &mut self,
        id: EmployeeId,
        req: UpdateEmployeeRequest,
    ) -> Result<(), ApiError> {
        let update = EmployeeUpdate {
            full_name: req.full_name,
            job_title: req.job_title,
            primary_contact_name: req.primary_contact_name,
            primary_contact_phone: req.primary_contact_phone,
            primary_contact_relation: req.primary_contact_relation,
            secondary_contact_name: req.secondary_contact_name,
            secondary_contact_phone: req.secondary_contact_phone,
            secondary_contact_relation: req.secondary_contact_relation,
        };
        self.store.update_employee(id, &update)?;
        Ok(())
    }

    /// Deletes an employee; its contacts go with it via the cascade.
    ///
    /// Like update, a missing row still yields an acknowledgment.
    pub fn delete_employee(&mut self, id: EmployeeId) -> Result<(), ApiError> {
        self.store.delete_employee(id)?;
        Ok(())
    }

    /// Returns one page of employees wrapped in the listing envelope.
    ///
    /// `nextPage` is always `page + 1` whether or not more data exists, and
    /// `isFinal` reports whether this page came back short of the page size.
    /// A full final page therefore reads as non-final; clients discover the
    /// end by fetching the next (empty) page.
    pub fn list_employees(&self, page: u32) -> Result<EmployeePageResponse, ApiError> {
        let employees = self.store.list_employees(page)?;
        Ok(EmployeePageResponse {
            next_page: page.saturating_add(1),
            is_final: employees.len() < PAGE_SIZE,
            employees,
        })
    }
}
