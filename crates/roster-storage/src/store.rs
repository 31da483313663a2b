//! SQLite-backed employee store.
//!
//! [`EmployeeStore`] owns the connection and implements the five data access
//! operations behind the HTTP API. Every write runs inside a transaction;
//! in particular, an employee and its submitted contacts are inserted as one
//! atomic unit, so a failed contact insert rolls back the employee row too.

use rusqlite::{params, Connection, OptionalExtension, ToSql};

use crate::error::StorageError;
use crate::types::{
    Contact, Employee, EmployeeId, EmployeeUpdate, EmployeeWithContacts, NewContact, NewEmployee,
};

/// Number of employee rows returned per listing page.
pub const PAGE_SIZE: usize = 20;

/// SQLite-backed store for employees and the contacts they own.
///
/// Reads hold `&self`; writes hold `&mut self` because they open a
/// transaction on the connection.
pub struct EmployeeStore {
    conn: Connection,
}

impl EmployeeStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(EmployeeStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(EmployeeStore { conn })
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Inserts an employee and its contacts as a single transaction.
    ///
    /// Rejects an empty `full_name` before touching the database; this is the
    /// only required field in the model. Returns the created employee row.
    /// Contacts are persisted and linked but not echoed back; fetch them via
    /// [`EmployeeStore::get_employee`].
    pub fn create_employee(
        &mut self,
        new: &NewEmployee,
        contacts: &[NewContact],
    ) -> Result<Employee, StorageError> {
        if new.full_name.is_empty() {
            return Err(StorageError::MissingFullName);
        }

        let now = chrono::Utc::now().to_rfc3339();
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO employees (full_name, job_title, primary_contact_name, primary_contact_phone, primary_contact_relation, secondary_contact_name, secondary_contact_phone, secondary_contact_relation, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                new.full_name,
                new.job_title,
                new.primary_contact_name,
                new.primary_contact_phone,
                new.primary_contact_relation,
                new.secondary_contact_name,
                new.secondary_contact_phone,
                new.secondary_contact_relation,
                now,
                now,
            ],
        )?;
        let id = tx.last_insert_rowid();

        // Batch-insert contacts against the fresh employee id.
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO contacts (employee_id, phone, address, city, state, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for contact in contacts {
                stmt.execute(params![
                    id,
                    contact.phone,
                    contact.address,
                    contact.city,
                    contact.state,
                    now,
                    now,
                ])?;
            }
        }

        tx.commit()?;

        Ok(Employee {
            id: EmployeeId(id),
            full_name: new.full_name.clone(),
            job_title: new.job_title.clone(),
            primary_contact_name: new.primary_contact_name.clone(),
            primary_contact_phone: new.primary_contact_phone.clone(),
            primary_contact_relation: new.primary_contact_relation.clone(),
            secondary_contact_name: new.secondary_contact_name.clone(),
            secondary_contact_phone: new.secondary_contact_phone.clone(),
            secondary_contact_relation: new.secondary_contact_relation.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Fetches an employee by id together with all of its contacts.
    ///
    /// Contacts come back ordered by id, which is insertion order.
    pub fn get_employee(&self, id: EmployeeId) -> Result<EmployeeWithContacts, StorageError> {
        let employee = self
            .conn
            .query_row(
                "SELECT id, full_name, job_title, primary_contact_name, primary_contact_phone, primary_contact_relation, secondary_contact_name, secondary_contact_phone, secondary_contact_relation, created_at, updated_at FROM employees WHERE id = ?1",
                params![id.0],
                Self::employee_from_row,
            )
            .optional()?
            .ok_or(StorageError::EmployeeNotFound(id.0))?;

        let mut stmt = self.conn.prepare_cached(
            "SELECT id, phone, address, city, state, employee_id, created_at, updated_at FROM contacts WHERE employee_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![id.0], Self::contact_from_row)?;
        let mut contacts = Vec::new();
        for row in rows {
            contacts.push(row?);
        }

        Ok(EmployeeWithContacts { employee, contacts })
    }

    /// Applies a partial patch to an employee row.
    ///
    /// Only the supplied fields are written; `updated_at` is refreshed along
    /// with them. A patch with no fields is a no-op. Returns the number of
    /// affected rows, which is 0 when no row matches `id` (callers decide
    /// whether that matters).
    pub fn update_employee(
        &mut self,
        id: EmployeeId,
        update: &EmployeeUpdate,
    ) -> Result<usize, StorageError> {
        if update.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().to_rfc3339();
        let mut sets: Vec<&'static str> = Vec::new();
        let mut values: Vec<&dyn ToSql> = Vec::new();

        Self::push_set(&mut sets, &mut values, "full_name = ?", &update.full_name);
        Self::push_set(&mut sets, &mut values, "job_title = ?", &update.job_title);
        Self::push_set(
            &mut sets,
            &mut values,
            "primary_contact_name = ?",
            &update.primary_contact_name,
        );
        Self::push_set(
            &mut sets,
            &mut values,
            "primary_contact_phone = ?",
            &update.primary_contact_phone,
        );
        Self::push_set(
            &mut sets,
            &mut values,
            "primary_contact_relation = ?",
            &update.primary_contact_relation,
        );
        Self::push_set(
            &mut sets,
            &mut values,
            "secondary_contact_name = ?",
            &update.secondary_contact_name,
        );
        Self::push_set(
            &mut sets,
            &mut values,
            "secondary_contact_phone = ?",
            &update.secondary_contact_phone,
        );
        Self::push_set(
            &mut sets,
            &mut values,
            "secondary_contact_relation = ?",
            &update.secondary_contact_relation,
        );

        sets.push("updated_at = ?");
        values.push(&now);
        values.push(&id.0);

        let sql = format!("UPDATE employees SET {} WHERE id = ?", sets.join(", "));

        let tx = self.conn.transaction()?;
        let affected = tx.execute(&sql, &values[..])?;
        tx.commit()?;
        Ok(affected)
    }

    /// Deletes an employee row; the engine cascades to its contacts.
    ///
    /// Returns the number of affected rows, 0 when no row matches `id`.
    pub fn delete_employee(&mut self, id: EmployeeId) -> Result<usize, StorageError> {
        let tx = self.conn.transaction()?;
        let affected = tx.execute("DELETE FROM employees WHERE id = ?1", params![id.0])?;
        tx.commit()?;
        Ok(affected)
    }

    /// Returns one page of employees ordered by id ascending.
    ///
    /// `page` is 1-based and pages hold [`PAGE_SIZE`] rows; page 0 is treated
    /// as page 1. A page past the end of the data is empty, not an error.
    pub fn list_employees(&self, page: u32) -> Result<Vec<Employee>, StorageError> {
        let offset = i64::from(page.saturating_sub(1)) * PAGE_SIZE as i64;
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, full_name, job_title, primary_contact_name, primary_contact_phone, primary_contact_relation, secondary_contact_name, secondary_contact_phone, secondary_contact_relation, created_at, updated_at FROM employees ORDER BY id ASC LIMIT ?1 OFFSET ?2",
        )?;
        let rows = stmt.query_map(params![PAGE_SIZE as i64, offset], Self::employee_from_row)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Maps a full employee row in canonical column order.
    fn employee_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
        Ok(Employee {
            id: EmployeeId(row.get(0)?),
            full_name: row.get(1)?,
            job_title: row.get(2)?,
            primary_contact_name: row.get(3)?,
            primary_contact_phone: row.get(4)?,
            primary_contact_relation: row.get(5)?,
            secondary_contact_name: row.get(6)?,
            secondary_contact_phone: row.get(7)?,
            secondary_contact_relation: row.get(8)?,
            created_at: row.get(9)?,
            updated_at: row.get(10)?,
        })
    }

    /// Maps a full contact row in canonical column order.
    fn contact_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Contact> {
        Ok(Contact {
            id: row.get(0)?,
            phone: row.get(1)?,
            address: row.get(2)?,
            city: row.get(3)?,
            state: row.get(4)?,
            employee_id: EmployeeId(row.get(5)?),
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }

    /// Appends a SET fragment and its bound value when the field is supplied.
    fn push_set<'a>(
        sets: &mut Vec<&'static str>,
        values: &mut Vec<&'a dyn ToSql>,
        fragment: &'static str,
        value: &'a Option<String>,
    ) {
        if let Some(v) = value {
            sets.push(fragment);
            values.push(v);
        }
    }
}
