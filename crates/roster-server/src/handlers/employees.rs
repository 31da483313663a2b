//! Employee CRUD handlers (create, get, update, delete, list).

use axum::extract::{Path, Query, State};
use axum::Json;

use roster_storage::{Employee, EmployeeId, EmployeeWithContacts};

use crate::error::ApiError;
use crate::schema::employees::{
    CreateEmployeeRequest, EmployeePageResponse, MessageResponse, PageQuery,
    UpdateEmployeeRequest,
};
use crate::state::AppState;

/// Creates an employee, batch-creating and linking any submitted contacts.
///
/// `POST /employee`
pub async fn create_employee(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Json<Employee>, ApiError> {
    let mut service = state.service.lock().await;
    let employee = service.create_employee(req)?;
    Ok(Json(employee))
}

/// Fetches an employee with its nested contacts.
///
/// `GET /employee/{id}`
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeWithContacts>, ApiError> {
    let service = state.service.lock().await;
    let employee = service.get_employee(EmployeeId(id))?;
    Ok(Json(employee))
}

/// Applies a partial update to an employee.
///
/// `PUT /employee/{id}`
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut service = state.service.lock().await;
    service.update_employee(EmployeeId(id), req)?;
    Ok(Json(MessageResponse {
        message: "Employee Updated successfully!".to_string(),
    }))
}

/// Deletes an employee and, through the cascade, its contacts.
///
/// `DELETE /employee/{id}`
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut service = state.service.lock().await;
    service.delete_employee(EmployeeId(id))?;
    Ok(Json(MessageResponse {
        message: "Employee deleted successfully!".to_string(),
    }))
}

/// Lists one page of employees.
///
/// `GET /employee?page=N`
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<EmployeePageResponse>, ApiError> {
    let service = state.service.lock().await;
    let page = query.page.unwrap_or(1);
    let response = service.list_employees(page)?;
    Ok(Json(response))
}
