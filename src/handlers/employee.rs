//! Employee handlers - Endpoint HTTP per i dipendenti

use crate::core::{ApiResponse, AppError, AppState, IdPath, ValidJson};
use crate::dtos::{CreateEmployeeDTO, UpdateEmployeeDTO};
use crate::entities::Employee;
use axum::{extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state))]
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<Employee>>, AppError> {
    let employees = state.employee.get_all().await?;
    debug!("Returning {} employees", employees.len());
    Ok(ApiResponse::ok(employees))
}

#[instrument(skip(state), fields(employee_id = %id))]
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>, // parametro dalla URL /employees/{id}
) -> Result<ApiResponse<Employee>, AppError> {
    let employee = state.employee.get(id).await?;
    Ok(ApiResponse::ok(employee))
}

#[instrument(skip(state, body))]
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<CreateEmployeeDTO>,
) -> Result<ApiResponse<Employee>, AppError> {
    let employee = state.employee.create(body).await?;
    Ok(ApiResponse::created(employee))
}

#[instrument(skip(state, body), fields(employee_id = %id))]
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    ValidJson(body): ValidJson<UpdateEmployeeDTO>,
) -> Result<ApiResponse<Employee>, AppError> {
    let employee = state.employee.update(id, body).await?;
    Ok(ApiResponse::ok(employee))
}

#[instrument(skip(state), fields(employee_id = %id))]
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.employee.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
