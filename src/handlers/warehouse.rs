//! Warehouse handlers - Endpoint HTTP per i magazzini

use crate::core::{ApiResponse, AppError, AppState, IdPath, ValidJson};
use crate::dtos::{CreateWarehouseDTO, UpdateWarehouseDTO};
use crate::entities::Warehouse;
use axum::{extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state))]
pub async fn list_warehouses(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<Warehouse>>, AppError> {
    let warehouses = state.warehouse.get_all().await?;
    debug!("Returning {} warehouses", warehouses.len());
    Ok(ApiResponse::ok(warehouses))
}

#[instrument(skip(state), fields(warehouse_id = %id))]
pub async fn get_warehouse(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>, // parametro dalla URL /warehouses/{id}
) -> Result<ApiResponse<Warehouse>, AppError> {
    let warehouse = state.warehouse.get(id).await?;
    Ok(ApiResponse::ok(warehouse))
}

#[instrument(skip(state, body))]
pub async fn create_warehouse(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<CreateWarehouseDTO>,
) -> Result<ApiResponse<Warehouse>, AppError> {
    let warehouse = state.warehouse.create(body).await?;
    Ok(ApiResponse::created(warehouse))
}

#[instrument(skip(state, body), fields(warehouse_id = %id))]
pub async fn update_warehouse(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    ValidJson(body): ValidJson<UpdateWarehouseDTO>,
) -> Result<ApiResponse<Warehouse>, AppError> {
    let warehouse = state.warehouse.update(id, body).await?;
    Ok(ApiResponse::ok(warehouse))
}

#[instrument(skip(state), fields(warehouse_id = %id))]
pub async fn delete_warehouse(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.warehouse.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
