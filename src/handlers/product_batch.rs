//! Product batch handlers - Endpoint HTTP per i lotti di prodotto

use crate::core::{ApiResponse, AppError, AppState, IdPath, ValidJson};
use crate::dtos::{CreateProductBatchDTO, UpdateProductBatchDTO};
use crate::entities::ProductBatch;
use axum::{extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state))]
pub async fn list_product_batches(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<ProductBatch>>, AppError> {
    let product_batches = state.product_batch.get_all().await?;
    debug!("Returning {} product batches", product_batches.len());
    Ok(ApiResponse::ok(product_batches))
}

#[instrument(skip(state), fields(product_batch_id = %id))]
pub async fn get_product_batch(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>, // parametro dalla URL /productBatches/{id}
) -> Result<ApiResponse<ProductBatch>, AppError> {
    let product_batch = state.product_batch.get(id).await?;
    Ok(ApiResponse::ok(product_batch))
}

#[instrument(skip(state, body))]
pub async fn create_product_batch(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<CreateProductBatchDTO>,
) -> Result<ApiResponse<ProductBatch>, AppError> {
    let product_batch = state.product_batch.create(body).await?;
    Ok(ApiResponse::created(product_batch))
}

#[instrument(skip(state, body), fields(product_batch_id = %id))]
pub async fn update_product_batch(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    ValidJson(body): ValidJson<UpdateProductBatchDTO>,
) -> Result<ApiResponse<ProductBatch>, AppError> {
    let product_batch = state.product_batch.update(id, body).await?;
    Ok(ApiResponse::ok(product_batch))
}

#[instrument(skip(state), fields(product_batch_id = %id))]
pub async fn delete_product_batch(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.product_batch.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
