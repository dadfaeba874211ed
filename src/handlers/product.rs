//! Product handlers - Endpoint HTTP per i prodotti

use crate::core::{ApiResponse, AppError, AppState, IdPath, ValidJson};
use crate::dtos::{CreateProductDTO, UpdateProductDTO};
use crate::entities::Product;
use axum::{extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<Product>>, AppError> {
    let products = state.product.get_all().await?;
    debug!("Returning {} products", products.len());
    Ok(ApiResponse::ok(products))
}

#[instrument(skip(state), fields(product_id = %id))]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>, // parametro dalla URL /products/{id}
) -> Result<ApiResponse<Product>, AppError> {
    let product = state.product.get(id).await?;
    Ok(ApiResponse::ok(product))
}

#[instrument(skip(state, body))]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<CreateProductDTO>,
) -> Result<ApiResponse<Product>, AppError> {
    let product = state.product.create(body).await?;
    Ok(ApiResponse::created(product))
}

#[instrument(skip(state, body), fields(product_id = %id))]
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    ValidJson(body): ValidJson<UpdateProductDTO>,
) -> Result<ApiResponse<Product>, AppError> {
    let product = state.product.update(id, body).await?;
    Ok(ApiResponse::ok(product))
}

#[instrument(skip(state), fields(product_id = %id))]
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.product.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
