//! Seller handlers - Endpoint HTTP per i venditori

use crate::core::{ApiResponse, AppError, AppState, IdPath, ValidJson};
use crate::dtos::{CreateSellerDTO, UpdateSellerDTO};
use crate::entities::Seller;
use axum::{extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state))]
pub async fn list_sellers(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<Seller>>, AppError> {
    let sellers = state.seller.get_all().await?;
    debug!("Returning {} sellers", sellers.len());
    Ok(ApiResponse::ok(sellers))
}

#[instrument(skip(state), fields(seller_id = %id))]
pub async fn get_seller(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>, // parametro dalla URL /sellers/{id}
) -> Result<ApiResponse<Seller>, AppError> {
    let seller = state.seller.get(id).await?;
    Ok(ApiResponse::ok(seller))
}

#[instrument(skip(state, body))]
pub async fn create_seller(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<CreateSellerDTO>,
) -> Result<ApiResponse<Seller>, AppError> {
    let seller = state.seller.create(body).await?;
    Ok(ApiResponse::created(seller))
}

#[instrument(skip(state, body), fields(seller_id = %id))]
pub async fn update_seller(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    ValidJson(body): ValidJson<UpdateSellerDTO>,
) -> Result<ApiResponse<Seller>, AppError> {
    let seller = state.seller.update(id, body).await?;
    Ok(ApiResponse::ok(seller))
}

#[instrument(skip(state), fields(seller_id = %id))]
pub async fn delete_seller(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.seller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
