//! Buyer handlers - Endpoint HTTP per gli acquirenti

use crate::core::{ApiResponse, AppError, AppState, IdPath, ValidJson};
use crate::dtos::{BuyerPurchaseOrdersReportDTO, CreateBuyerDTO, UpdateBuyerDTO};
use crate::entities::Buyer;
use axum::{extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state))]
pub async fn list_buyers(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<Buyer>>, AppError> {
    let buyers = state.buyer.get_all().await?;
    debug!("Returning {} buyers", buyers.len());
    Ok(ApiResponse::ok(buyers))
}

#[instrument(skip(state), fields(buyer_id = %id))]
pub async fn get_buyer(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>, // parametro dalla URL /buyers/{id}
) -> Result<ApiResponse<Buyer>, AppError> {
    let buyer = state.buyer.get(id).await?;
    Ok(ApiResponse::ok(buyer))
}

#[instrument(skip(state, body))]
pub async fn create_buyer(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<CreateBuyerDTO>,
) -> Result<ApiResponse<Buyer>, AppError> {
    let buyer = state.buyer.create(body).await?;
    Ok(ApiResponse::created(buyer))
}

#[instrument(skip(state, body), fields(buyer_id = %id))]
pub async fn update_buyer(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    ValidJson(body): ValidJson<UpdateBuyerDTO>,
) -> Result<ApiResponse<Buyer>, AppError> {
    let buyer = state.buyer.update(id, body).await?;
    Ok(ApiResponse::ok(buyer))
}

#[instrument(skip(state), fields(buyer_id = %id))]
pub async fn delete_buyer(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.buyer.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Numero di ordini di acquisto per ogni acquirente
#[instrument(skip(state))]
pub async fn report_purchase_orders(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<BuyerPurchaseOrdersReportDTO>>, AppError> {
    let report = state.buyer.purchase_orders_report().await?;
    Ok(ApiResponse::ok(report))
}

#[instrument(skip(state), fields(buyer_id = %id))]
pub async fn report_purchase_orders_by_buyer(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>, // parametro dalla URL /buyers/{id}/reportPurchaseOrders
) -> Result<ApiResponse<BuyerPurchaseOrdersReportDTO>, AppError> {
    let row = state.buyer.purchase_orders_report_by_buyer(id).await?;
    Ok(ApiResponse::ok(row))
}
