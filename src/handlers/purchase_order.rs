//! Purchase order handlers - Endpoint HTTP per gli ordini di acquisto

use crate::core::{ApiResponse, AppError, AppState, IdPath, ValidJson};
use crate::dtos::{CreatePurchaseOrderDTO, UpdatePurchaseOrderDTO};
use crate::entities::PurchaseOrder;
use axum::{extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state))]
pub async fn list_purchase_orders(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<PurchaseOrder>>, AppError> {
    let purchase_orders = state.purchase_order.get_all().await?;
    debug!("Returning {} purchase orders", purchase_orders.len());
    Ok(ApiResponse::ok(purchase_orders))
}

#[instrument(skip(state), fields(purchase_order_id = %id))]
pub async fn get_purchase_order(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>, // parametro dalla URL /purchaseOrders/{id}
) -> Result<ApiResponse<PurchaseOrder>, AppError> {
    let purchase_order = state.purchase_order.get(id).await?;
    Ok(ApiResponse::ok(purchase_order))
}

#[instrument(skip(state, body))]
pub async fn create_purchase_order(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<CreatePurchaseOrderDTO>,
) -> Result<ApiResponse<PurchaseOrder>, AppError> {
    let purchase_order = state.purchase_order.create(body).await?;
    Ok(ApiResponse::created(purchase_order))
}

#[instrument(skip(state, body), fields(purchase_order_id = %id))]
pub async fn update_purchase_order(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    ValidJson(body): ValidJson<UpdatePurchaseOrderDTO>,
) -> Result<ApiResponse<PurchaseOrder>, AppError> {
    let purchase_order = state.purchase_order.update(id, body).await?;
    Ok(ApiResponse::ok(purchase_order))
}

#[instrument(skip(state), fields(purchase_order_id = %id))]
pub async fn delete_purchase_order(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.purchase_order.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
