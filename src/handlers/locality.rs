//! Locality handlers - Endpoint HTTP per le località

use crate::core::{ApiResponse, AppError, AppState, IdPath, ValidJson};
use crate::dtos::{CreateLocalityDTO, LocalitySellersReportDTO, UpdateLocalityDTO};
use crate::entities::Locality;
use axum::{extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state))]
pub async fn list_localities(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<Locality>>, AppError> {
    let localities = state.locality.get_all().await?;
    debug!("Returning {} localities", localities.len());
    Ok(ApiResponse::ok(localities))
}

#[instrument(skip(state), fields(locality_id = %id))]
pub async fn get_locality(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<String>, // parametro dalla URL /localities/{id}
) -> Result<ApiResponse<Locality>, AppError> {
    let locality = state.locality.get(&id).await?;
    Ok(ApiResponse::ok(locality))
}

#[instrument(skip(state, body))]
pub async fn create_locality(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<CreateLocalityDTO>,
) -> Result<ApiResponse<Locality>, AppError> {
    let locality = state.locality.create(body).await?;
    Ok(ApiResponse::created(locality))
}

#[instrument(skip(state, body), fields(locality_id = %id))]
pub async fn update_locality(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<String>,
    ValidJson(body): ValidJson<UpdateLocalityDTO>,
) -> Result<ApiResponse<Locality>, AppError> {
    let locality = state.locality.update(&id, body).await?;
    Ok(ApiResponse::ok(locality))
}

#[instrument(skip(state), fields(locality_id = %id))]
pub async fn delete_locality(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<String>,
) -> Result<StatusCode, AppError> {
    state.locality.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Numero di venditori registrati nella località
#[instrument(skip(state), fields(locality_id = %id))]
pub async fn report_sellers(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<String>, // parametro dalla URL /localities/{id}/reportSellers
) -> Result<ApiResponse<LocalitySellersReportDTO>, AppError> {
    let row = state.locality.sellers_report(&id).await?;
    Ok(ApiResponse::ok(row))
}
