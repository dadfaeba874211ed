//! Section handlers - Endpoint HTTP per le sezioni

use crate::core::{ApiResponse, AppError, AppState, IdPath, ValidJson};
use crate::dtos::{CreateSectionDTO, SectionProductsReportDTO, UpdateSectionDTO};
use crate::entities::Section;
use axum::{extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state))]
pub async fn list_sections(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<Section>>, AppError> {
    let sections = state.section.get_all().await?;
    debug!("Returning {} sections", sections.len());
    Ok(ApiResponse::ok(sections))
}

#[instrument(skip(state), fields(section_id = %id))]
pub async fn get_section(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>, // parametro dalla URL /sections/{id}
) -> Result<ApiResponse<Section>, AppError> {
    let section = state.section.get(id).await?;
    Ok(ApiResponse::ok(section))
}

#[instrument(skip(state, body))]
pub async fn create_section(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<CreateSectionDTO>,
) -> Result<ApiResponse<Section>, AppError> {
    let section = state.section.create(body).await?;
    Ok(ApiResponse::created(section))
}

#[instrument(skip(state, body), fields(section_id = %id))]
pub async fn update_section(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    ValidJson(body): ValidJson<UpdateSectionDTO>,
) -> Result<ApiResponse<Section>, AppError> {
    let section = state.section.update(id, body).await?;
    Ok(ApiResponse::ok(section))
}

#[instrument(skip(state), fields(section_id = %id))]
pub async fn delete_section(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.section.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Report dei prodotti per tutte le sezioni che contengono lotti
#[instrument(skip(state))]
pub async fn report_products(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<SectionProductsReportDTO>>, AppError> {
    let report = state.product_batch.section_products_report().await?;
    Ok(ApiResponse::ok(report))
}

#[instrument(skip(state), fields(section_id = %id))]
pub async fn report_products_by_section(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>, // parametro dalla URL /sections/reportProducts/{id}
) -> Result<ApiResponse<SectionProductsReportDTO>, AppError> {
    let row = state
        .product_batch
        .section_products_report_by_section(id)
        .await?;
    Ok(ApiResponse::ok(row))
}
