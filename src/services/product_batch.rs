//! ProductBatchService - Regole di business sui lotti di prodotto
//!
//! Il `batch_number` è la chiave naturale. Questo servizio possiede anche il report
//! "prodotti per sezione", esposto dalle rotte delle sezioni.

use super::ServiceError;
use crate::dtos::{CreateProductBatchDTO, SectionProductsReportDTO, UpdateProductBatchDTO};
use crate::entities::ProductBatch;
use crate::repositories::ProductBatchStore;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const ENTITY: &str = "product batch";

pub struct ProductBatchService {
    repo: Arc<dyn ProductBatchStore>,
}

impl ProductBatchService {
    pub fn new(repo: Arc<dyn ProductBatchStore>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<ProductBatch>, ServiceError> {
        debug!("Listing product batches");
        Ok(self.repo.read_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<ProductBatch, ServiceError> {
        debug!("Fetching product batch");
        self.repo.read(&id).await?.ok_or_else(|| {
            warn!("Product batch {} not found", id);
            ServiceError::not_found(ENTITY, id)
        })
    }

    #[instrument(skip(self, data), fields(batch_number = %data.batch_number))]
    pub async fn create(
        &self,
        data: CreateProductBatchDTO,
    ) -> Result<ProductBatch, ServiceError> {
        ensure_consistent(&data.with_id(0))?;

        if self.repo.exists(&data.batch_number).await? {
            warn!("Batch number already in use");
            return Err(ServiceError::conflict(ENTITY, "batch_number", data.batch_number));
        }

        let batch = self
            .repo
            .create(&data)
            .await
            .map_err(|e| ServiceError::from_write(ENTITY, "batch_number", data.batch_number, e))?;

        info!("Product batch {} created", batch.id);
        Ok(batch)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: i32,
        patch: UpdateProductBatchDTO,
    ) -> Result<ProductBatch, ServiceError> {
        let mut batch = self.get(id).await?;

        let new_number = patch
            .batch_number
            .filter(|number| *number != batch.batch_number);
        if let Some(number) = new_number {
            if self.repo.exists(&number).await? {
                warn!("Batch number {} already in use", number);
                return Err(ServiceError::conflict(ENTITY, "batch_number", number));
            }
        }

        patch.apply_to(&mut batch);
        ensure_consistent(&batch)?;

        self.repo
            .update(&batch)
            .await
            .map_err(|e| ServiceError::from_write(ENTITY, "batch_number", batch.batch_number, e))?;

        info!("Product batch {} updated", id);
        Ok(batch)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.repo
            .delete(&id)
            .await
            .map_err(|e| ServiceError::from_delete(ENTITY, id, e))?;

        info!("Product batch {} deleted", id);
        Ok(())
    }

    /// Quantità di prodotto presente in ogni sezione che ha almeno un lotto
    #[instrument(skip(self))]
    pub async fn section_products_report(
        &self,
    ) -> Result<Vec<SectionProductsReportDTO>, ServiceError> {
        debug!("Building products report for all sections");
        let report = self.repo.section_products_report().await?;
        debug!("Report has {} sections", report.len());
        Ok(report)
    }

    /// Come sopra, per una sola sezione: sezione inesistente o senza lotti è un 404
    #[instrument(skip(self))]
    pub async fn section_products_report_by_section(
        &self,
        section_id: i32,
    ) -> Result<SectionProductsReportDTO, ServiceError> {
        debug!("Building products report for section");
        self.repo
            .section_products_report_by_section(&section_id)
            .await?
            .ok_or_else(|| {
                warn!("No products report for section {}", section_id);
                ServiceError::not_found("section", section_id)
            })
    }
}

fn ensure_consistent(batch: &ProductBatch) -> Result<(), ServiceError> {
    match batch.consistency_error() {
        Some(message) => {
            warn!("Rejected product batch: {}", message);
            Err(ServiceError::unprocessable(message))
        }
        None => Ok(()),
    }
}
