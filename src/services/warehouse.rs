//! WarehouseService - Regole di business sui magazzini

use super::ServiceError;
use crate::dtos::{CreateWarehouseDTO, UpdateWarehouseDTO};
use crate::entities::{Warehouse, same_key};
use crate::repositories::WarehouseStore;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const ENTITY: &str = "warehouse";

pub struct WarehouseService {
    repo: Arc<dyn WarehouseStore>,
}

impl WarehouseService {
    pub fn new(repo: Arc<dyn WarehouseStore>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Warehouse>, ServiceError> {
        debug!("Listing warehouses");
        Ok(self.repo.read_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Warehouse, ServiceError> {
        debug!("Fetching warehouse");
        self.repo.read(&id).await?.ok_or_else(|| {
            warn!("Warehouse {} not found", id);
            ServiceError::not_found(ENTITY, id)
        })
    }

    #[instrument(skip(self, data), fields(warehouse_code = %data.warehouse_code))]
    pub async fn create(&self, data: CreateWarehouseDTO) -> Result<Warehouse, ServiceError> {
        if self.repo.exists(&data.warehouse_code).await? {
            warn!("Warehouse code already in use");
            return Err(ServiceError::conflict(ENTITY, "warehouse_code", &data.warehouse_code));
        }

        let warehouse = self
            .repo
            .create(&data)
            .await
            .map_err(|e| {
                ServiceError::from_write(ENTITY, "warehouse_code", &data.warehouse_code, e)
            })?;

        info!("Warehouse {} created", warehouse.id);
        Ok(warehouse)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: i32,
        patch: UpdateWarehouseDTO,
    ) -> Result<Warehouse, ServiceError> {
        let mut warehouse = self.get(id).await?;

        let new_warehouse_code = patch
            .warehouse_code
            .as_ref()
            .filter(|code| !same_key(code, &warehouse.warehouse_code));
        if let Some(code) = new_warehouse_code {
            if self.repo.exists(code).await? {
                warn!("Warehouse code {} already in use", code);
                return Err(ServiceError::conflict(ENTITY, "warehouse_code", code));
            }
        }

        patch.apply_to(&mut warehouse);
        self.repo
            .update(&warehouse)
            .await
            .map_err(|e| {
                ServiceError::from_write(ENTITY, "warehouse_code", &warehouse.warehouse_code, e)
            })?;

        info!("Warehouse {} updated", id);
        Ok(warehouse)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.repo
            .delete(&id)
            .await
            .map_err(|e| ServiceError::from_delete(ENTITY, id, e))?;

        info!("Warehouse {} deleted", id);
        Ok(())
    }
}
