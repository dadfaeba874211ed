//! PurchaseOrderService - Regole di business sugli ordini di acquisto

use super::ServiceError;
use crate::dtos::{CreatePurchaseOrderDTO, UpdatePurchaseOrderDTO};
use crate::entities::{PurchaseOrder, same_key};
use crate::repositories::PurchaseOrderStore;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const ENTITY: &str = "purchase order";

pub struct PurchaseOrderService {
    repo: Arc<dyn PurchaseOrderStore>,
}

impl PurchaseOrderService {
    pub fn new(repo: Arc<dyn PurchaseOrderStore>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<PurchaseOrder>, ServiceError> {
        debug!("Listing purchase orders");
        Ok(self.repo.read_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<PurchaseOrder, ServiceError> {
        debug!("Fetching purchase order");
        self.repo.read(&id).await?.ok_or_else(|| {
            warn!("Purchase order {} not found", id);
            ServiceError::not_found(ENTITY, id)
        })
    }

    #[instrument(skip(self, data), fields(order_number = %data.order_number))]
    pub async fn create(
        &self,
        data: CreatePurchaseOrderDTO,
    ) -> Result<PurchaseOrder, ServiceError> {
        if self.repo.exists(&data.order_number).await? {
            warn!("Purchase order number already in use");
            return Err(ServiceError::conflict(ENTITY, "order_number", &data.order_number));
        }

        let purchase_order = self
            .repo
            .create(&data)
            .await
            .map_err(|e| ServiceError::from_write(ENTITY, "order_number", &data.order_number, e))?;

        info!("Purchase order {} created", purchase_order.id);
        Ok(purchase_order)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: i32,
        patch: UpdatePurchaseOrderDTO,
    ) -> Result<PurchaseOrder, ServiceError> {
        let mut purchase_order = self.get(id).await?;

        let new_order_number = patch
            .order_number
            .as_ref()
            .filter(|number| !same_key(number, &purchase_order.order_number));
        if let Some(number) = new_order_number {
            if self.repo.exists(number).await? {
                warn!("Purchase order number {} already in use", number);
                return Err(ServiceError::conflict(ENTITY, "order_number", number));
            }
        }

        patch.apply_to(&mut purchase_order);
        self.repo
            .update(&purchase_order)
            .await
            .map_err(|e| {
                ServiceError::from_write(ENTITY, "order_number", &purchase_order.order_number, e)
            })?;

        info!("Purchase order {} updated", id);
        Ok(purchase_order)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.repo
            .delete(&id)
            .await
            .map_err(|e| ServiceError::from_delete(ENTITY, id, e))?;

        info!("Purchase order {} deleted", id);
        Ok(())
    }
}
