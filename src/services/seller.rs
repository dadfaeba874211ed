//! SellerService - Regole di business sui venditori
//!
//! Il `cid` è la chiave naturale: non possono esistere due venditori con lo stesso cid.

use super::ServiceError;
use crate::dtos::{CreateSellerDTO, UpdateSellerDTO};
use crate::entities::Seller;
use crate::repositories::SellerStore;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const ENTITY: &str = "seller";

pub struct SellerService {
    repo: Arc<dyn SellerStore>,
}

impl SellerService {
    pub fn new(repo: Arc<dyn SellerStore>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Seller>, ServiceError> {
        debug!("Listing sellers");
        Ok(self.repo.read_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Seller, ServiceError> {
        debug!("Fetching seller");
        self.repo.read(&id).await?.ok_or_else(|| {
            warn!("Seller {} not found", id);
            ServiceError::not_found(ENTITY, id)
        })
    }

    #[instrument(skip(self, data), fields(cid = %data.cid))]
    pub async fn create(&self, data: CreateSellerDTO) -> Result<Seller, ServiceError> {
        if self.repo.exists(&data.cid).await? {
            warn!("Seller cid already in use");
            return Err(ServiceError::conflict(ENTITY, "cid", data.cid));
        }

        let seller = self
            .repo
            .create(&data)
            .await
            .map_err(|e| ServiceError::from_write(ENTITY, "cid", data.cid, e))?;

        info!("Seller {} created", seller.id);
        Ok(seller)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: UpdateSellerDTO) -> Result<Seller, ServiceError> {
        let mut seller = self.get(id).await?;

        if let Some(cid) = patch.cid.filter(|cid| *cid != seller.cid) {
            if self.repo.exists(&cid).await? {
                warn!("Seller cid {} already in use", cid);
                return Err(ServiceError::conflict(ENTITY, "cid", cid));
            }
        }

        patch.apply_to(&mut seller);
        self.repo
            .update(&seller)
            .await
            .map_err(|e| ServiceError::from_write(ENTITY, "cid", seller.cid, e))?;

        info!("Seller {} updated", id);
        Ok(seller)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.repo
            .delete(&id)
            .await
            .map_err(|e| ServiceError::from_delete(ENTITY, id, e))?;

        info!("Seller {} deleted", id);
        Ok(())
    }
}
