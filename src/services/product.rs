//! ProductService - Regole di business sui prodotti

use super::ServiceError;
use crate::dtos::{CreateProductDTO, UpdateProductDTO};
use crate::entities::{Product, same_key};
use crate::repositories::ProductStore;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const ENTITY: &str = "product";

pub struct ProductService {
    repo: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductStore>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Product>, ServiceError> {
        debug!("Listing products");
        Ok(self.repo.read_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Product, ServiceError> {
        debug!("Fetching product");
        self.repo.read(&id).await?.ok_or_else(|| {
            warn!("Product {} not found", id);
            ServiceError::not_found(ENTITY, id)
        })
    }

    #[instrument(skip(self, data), fields(product_code = %data.product_code))]
    pub async fn create(&self, data: CreateProductDTO) -> Result<Product, ServiceError> {
        if self.repo.exists(&data.product_code).await? {
            warn!("Product code already in use");
            return Err(ServiceError::conflict(ENTITY, "product_code", &data.product_code));
        }

        let product = self
            .repo
            .create(&data)
            .await
            .map_err(|e| ServiceError::from_write(ENTITY, "product_code", &data.product_code, e))?;

        info!("Product {} created", product.id);
        Ok(product)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: i32,
        patch: UpdateProductDTO,
    ) -> Result<Product, ServiceError> {
        let mut product = self.get(id).await?;

        let new_product_code = patch
            .product_code
            .as_ref()
            .filter(|code| !same_key(code, &product.product_code));
        if let Some(code) = new_product_code {
            if self.repo.exists(code).await? {
                warn!("Product code {} already in use", code);
                return Err(ServiceError::conflict(ENTITY, "product_code", code));
            }
        }

        patch.apply_to(&mut product);
        self.repo
            .update(&product)
            .await
            .map_err(|e| {
                ServiceError::from_write(ENTITY, "product_code", &product.product_code, e)
            })?;

        info!("Product {} updated", id);
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.repo
            .delete(&id)
            .await
            .map_err(|e| ServiceError::from_delete(ENTITY, id, e))?;

        info!("Product {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryProductRepository, MemoryDatabase};

    fn setup() -> (ProductService, Arc<MemoryDatabase>) {
        let db = Arc::new(MemoryDatabase::new());
        let service = ProductService::new(Arc::new(InMemoryProductRepository::new(db.clone())));
        (service, db)
    }

    fn new_product(product_code: &str) -> CreateProductDTO {
        CreateProductDTO {
            product_code: product_code.to_string(),
            description: "Yogurt".to_string(),
            width: 1.5,
            height: 2.0,
            length: 3.0,
            net_weight: 0.5,
            expiration_rate: 0.1,
            recommended_freezing_temperature: -4.0,
            freezing_rate: 0.3,
            product_type_id: 1,
            seller_id: 1,
        }
    }

    #[tokio::test]
    async fn test_empty_patch_is_identity() {
        let (service, _db) = setup();
        let created = service.create(new_product("P-100")).await.unwrap();

        let updated = service.update(created.id, UpdateProductDTO::default()).await.unwrap();

        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_create_with_taken_product_code_does_not_insert() {
        let (service, db) = setup();
        service.create(new_product("P-100")).await.unwrap();

        let err = service.create(new_product("P-100")).await.unwrap_err();

        assert!(matches!(err, ServiceError::Conflict { field: "product_code", .. }));
        assert_eq!(db.products.inserts(), 1);
    }

    #[tokio::test]
    async fn test_patch_to_taken_product_code_conflicts() {
        let (service, _db) = setup();
        service.create(new_product("P-100")).await.unwrap();
        let second = service.create(new_product("P-200")).await.unwrap();

        let patch = UpdateProductDTO {
            product_code: Some("P-100".to_string()),
            ..Default::default()
        };
        let err = service.update(second.id, patch).await.unwrap_err();

        assert!(matches!(err, ServiceError::Conflict { .. }));
        assert_eq!(service.get(second.id).await.unwrap().product_code, "P-200");
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let (service, _db) = setup();

        let err = service.delete(3).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound { entity: "product", .. }));
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let (service, _db) = setup();

        let err = service.get(41).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: "product", .. }));

        let err = service.update(41, UpdateProductDTO::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: "product", .. }));
    }
}
