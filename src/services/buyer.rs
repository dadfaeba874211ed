//! BuyerService - Regole di business sugli acquirenti

use super::ServiceError;
use crate::dtos::{BuyerPurchaseOrdersReportDTO, CreateBuyerDTO, UpdateBuyerDTO};
use crate::entities::{Buyer, same_key};
use crate::repositories::BuyerStore;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const ENTITY: &str = "buyer";

pub struct BuyerService {
    repo: Arc<dyn BuyerStore>,
}

impl BuyerService {
    pub fn new(repo: Arc<dyn BuyerStore>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Buyer>, ServiceError> {
        debug!("Listing buyers");
        Ok(self.repo.read_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Buyer, ServiceError> {
        debug!("Fetching buyer");
        self.repo.read(&id).await?.ok_or_else(|| {
            warn!("Buyer {} not found", id);
            ServiceError::not_found(ENTITY, id)
        })
    }

    #[instrument(skip(self, data), fields(card_number_id = %data.card_number_id))]
    pub async fn create(&self, data: CreateBuyerDTO) -> Result<Buyer, ServiceError> {
        if self.repo.exists(&data.card_number_id).await? {
            warn!("Buyer card number already in use");
            return Err(ServiceError::conflict(
                ENTITY,
                "card_number_id",
                &data.card_number_id,
            ));
        }

        let buyer = self.repo.create(&data).await.map_err(|e| {
            ServiceError::from_write(ENTITY, "card_number_id", &data.card_number_id, e)
        })?;

        info!("Buyer {} created", buyer.id);
        Ok(buyer)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: UpdateBuyerDTO) -> Result<Buyer, ServiceError> {
        let mut buyer = self.get(id).await?;

        let new_card = patch
            .card_number_id
            .as_ref()
            .filter(|card| !same_key(card, &buyer.card_number_id));
        if let Some(card) = new_card {
            if self.repo.exists(card).await? {
                warn!("Buyer card number {} already in use", card);
                return Err(ServiceError::conflict(ENTITY, "card_number_id", card));
            }
        }

        patch.apply_to(&mut buyer);
        self.repo.update(&buyer).await.map_err(|e| {
            ServiceError::from_write(ENTITY, "card_number_id", &buyer.card_number_id, e)
        })?;

        info!("Buyer {} updated", id);
        Ok(buyer)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.repo
            .delete(&id)
            .await
            .map_err(|e| ServiceError::from_delete(ENTITY, id, e))?;

        info!("Buyer {} deleted", id);
        Ok(())
    }

    /// Numero di ordini di acquisto per ogni acquirente (anche zero)
    #[instrument(skip(self))]
    pub async fn purchase_orders_report(
        &self,
    ) -> Result<Vec<BuyerPurchaseOrdersReportDTO>, ServiceError> {
        debug!("Building purchase orders report");
        Ok(self.repo.purchase_orders_report().await?)
    }

    #[instrument(skip(self))]
    pub async fn purchase_orders_report_by_buyer(
        &self,
        id: i32,
    ) -> Result<BuyerPurchaseOrdersReportDTO, ServiceError> {
        debug!("Building purchase orders report for buyer");
        self.repo
            .purchase_orders_report_by_buyer(&id)
            .await?
            .ok_or_else(|| {
                warn!("Buyer {} not found", id);
                ServiceError::not_found(ENTITY, id)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PurchaseOrder;
    use crate::repositories::memory::DuplicateKey;
    use crate::repositories::{InMemoryBuyerRepository, MemoryDatabase};
    use chrono::NaiveDate;

    fn setup() -> (BuyerService, Arc<MemoryDatabase>) {
        let db = Arc::new(MemoryDatabase::new());
        let service = BuyerService::new(Arc::new(InMemoryBuyerRepository::new(db.clone())));
        (service, db)
    }

    fn new_buyer(card_number_id: &str) -> CreateBuyerDTO {
        CreateBuyerDTO {
            card_number_id: card_number_id.to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
        }
    }

    fn seed_order(db: &MemoryDatabase, id: i32, buyer_id: i32) {
        let order = PurchaseOrder {
            id,
            order_number: format!("ORD-{id}"),
            order_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            tracking_code: "TRK".to_string(),
            buyer_id,
            carrier_id: 1,
            order_status_id: 1,
            warehouse_id: 1,
            product_record_id: 1,
        };
        db.purchase_orders
            .insert(id, order, |_| false, || {
                DuplicateKey::new("purchase_orders.order_number", id)
            })
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_with_taken_card_does_not_insert() {
        let (service, db) = setup();
        service.create(new_buyer("B-1")).await.unwrap();

        let err = service.create(new_buyer("B-1")).await.unwrap_err();

        assert!(matches!(err, ServiceError::Conflict { field: "card_number_id", .. }));
        assert_eq!(db.buyers.inserts(), 1);
    }

    #[tokio::test]
    async fn test_patch_names() {
        let (service, _db) = setup();
        let created = service.create(new_buyer("B-1")).await.unwrap();

        let patch = UpdateBuyerDTO {
            first_name: Some("Anita".to_string()),
            last_name: Some("Borg".to_string()),
            ..Default::default()
        };
        let updated = service.update(created.id, patch).await.unwrap();

        assert_eq!(updated.first_name, "Anita");
        assert_eq!(updated.last_name, "Borg");
        assert_eq!(updated.card_number_id, "B-1");
    }

    #[tokio::test]
    async fn test_patch_changing_only_case_of_own_card() {
        let (service, _db) = setup();
        let created = service.create(new_buyer("CARD-001")).await.unwrap();

        let patch = UpdateBuyerDTO {
            card_number_id: Some("card-001".to_string()),
            ..Default::default()
        };
        let updated = service.update(created.id, patch).await.unwrap();

        assert_eq!(updated.card_number_id, "card-001");
    }

    #[tokio::test]
    async fn test_card_numbers_differing_in_case_collide() {
        let (service, db) = setup();
        service.create(new_buyer("CARD-001")).await.unwrap();
        let second = service.create(new_buyer("CARD-002")).await.unwrap();

        let err = service.create(new_buyer("card-001")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict { .. }));

        let patch = UpdateBuyerDTO {
            card_number_id: Some("Card-001".to_string()),
            ..Default::default()
        };
        let err = service.update(second.id, patch).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict { .. }));
        assert_eq!(db.buyers.inserts(), 2);
    }

    #[tokio::test]
    async fn test_purchase_orders_report_counts_every_buyer() {
        let (service, db) = setup();
        service.create(new_buyer("B-1")).await.unwrap();
        service.create(new_buyer("B-2")).await.unwrap();
        seed_order(&db, 1, 1);
        seed_order(&db, 2, 1);

        let report = service.purchase_orders_report().await.unwrap();

        let counts: Vec<(i32, i64)> = report
            .iter()
            .map(|row| (row.id, row.purchase_orders_count))
            .collect();
        assert_eq!(counts, vec![(1, 2), (2, 0)]);
    }

    #[tokio::test]
    async fn test_purchase_orders_report_for_missing_buyer() {
        let (service, _db) = setup();

        let err = service.purchase_orders_report_by_buyer(9).await.unwrap_err();

        assert_eq!(err.to_string(), "buyer with id 9 not found");
    }

    #[tokio::test]
    async fn test_empty_patch_is_identity() {
        let (service, _db) = setup();
        let created = service.create(new_buyer("B-1")).await.unwrap();

        let updated = service.update(created.id, UpdateBuyerDTO::default()).await.unwrap();

        assert_eq!(updated, created);
        assert_eq!(service.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_missing_buyer_is_not_found() {
        let (service, _db) = setup();

        let err = service.get(41).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: "buyer", .. }));

        let err = service.update(41, UpdateBuyerDTO::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: "buyer", .. }));

        let err = service.delete(41).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: "buyer", .. }));
    }
}
