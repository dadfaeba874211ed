//! LocalityService - Regole di business sulle località
//!
//! L'id della località è scelto dal client ed è anche la chiave naturale:
//! la creazione fallisce se esiste già, l'aggiornamento non lo può cambiare.

use super::ServiceError;
use crate::dtos::{CreateLocalityDTO, LocalitySellersReportDTO, UpdateLocalityDTO};
use crate::entities::Locality;
use crate::repositories::LocalityStore;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const ENTITY: &str = "locality";

pub struct LocalityService {
    repo: Arc<dyn LocalityStore>,
}

impl LocalityService {
    pub fn new(repo: Arc<dyn LocalityStore>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Locality>, ServiceError> {
        debug!("Listing localities");
        Ok(self.repo.read_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Locality, ServiceError> {
        debug!("Fetching locality");
        self.repo.read(&id.to_string()).await?.ok_or_else(|| {
            warn!("Locality {} not found", id);
            ServiceError::not_found(ENTITY, id)
        })
    }

    #[instrument(skip(self, data), fields(locality_id = %data.id))]
    pub async fn create(&self, data: CreateLocalityDTO) -> Result<Locality, ServiceError> {
        if self.repo.exists(&data.id).await? {
            warn!("Locality id already in use");
            return Err(ServiceError::conflict(ENTITY, "id", &data.id));
        }

        let locality = self
            .repo
            .create(&data)
            .await
            .map_err(|e| ServiceError::from_write(ENTITY, "id", &data.id, e))?;

        info!("Locality {} created", locality.id);
        Ok(locality)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: &str,
        patch: UpdateLocalityDTO,
    ) -> Result<Locality, ServiceError> {
        let mut locality = self.get(id).await?;

        patch.apply_to(&mut locality);
        self.repo.update(&locality).await?;

        info!("Locality {} updated", id);
        Ok(locality)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let locality = self.get(id).await?;
        self.repo
            .delete(&locality.id)
            .await
            .map_err(|e| ServiceError::from_delete(ENTITY, id, e))?;

        info!("Locality {} deleted", id);
        Ok(())
    }

    /// Numero di venditori registrati nella località
    #[instrument(skip(self))]
    pub async fn sellers_report(&self, id: &str) -> Result<LocalitySellersReportDTO, ServiceError> {
        debug!("Building sellers report for locality");
        self.repo
            .sellers_report(id)
            .await?
            .ok_or_else(|| {
                warn!("Locality {} not found", id);
                ServiceError::not_found(ENTITY, id)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::CreateSellerDTO;
    use crate::repositories::{Create, InMemoryLocalityRepository, InMemorySellerRepository};
    use crate::repositories::MemoryDatabase;

    fn setup() -> (LocalityService, Arc<MemoryDatabase>) {
        let db = Arc::new(MemoryDatabase::new());
        let service = LocalityService::new(Arc::new(InMemoryLocalityRepository::new(db.clone())));
        (service, db)
    }

    fn new_locality(id: &str) -> CreateLocalityDTO {
        CreateLocalityDTO {
            id: id.to_string(),
            country_name: "Argentina".to_string(),
            province_name: "Buenos Aires".to_string(),
            locality_name: "Lujan".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_with_taken_id_does_not_insert() {
        let (service, db) = setup();
        service.create(new_locality("6700")).await.unwrap();

        let err = service.create(new_locality("6700")).await.unwrap_err();

        assert!(matches!(err, ServiceError::Conflict { field: "id", .. }));
        assert_eq!(db.localities.inserts(), 1);
    }

    #[tokio::test]
    async fn test_update_existing_locality_does_not_conflict_with_itself() {
        let (service, _db) = setup();
        service.create(new_locality("6700")).await.unwrap();

        let patch = UpdateLocalityDTO {
            locality_name: Some("Luján".to_string()),
            ..Default::default()
        };
        let updated = service.update("6700", patch).await.unwrap();

        assert_eq!(updated.id, "6700");
        assert_eq!(updated.locality_name, "Luján");
        assert_eq!(service.get("6700").await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_locality() {
        let (service, _db) = setup();

        let err = service.update("0000", UpdateLocalityDTO::default()).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound { entity: "locality", .. }));
    }

    #[tokio::test]
    async fn test_sellers_report_counts_sellers_in_locality() {
        let (service, db) = setup();
        service.create(new_locality("6700")).await.unwrap();
        service.create(new_locality("5000")).await.unwrap();
        let sellers = InMemorySellerRepository::new(db.clone());
        for (cid, locality_id) in [(100, "6700"), (200, "6700"), (300, "5000")] {
            let data = CreateSellerDTO {
                cid,
                company_name: "Acme".to_string(),
                address: "Street 1".to_string(),
                telephone: "555".to_string(),
                locality_id: locality_id.to_string(),
            };
            sellers.create(&data).await.unwrap();
        }

        let report = service.sellers_report("6700").await.unwrap();

        assert_eq!(
            report,
            LocalitySellersReportDTO {
                locality_id: "6700".to_string(),
                locality_name: "Lujan".to_string(),
                sellers_count: 2,
            }
        );
    }

    #[tokio::test]
    async fn test_sellers_report_for_unknown_locality() {
        let (service, _db) = setup();

        let err = service.sellers_report("9999").await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_empty_patch_is_identity() {
        let (service, _db) = setup();
        let created = service.create(new_locality("6700")).await.unwrap();

        let updated = service.update(&created.id, UpdateLocalityDTO::default()).await.unwrap();

        assert_eq!(updated, created);
        assert_eq!(service.get(&created.id).await.unwrap(), created);
    }
}
