//! SectionService - Regole di business sulle sezioni di magazzino
//!
//! Oltre all'unicità del `section_number`, una sezione deve avere capacità coerenti
//! (minima e corrente non oltre la massima), sia in creazione sia dopo un aggiornamento parziale.

use super::ServiceError;
use crate::dtos::{CreateSectionDTO, UpdateSectionDTO};
use crate::entities::Section;
use crate::repositories::SectionStore;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const ENTITY: &str = "section";

pub struct SectionService {
    repo: Arc<dyn SectionStore>,
}

impl SectionService {
    pub fn new(repo: Arc<dyn SectionStore>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Section>, ServiceError> {
        debug!("Listing sections");
        Ok(self.repo.read_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Section, ServiceError> {
        debug!("Fetching section");
        self.repo.read(&id).await?.ok_or_else(|| {
            warn!("Section {} not found", id);
            ServiceError::not_found(ENTITY, id)
        })
    }

    #[instrument(skip(self, data), fields(section_number = %data.section_number))]
    pub async fn create(&self, data: CreateSectionDTO) -> Result<Section, ServiceError> {
        ensure_capacities(&data.with_id(0))?;

        if self.repo.exists(&data.section_number).await? {
            warn!("Section number already in use");
            return Err(ServiceError::conflict(
                ENTITY,
                "section_number",
                data.section_number,
            ));
        }

        let section = self.repo.create(&data).await.map_err(|e| {
            ServiceError::from_write(ENTITY, "section_number", data.section_number, e)
        })?;

        info!("Section {} created", section.id);
        Ok(section)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: UpdateSectionDTO) -> Result<Section, ServiceError> {
        let mut section = self.get(id).await?;

        let new_number = patch
            .section_number
            .filter(|number| *number != section.section_number);
        if let Some(number) = new_number {
            if self.repo.exists(&number).await? {
                warn!("Section number {} already in use", number);
                return Err(ServiceError::conflict(ENTITY, "section_number", number));
            }
        }

        patch.apply_to(&mut section);
        ensure_capacities(&section)?;

        self.repo.update(&section).await.map_err(|e| {
            ServiceError::from_write(ENTITY, "section_number", section.section_number, e)
        })?;

        info!("Section {} updated", id);
        Ok(section)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.repo
            .delete(&id)
            .await
            .map_err(|e| ServiceError::from_delete(ENTITY, id, e))?;

        info!("Section {} deleted", id);
        Ok(())
    }
}

fn ensure_capacities(section: &Section) -> Result<(), ServiceError> {
    match section.capacity_error() {
        Some(message) => {
            warn!("Rejected section: {}", message);
            Err(ServiceError::unprocessable(message))
        }
        None => Ok(()),
    }
}
