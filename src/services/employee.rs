//! EmployeeService - Regole di business sui dipendenti

use super::ServiceError;
use crate::dtos::{CreateEmployeeDTO, UpdateEmployeeDTO};
use crate::entities::{Employee, same_key};
use crate::repositories::EmployeeStore;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const ENTITY: &str = "employee";

pub struct EmployeeService {
    repo: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeStore>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Employee>, ServiceError> {
        debug!("Listing employees");
        Ok(self.repo.read_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Employee, ServiceError> {
        debug!("Fetching employee");
        self.repo.read(&id).await?.ok_or_else(|| {
            warn!("Employee {} not found", id);
            ServiceError::not_found(ENTITY, id)
        })
    }

    #[instrument(skip(self, data), fields(card_number_id = %data.card_number_id))]
    pub async fn create(&self, data: CreateEmployeeDTO) -> Result<Employee, ServiceError> {
        if self.repo.exists(&data.card_number_id).await? {
            warn!("Employee card number already in use");
            return Err(ServiceError::conflict(ENTITY, "card_number_id", &data.card_number_id));
        }

        let employee = self
            .repo
            .create(&data)
            .await
            .map_err(|e| {
                ServiceError::from_write(ENTITY, "card_number_id", &data.card_number_id, e)
            })?;

        info!("Employee {} created", employee.id);
        Ok(employee)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: i32,
        patch: UpdateEmployeeDTO,
    ) -> Result<Employee, ServiceError> {
        let mut employee = self.get(id).await?;

        let new_card_number_id = patch
            .card_number_id
            .as_ref()
            .filter(|card| !same_key(card, &employee.card_number_id));
        if let Some(card) = new_card_number_id {
            if self.repo.exists(card).await? {
                warn!("Employee card number {} already in use", card);
                return Err(ServiceError::conflict(ENTITY, "card_number_id", card));
            }
        }

        patch.apply_to(&mut employee);
        self.repo
            .update(&employee)
            .await
            .map_err(|e| {
                ServiceError::from_write(ENTITY, "card_number_id", &employee.card_number_id, e)
            })?;

        info!("Employee {} updated", id);
        Ok(employee)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.repo
            .delete(&id)
            .await
            .map_err(|e| ServiceError::from_delete(ENTITY, id, e))?;

        info!("Employee {} deleted", id);
        Ok(())
    }
}
