//! Warehouse DTOs - Data Transfer Objects per magazzini

use crate::entities::Warehouse;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateWarehouseDTO {
    #[validate(length(min = 1, max = 64, message = "warehouse_code must be 1 to 64 characters"))]
    pub warehouse_code: String,
    #[validate(length(min = 1, max = 255, message = "address must be 1 to 255 characters"))]
    pub address: String,
    #[validate(length(min = 1, max = 64, message = "telephone must be 1 to 64 characters"))]
    pub telephone: String,
    #[validate(range(min = 0, message = "minimum_capacity cannot be negative"))]
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
    #[validate(length(min = 1, max = 64, message = "locality_id must be 1 to 64 characters"))]
    pub locality_id: String,
}

impl CreateWarehouseDTO {
    pub fn with_id(&self, id: i32) -> Warehouse {
        Warehouse {
            id,
            warehouse_code: self.warehouse_code.clone(),
            address: self.address.clone(),
            telephone: self.telephone.clone(),
            minimum_capacity: self.minimum_capacity,
            minimum_temperature: self.minimum_temperature,
            locality_id: self.locality_id.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateWarehouseDTO {
    #[validate(length(min = 1, max = 64))]
    pub warehouse_code: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub telephone: Option<String>,
    #[validate(range(min = 0))]
    pub minimum_capacity: Option<i32>,
    pub minimum_temperature: Option<f64>,
    #[validate(length(min = 1, max = 64))]
    pub locality_id: Option<String>,
}

impl UpdateWarehouseDTO {
    pub fn apply_to(self, warehouse: &mut Warehouse) {
        if let Some(warehouse_code) = self.warehouse_code {
            warehouse.warehouse_code = warehouse_code;
        }
        if let Some(address) = self.address {
            warehouse.address = address;
        }
        if let Some(telephone) = self.telephone {
            warehouse.telephone = telephone;
        }
        if let Some(minimum_capacity) = self.minimum_capacity {
            warehouse.minimum_capacity = minimum_capacity;
        }
        if let Some(minimum_temperature) = self.minimum_temperature {
            warehouse.minimum_temperature = minimum_temperature;
        }
        if let Some(locality_id) = self.locality_id {
            warehouse.locality_id = locality_id;
        }
    }
}
