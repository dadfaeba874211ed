//! Employee DTOs - Data Transfer Objects per dipendenti

use crate::entities::Employee;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateEmployeeDTO {
    #[validate(length(min = 1, max = 64, message = "card_number_id must be 1 to 64 characters"))]
    pub card_number_id: String,
    #[validate(length(min = 1, max = 255, message = "first_name must be 1 to 255 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 255, message = "last_name must be 1 to 255 characters"))]
    pub last_name: String,
    #[validate(range(min = 1))]
    pub warehouse_id: i32,
}

impl CreateEmployeeDTO {
    pub fn with_id(&self, id: i32) -> Employee {
        Employee {
            id,
            card_number_id: self.card_number_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            warehouse_id: self.warehouse_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateEmployeeDTO {
    #[validate(length(min = 1, max = 64))]
    pub card_number_id: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,
    #[validate(range(min = 1))]
    pub warehouse_id: Option<i32>,
}

impl UpdateEmployeeDTO {
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(card_number_id) = self.card_number_id {
            employee.card_number_id = card_number_id;
        }
        if let Some(first_name) = self.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            employee.last_name = last_name;
        }
        if let Some(warehouse_id) = self.warehouse_id {
            employee.warehouse_id = warehouse_id;
        }
    }
}
