//! Section DTOs - Data Transfer Objects per sezioni

use crate::entities::Section;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateSectionDTO {
    #[validate(range(min = 1, message = "section_number must be a positive number"))]
    pub section_number: i32,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    #[validate(range(min = 0))]
    pub current_capacity: i32,
    #[validate(range(min = 0))]
    pub minimum_capacity: i32,
    #[validate(range(min = 0))]
    pub maximum_capacity: i32,
    #[validate(range(min = 1))]
    pub warehouse_id: i32,
    #[validate(range(min = 1))]
    pub product_type_id: i32,
}

impl CreateSectionDTO {
    pub fn with_id(&self, id: i32) -> Section {
        Section {
            id,
            section_number: self.section_number,
            current_temperature: self.current_temperature,
            minimum_temperature: self.minimum_temperature,
            current_capacity: self.current_capacity,
            minimum_capacity: self.minimum_capacity,
            maximum_capacity: self.maximum_capacity,
            warehouse_id: self.warehouse_id,
            product_type_id: self.product_type_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateSectionDTO {
    #[validate(range(min = 1))]
    pub section_number: Option<i32>,
    pub current_temperature: Option<f64>,
    pub minimum_temperature: Option<f64>,
    #[validate(range(min = 0))]
    pub current_capacity: Option<i32>,
    #[validate(range(min = 0))]
    pub minimum_capacity: Option<i32>,
    #[validate(range(min = 0))]
    pub maximum_capacity: Option<i32>,
    #[validate(range(min = 1))]
    pub warehouse_id: Option<i32>,
    #[validate(range(min = 1))]
    pub product_type_id: Option<i32>,
}

impl UpdateSectionDTO {
    pub fn apply_to(self, section: &mut Section) {
        if let Some(section_number) = self.section_number {
            section.section_number = section_number;
        }
        if let Some(current_temperature) = self.current_temperature {
            section.current_temperature = current_temperature;
        }
        if let Some(minimum_temperature) = self.minimum_temperature {
            section.minimum_temperature = minimum_temperature;
        }
        if let Some(current_capacity) = self.current_capacity {
            section.current_capacity = current_capacity;
        }
        if let Some(minimum_capacity) = self.minimum_capacity {
            section.minimum_capacity = minimum_capacity;
        }
        if let Some(maximum_capacity) = self.maximum_capacity {
            section.maximum_capacity = maximum_capacity;
        }
        if let Some(warehouse_id) = self.warehouse_id {
            section.warehouse_id = warehouse_id;
        }
        if let Some(product_type_id) = self.product_type_id {
            section.product_type_id = product_type_id;
        }
    }
}
