//! ProductBatch DTOs - Data Transfer Objects per lotti di prodotto

use crate::entities::ProductBatch;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateProductBatchDTO {
    #[validate(range(min = 1, message = "batch_number must be a positive number"))]
    pub batch_number: i32,
    #[validate(range(min = 0))]
    pub current_quantity: i32,
    pub current_temperature: f64,
    pub due_date: NaiveDate,
    #[validate(range(min = 0))]
    pub initial_quantity: i32,
    pub manufacturing_date: NaiveDate,
    #[validate(range(min = 0, max = 23, message = "manufacturing_hour must be between 0 and 23"))]
    pub manufacturing_hour: i32,
    pub minimum_temperature: f64,
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub section_id: i32,
}

impl CreateProductBatchDTO {
    pub fn with_id(&self, id: i32) -> ProductBatch {
        ProductBatch {
            id,
            batch_number: self.batch_number,
            current_quantity: self.current_quantity,
            current_temperature: self.current_temperature,
            due_date: self.due_date,
            initial_quantity: self.initial_quantity,
            manufacturing_date: self.manufacturing_date,
            manufacturing_hour: self.manufacturing_hour,
            minimum_temperature: self.minimum_temperature,
            product_id: self.product_id,
            section_id: self.section_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateProductBatchDTO {
    #[validate(range(min = 1))]
    pub batch_number: Option<i32>,
    #[validate(range(min = 0))]
    pub current_quantity: Option<i32>,
    pub current_temperature: Option<f64>,
    pub due_date: Option<NaiveDate>,
    #[validate(range(min = 0))]
    pub initial_quantity: Option<i32>,
    pub manufacturing_date: Option<NaiveDate>,
    #[validate(range(min = 0, max = 23))]
    pub manufacturing_hour: Option<i32>,
    pub minimum_temperature: Option<f64>,
    #[validate(range(min = 1))]
    pub product_id: Option<i32>,
    #[validate(range(min = 1))]
    pub section_id: Option<i32>,
}

impl UpdateProductBatchDTO {
    pub fn apply_to(self, batch: &mut ProductBatch) {
        if let Some(batch_number) = self.batch_number {
            batch.batch_number = batch_number;
        }
        if let Some(current_quantity) = self.current_quantity {
            batch.current_quantity = current_quantity;
        }
        if let Some(current_temperature) = self.current_temperature {
            batch.current_temperature = current_temperature;
        }
        if let Some(due_date) = self.due_date {
            batch.due_date = due_date;
        }
        if let Some(initial_quantity) = self.initial_quantity {
            batch.initial_quantity = initial_quantity;
        }
        if let Some(manufacturing_date) = self.manufacturing_date {
            batch.manufacturing_date = manufacturing_date;
        }
        if let Some(manufacturing_hour) = self.manufacturing_hour {
            batch.manufacturing_hour = manufacturing_hour;
        }
        if let Some(minimum_temperature) = self.minimum_temperature {
            batch.minimum_temperature = minimum_temperature;
        }
        if let Some(product_id) = self.product_id {
            batch.product_id = product_id;
        }
        if let Some(section_id) = self.section_id {
            batch.section_id = section_id;
        }
    }
}

/// Riga del report "prodotti per sezione".
/// `products_count` è la somma delle quantità correnti dei lotti della sezione.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct SectionProductsReportDTO {
    pub section_id: i32,
    pub section_number: i32,
    pub products_count: i64,
}
