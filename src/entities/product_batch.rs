//! ProductBatch entity - Entità lotto di prodotto stoccato in una sezione

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ProductBatch {
    pub id: i32,
    pub batch_number: i32,
    pub current_quantity: i32,
    pub current_temperature: f64,
    pub due_date: NaiveDate,
    pub initial_quantity: i32,
    pub manufacturing_date: NaiveDate,
    pub manufacturing_hour: i32,
    pub minimum_temperature: f64,
    pub product_id: i32,
    pub section_id: i32,
}

impl ProductBatch {
    /// Verifica quantità e date del lotto
    pub fn consistency_error(&self) -> Option<&'static str> {
        if self.current_quantity > self.initial_quantity {
            Some("current_quantity cannot exceed initial_quantity")
        } else if self.manufacturing_date > self.due_date {
            Some("manufacturing_date cannot be after due_date")
        } else {
            None
        }
    }
}
