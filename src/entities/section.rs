//! Section entity - Entità sezione di un magazzino

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Section {
    pub id: i32,
    pub section_number: i32,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: i32,
    pub product_type_id: i32,
}

impl Section {
    /// Verifica la coerenza delle capacità (minima e corrente non oltre la massima)
    pub fn capacity_error(&self) -> Option<&'static str> {
        if self.minimum_capacity > self.maximum_capacity {
            Some("minimum_capacity cannot exceed maximum_capacity")
        } else if self.current_capacity > self.maximum_capacity {
            Some("current_capacity cannot exceed maximum_capacity")
        } else {
            None
        }
    }
}
