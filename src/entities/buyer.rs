//! Buyer entity - Entità acquirente

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Buyer {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}
