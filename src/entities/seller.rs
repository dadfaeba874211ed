//! Seller entity - Entità venditore

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Seller {
    pub id: i32,
    /// identificativo aziendale, univoco tra i venditori
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: String,
}
