//! PurchaseOrder entity - Entità ordine di acquisto

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PurchaseOrder {
    pub id: i32,
    pub order_number: String,
    // serializzata come "YYYY-MM-DD"
    pub order_date: NaiveDate,
    pub tracking_code: String,
    pub buyer_id: i32,
    pub carrier_id: i32,
    pub order_status_id: i32,
    pub warehouse_id: i32,
    pub product_record_id: i32,
}
