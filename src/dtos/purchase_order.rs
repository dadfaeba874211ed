//! PurchaseOrder DTOs - Data Transfer Objects per ordini di acquisto

use crate::entities::PurchaseOrder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreatePurchaseOrderDTO {
    #[validate(length(min = 1, max = 64, message = "order_number must be 1 to 64 characters"))]
    pub order_number: String,
    pub order_date: NaiveDate,
    #[validate(length(min = 1, max = 255, message = "tracking_code must be 1 to 255 characters"))]
    pub tracking_code: String,
    #[validate(range(min = 1))]
    pub buyer_id: i32,
    #[validate(range(min = 1))]
    pub carrier_id: i32,
    #[validate(range(min = 1))]
    pub order_status_id: i32,
    #[validate(range(min = 1))]
    pub warehouse_id: i32,
    #[validate(range(min = 1))]
    pub product_record_id: i32,
}

impl CreatePurchaseOrderDTO {
    pub fn with_id(&self, id: i32) -> PurchaseOrder {
        PurchaseOrder {
            id,
            order_number: self.order_number.clone(),
            order_date: self.order_date,
            tracking_code: self.tracking_code.clone(),
            buyer_id: self.buyer_id,
            carrier_id: self.carrier_id,
            order_status_id: self.order_status_id,
            warehouse_id: self.warehouse_id,
            product_record_id: self.product_record_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdatePurchaseOrderDTO {
    #[validate(length(min = 1, max = 64))]
    pub order_number: Option<String>,
    pub order_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 255))]
    pub tracking_code: Option<String>,
    #[validate(range(min = 1))]
    pub buyer_id: Option<i32>,
    #[validate(range(min = 1))]
    pub carrier_id: Option<i32>,
    #[validate(range(min = 1))]
    pub order_status_id: Option<i32>,
    #[validate(range(min = 1))]
    pub warehouse_id: Option<i32>,
    #[validate(range(min = 1))]
    pub product_record_id: Option<i32>,
}

impl UpdatePurchaseOrderDTO {
    pub fn apply_to(self, order: &mut PurchaseOrder) {
        if let Some(order_number) = self.order_number {
            order.order_number = order_number;
        }
        if let Some(order_date) = self.order_date {
            order.order_date = order_date;
        }
        if let Some(tracking_code) = self.tracking_code {
            order.tracking_code = tracking_code;
        }
        if let Some(buyer_id) = self.buyer_id {
            order.buyer_id = buyer_id;
        }
        if let Some(carrier_id) = self.carrier_id {
            order.carrier_id = carrier_id;
        }
        if let Some(order_status_id) = self.order_status_id {
            order.order_status_id = order_status_id;
        }
        if let Some(warehouse_id) = self.warehouse_id {
            order.warehouse_id = warehouse_id;
        }
        if let Some(product_record_id) = self.product_record_id {
            order.product_record_id = product_record_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_date_is_parsed_from_iso_string() {
        let dto: CreatePurchaseOrderDTO = serde_json::from_value(serde_json::json!({
            "order_number": "PO-0001",
            "order_date": "2024-05-02",
            "tracking_code": "TRK-AAA",
            "buyer_id": 1,
            "carrier_id": 1,
            "order_status_id": 1,
            "warehouse_id": 1,
            "product_record_id": 1
        }))
        .unwrap();

        assert_eq!(dto.order_date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
    }

    #[test]
    fn test_invalid_order_date_is_rejected() {
        let result = serde_json::from_value::<UpdatePurchaseOrderDTO>(serde_json::json!({
            "order_date": "02/05/2024"
        }));
        assert!(result.is_err());
    }
}
