//! Buyer DTOs - Data Transfer Objects per acquirenti

use crate::entities::Buyer;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateBuyerDTO {
    #[validate(length(min = 1, max = 64, message = "card_number_id must be 1 to 64 characters"))]
    pub card_number_id: String,
    #[validate(length(min = 1, max = 255, message = "first_name must be 1 to 255 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 255, message = "last_name must be 1 to 255 characters"))]
    pub last_name: String,
}

impl CreateBuyerDTO {
    pub fn with_id(&self, id: i32) -> Buyer {
        Buyer {
            id,
            card_number_id: self.card_number_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateBuyerDTO {
    #[validate(length(min = 1, max = 64))]
    pub card_number_id: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,
}

impl UpdateBuyerDTO {
    pub fn apply_to(self, buyer: &mut Buyer) {
        if let Some(card_number_id) = self.card_number_id {
            buyer.card_number_id = card_number_id;
        }
        if let Some(first_name) = self.first_name {
            buyer.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            buyer.last_name = last_name;
        }
    }
}

/// Riga del report "ordini di acquisto per acquirente"
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct BuyerPurchaseOrdersReportDTO {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub purchase_orders_count: i64,
}
