//! Product DTOs - Data Transfer Objects per prodotti

use crate::entities::Product;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateProductDTO {
    #[validate(length(min = 1, max = 64, message = "product_code must be 1 to 64 characters"))]
    pub product_code: String,
    #[validate(length(min = 1, max = 255, message = "description must be 1 to 255 characters"))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub width: f64,
    #[validate(range(min = 0.0))]
    pub height: f64,
    #[validate(range(min = 0.0))]
    pub length: f64,
    #[validate(range(min = 0.0))]
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    #[validate(range(min = 1))]
    pub product_type_id: i32,
    #[validate(range(min = 1))]
    pub seller_id: i32,
}

impl CreateProductDTO {
    pub fn with_id(&self, id: i32) -> Product {
        Product {
            id,
            product_code: self.product_code.clone(),
            description: self.description.clone(),
            width: self.width,
            height: self.height,
            length: self.length,
            net_weight: self.net_weight,
            expiration_rate: self.expiration_rate,
            recommended_freezing_temperature: self.recommended_freezing_temperature,
            freezing_rate: self.freezing_rate,
            product_type_id: self.product_type_id,
            seller_id: self.seller_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateProductDTO {
    #[validate(length(min = 1, max = 64))]
    pub product_code: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub width: Option<f64>,
    #[validate(range(min = 0.0))]
    pub height: Option<f64>,
    #[validate(range(min = 0.0))]
    pub length: Option<f64>,
    #[validate(range(min = 0.0))]
    pub net_weight: Option<f64>,
    pub expiration_rate: Option<f64>,
    pub recommended_freezing_temperature: Option<f64>,
    pub freezing_rate: Option<f64>,
    #[validate(range(min = 1))]
    pub product_type_id: Option<i32>,
    #[validate(range(min = 1))]
    pub seller_id: Option<i32>,
}

impl UpdateProductDTO {
    pub fn apply_to(self, product: &mut Product) {
        if let Some(product_code) = self.product_code {
            product.product_code = product_code;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(width) = self.width {
            product.width = width;
        }
        if let Some(height) = self.height {
            product.height = height;
        }
        if let Some(length) = self.length {
            product.length = length;
        }
        if let Some(net_weight) = self.net_weight {
            product.net_weight = net_weight;
        }
        if let Some(expiration_rate) = self.expiration_rate {
            product.expiration_rate = expiration_rate;
        }
        if let Some(temperature) = self.recommended_freezing_temperature {
            product.recommended_freezing_temperature = temperature;
        }
        if let Some(freezing_rate) = self.freezing_rate {
            product.freezing_rate = freezing_rate;
        }
        if let Some(product_type_id) = self.product_type_id {
            product.product_type_id = product_type_id;
        }
        if let Some(seller_id) = self.seller_id {
            product.seller_id = seller_id;
        }
    }
}
