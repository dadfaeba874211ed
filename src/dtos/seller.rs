//! Seller DTOs - Data Transfer Objects per venditori

use crate::entities::Seller;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per creare un nuovo venditore (senza id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateSellerDTO {
    #[validate(range(min = 1, message = "cid must be a positive number"))]
    pub cid: i32,
    #[validate(length(min = 1, max = 255, message = "company_name must be 1 to 255 characters"))]
    pub company_name: String,
    #[validate(length(min = 1, max = 255, message = "address must be 1 to 255 characters"))]
    pub address: String,
    #[validate(length(min = 1, max = 64, message = "telephone must be 1 to 64 characters"))]
    pub telephone: String,
    #[validate(length(min = 1, max = 64, message = "locality_id must be 1 to 64 characters"))]
    pub locality_id: String,
}

impl CreateSellerDTO {
    pub fn with_id(&self, id: i32) -> Seller {
        Seller {
            id,
            cid: self.cid,
            company_name: self.company_name.clone(),
            address: self.address.clone(),
            telephone: self.telephone.clone(),
            locality_id: self.locality_id.clone(),
        }
    }
}

/// DTO per aggiornare un venditore (solo i campi presenti vengono modificati)
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateSellerDTO {
    #[validate(range(min = 1, message = "cid must be a positive number"))]
    pub cid: Option<i32>,
    #[validate(length(min = 1, max = 255))]
    pub company_name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub telephone: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub locality_id: Option<String>,
}

impl UpdateSellerDTO {
    pub fn apply_to(self, seller: &mut Seller) {
        if let Some(cid) = self.cid {
            seller.cid = cid;
        }
        if let Some(company_name) = self.company_name {
            seller.company_name = company_name;
        }
        if let Some(address) = self.address {
            seller.address = address;
        }
        if let Some(telephone) = self.telephone {
            seller.telephone = telephone;
        }
        if let Some(locality_id) = self.locality_id {
            seller.locality_id = locality_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller() -> Seller {
        Seller {
            id: 7,
            cid: 42,
            company_name: "Frigorifico Sur".to_string(),
            address: "Av. Libertador 100".to_string(),
            telephone: "1144445555".to_string(),
            locality_id: "6700".to_string(),
        }
    }

    #[test]
    fn test_empty_patch_leaves_seller_unchanged() {
        let mut target = seller();
        UpdateSellerDTO::default().apply_to(&mut target);
        assert_eq!(target, seller());
    }

    #[test]
    fn test_patch_overwrites_only_present_fields() {
        let mut target = seller();
        let patch = UpdateSellerDTO {
            telephone: Some("0800-222".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut target);

        assert_eq!(target.telephone, "0800-222");
        assert_eq!(target.company_name, "Frigorifico Sur");
        assert_eq!(target.cid, 42);
        assert_eq!(target.id, 7);
    }

    #[test]
    fn test_patch_with_same_value_is_still_applied() {
        let mut target = seller();
        let patch: UpdateSellerDTO =
            serde_json::from_str(r#"{"cid": 42, "address": null}"#).unwrap();
        assert_eq!(patch.cid, Some(42));
        assert!(patch.address.is_none());
        patch.apply_to(&mut target);
        assert_eq!(target, seller());
    }

    #[test]
    fn test_create_requires_every_field() {
        let missing = serde_json::from_str::<CreateSellerDTO>(
            r#"{"cid": 1, "company_name": "Test", "address": "Test", "telephone": "Test"}"#,
        );
        assert!(missing.is_err());
    }

    #[test]
    fn test_create_rejects_blank_values() {
        let dto = CreateSellerDTO {
            cid: 0,
            company_name: String::new(),
            address: "Test".to_string(),
            telephone: "Test".to_string(),
            locality_id: "123".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("cid"));
        assert!(fields.contains_key("company_name"));
        assert!(!fields.contains_key("address"));
    }

    #[test]
    fn test_lengths_follow_column_sizes() {
        let dto = CreateSellerDTO {
            cid: 1,
            company_name: "c".repeat(255),
            address: "a".repeat(256),
            telephone: "1".repeat(64),
            locality_id: "6".repeat(65),
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("address"));
        assert!(fields.contains_key("locality_id"));
        assert!(!fields.contains_key("company_name"));
        assert!(!fields.contains_key("telephone"));

        let patch = UpdateSellerDTO {
            telephone: Some("1".repeat(65)),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }
}
