//! Locality DTOs - Data Transfer Objects per località

use crate::entities::Locality;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per creare una località: l'id è scelto dal client
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateLocalityDTO {
    #[validate(length(min = 1, max = 64, message = "id must be 1 to 64 characters"))]
    pub id: String,
    #[validate(length(min = 1, max = 255, message = "country_name must be 1 to 255 characters"))]
    pub country_name: String,
    #[validate(length(min = 1, max = 255, message = "province_name must be 1 to 255 characters"))]
    pub province_name: String,
    #[validate(length(min = 1, max = 255, message = "locality_name must be 1 to 255 characters"))]
    pub locality_name: String,
}

impl From<CreateLocalityDTO> for Locality {
    fn from(value: CreateLocalityDTO) -> Self {
        Self {
            id: value.id,
            country_name: value.country_name,
            province_name: value.province_name,
            locality_name: value.locality_name,
        }
    }
}

/// DTO per aggiornare una località.
/// L'id è la chiave primaria e non è modificabile, quindi non compare qui.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateLocalityDTO {
    #[validate(length(min = 1, max = 255))]
    pub country_name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub province_name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub locality_name: Option<String>,
}

impl UpdateLocalityDTO {
    pub fn apply_to(self, locality: &mut Locality) {
        if let Some(country_name) = self.country_name {
            locality.country_name = country_name;
        }
        if let Some(province_name) = self.province_name {
            locality.province_name = province_name;
        }
        if let Some(locality_name) = self.locality_name {
            locality.locality_name = locality_name;
        }
    }
}

/// Riga del report "venditori per località"
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LocalitySellersReportDTO {
    pub locality_id: String,
    pub locality_name: String,
    pub sellers_count: i64,
}
