//! Locality entity - Entità località
//!
//! A differenza delle altre entità la chiave primaria non è autoincrementale:
//! è il codice della località fornito dal client (es. codice postale).

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Locality {
    pub id: String,
    pub country_name: String,
    pub province_name: String,
    pub locality_name: String,
}
