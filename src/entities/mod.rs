//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod buyer;
pub mod employee;
pub mod locality;
pub mod product;
pub mod product_batch;
pub mod purchase_order;
pub mod section;
pub mod seller;
pub mod warehouse;

// Re-exports per facilitare l'import
pub use buyer::Buyer;
pub use employee::Employee;
pub use locality::Locality;
pub use product::Product;
pub use product_batch::ProductBatch;
pub use purchase_order::PurchaseOrder;
pub use section::Section;
pub use seller::Seller;
pub use warehouse::Warehouse;

/// Confronto tra chiavi naturali testuali, insensibile alle maiuscole come la
/// collation `_ci` delle colonne MySQL.
pub fn same_key(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
