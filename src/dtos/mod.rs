//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! Per ogni entità ci sono:
//! - un DTO di creazione, con tutti i campi obbligatori (manca solo l'id, generato dal db)
//! - un DTO di aggiornamento parziale, con campi opzionali: `None` lascia il valore invariato
//! - dove previsto, le righe dei report aggregati

pub mod buyer;
pub mod employee;
pub mod locality;
pub mod product;
pub mod product_batch;
pub mod purchase_order;
pub mod section;
pub mod seller;
pub mod warehouse;

// Re-exports per mantenere gli import corti
pub use buyer::{BuyerPurchaseOrdersReportDTO, CreateBuyerDTO, UpdateBuyerDTO};
pub use employee::{CreateEmployeeDTO, UpdateEmployeeDTO};
pub use locality::{CreateLocalityDTO, LocalitySellersReportDTO, UpdateLocalityDTO};
pub use product::{CreateProductDTO, UpdateProductDTO};
pub use product_batch::{CreateProductBatchDTO, SectionProductsReportDTO, UpdateProductBatchDTO};
pub use purchase_order::{CreatePurchaseOrderDTO, UpdatePurchaseOrderDTO};
pub use section::{CreateSectionDTO, UpdateSectionDTO};
pub use seller::{CreateSellerDTO, UpdateSellerDTO};
pub use warehouse::{CreateWarehouseDTO, UpdateWarehouseDTO};
