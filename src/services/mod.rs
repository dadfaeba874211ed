//! Services module - Coordinatore per tutti i servizi di dominio
//!
//! Ogni servizio incapsula un repository (tramite il suo trait `*Store`) e applica
//! le regole di business: unicità delle chiavi naturali, aggiornamenti parziali,
//! validazioni di dominio e report aggregati. Gli errori sono `ServiceError`.

pub mod buyer;
pub mod employee;
pub mod error;
pub mod locality;
pub mod product;
pub mod product_batch;
pub mod purchase_order;
pub mod section;
pub mod seller;
pub mod warehouse;

// Re-exports per facilitare l'import
pub use buyer::BuyerService;
pub use employee::EmployeeService;
pub use error::ServiceError;
pub use locality::LocalityService;
pub use product::ProductService;
pub use product_batch::ProductBatchService;
pub use purchase_order::PurchaseOrderService;
pub use section::SectionService;
pub use seller::SellerService;
pub use warehouse::WarehouseService;
