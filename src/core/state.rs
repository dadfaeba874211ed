//! Application State - Stato globale dell'applicazione
//!
//! Contiene i servizi di dominio, ognuno costruito sopra il proprio repository.
//! I repository sono trait object così lo stesso stato può lavorare su MySQL
//! oppure sul database in memoria.

use crate::repositories::{
    BuyerRepository, BuyerStore, EmployeeRepository, EmployeeStore, InMemoryBuyerRepository,
    InMemoryEmployeeRepository, InMemoryLocalityRepository, InMemoryProductBatchRepository,
    InMemoryProductRepository, InMemoryPurchaseOrderRepository, InMemorySectionRepository,
    InMemorySellerRepository, InMemoryWarehouseRepository, LocalityRepository, LocalityStore,
    MemoryDatabase, ProductBatchRepository, ProductBatchStore, ProductRepository, ProductStore,
    PurchaseOrderRepository, PurchaseOrderStore, SectionRepository, SectionStore,
    SellerRepository, SellerStore, WarehouseRepository, WarehouseStore,
};
use crate::services::{
    BuyerService, EmployeeService, LocalityService, ProductBatchService, ProductService,
    PurchaseOrderService, SectionService, SellerService, WarehouseService,
};
use sqlx::MySqlPool;
use std::sync::Arc;

/// Un repository per ogni entità
pub struct Repositories {
    pub seller: Arc<dyn SellerStore>,
    pub locality: Arc<dyn LocalityStore>,
    pub warehouse: Arc<dyn WarehouseStore>,
    pub section: Arc<dyn SectionStore>,
    pub product: Arc<dyn ProductStore>,
    pub employee: Arc<dyn EmployeeStore>,
    pub buyer: Arc<dyn BuyerStore>,
    pub purchase_order: Arc<dyn PurchaseOrderStore>,
    pub product_batch: Arc<dyn ProductBatchStore>,
}

impl Repositories {
    /// Repository MySQL che condividono lo stesso pool di connessioni
    pub fn mysql(pool: MySqlPool) -> Self {
        Self {
            seller: Arc::new(SellerRepository::new(pool.clone())),
            locality: Arc::new(LocalityRepository::new(pool.clone())),
            warehouse: Arc::new(WarehouseRepository::new(pool.clone())),
            section: Arc::new(SectionRepository::new(pool.clone())),
            product: Arc::new(ProductRepository::new(pool.clone())),
            employee: Arc::new(EmployeeRepository::new(pool.clone())),
            buyer: Arc::new(BuyerRepository::new(pool.clone())),
            purchase_order: Arc::new(PurchaseOrderRepository::new(pool.clone())),
            product_batch: Arc::new(ProductBatchRepository::new(pool)),
        }
    }

    /// Repository in memoria che condividono lo stesso `MemoryDatabase`
    pub fn in_memory(db: Arc<MemoryDatabase>) -> Self {
        Self {
            seller: Arc::new(InMemorySellerRepository::new(db.clone())),
            locality: Arc::new(InMemoryLocalityRepository::new(db.clone())),
            warehouse: Arc::new(InMemoryWarehouseRepository::new(db.clone())),
            section: Arc::new(InMemorySectionRepository::new(db.clone())),
            product: Arc::new(InMemoryProductRepository::new(db.clone())),
            employee: Arc::new(InMemoryEmployeeRepository::new(db.clone())),
            buyer: Arc::new(InMemoryBuyerRepository::new(db.clone())),
            purchase_order: Arc::new(InMemoryPurchaseOrderRepository::new(db.clone())),
            product_batch: Arc::new(InMemoryProductBatchRepository::new(db)),
        }
    }
}

/// Stato globale dell'applicazione condiviso tra tutte le route
pub struct AppState {
    pub seller: SellerService,
    pub locality: LocalityService,
    pub warehouse: WarehouseService,
    pub section: SectionService,
    pub product: ProductService,
    pub employee: EmployeeService,
    pub buyer: BuyerService,
    pub purchase_order: PurchaseOrderService,
    pub product_batch: ProductBatchService,
}

impl AppState {
    /// Crea una nuova istanza di AppState costruendo un servizio per ogni repository
    pub fn new(repos: Repositories) -> Self {
        Self {
            seller: SellerService::new(repos.seller),
            locality: LocalityService::new(repos.locality),
            warehouse: WarehouseService::new(repos.warehouse),
            section: SectionService::new(repos.section),
            product: ProductService::new(repos.product),
            employee: EmployeeService::new(repos.employee),
            buyer: BuyerService::new(repos.buyer),
            purchase_order: PurchaseOrderService::new(repos.purchase_order),
            product_batch: ProductBatchService::new(repos.product_batch),
        }
    }

    pub fn with_mysql(pool: MySqlPool) -> Self {
        Self::new(Repositories::mysql(pool))
    }

    pub fn in_memory(db: Arc<MemoryDatabase>) -> Self {
        Self::new(Repositories::in_memory(db))
    }
}
