//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di database per una specifica entità.

// ************************* NOTA SULLE QUERY ************************* //

/*
   Le query sono scritte a mano e usano sqlx::query / sqlx::query_as con i placeholder `?`
   di MySQL e .bind(...) per ogni valore, nello stesso ordine dei placeholder.
   Non usiamo le macro query!/query_as! perché richiedono un database raggiungibile
   (o la cache offline) in fase di compilazione: il mapping riga -> struct lo fa
   #[derive(sqlx::FromRow)] sulle entity, quindi i nomi delle colonne nella SELECT
   devono coincidere con i nomi dei campi (usare AS negli aggregati).

   Number of Rows   Method to Call              Returns
   None             .execute(...).await         sqlx::Result<MySqlQueryResult>   (INSERT/UPDATE/DELETE)
   Zero or One      .fetch_optional(...).await  sqlx::Result<Option<T>>
   Exactly One      .fetch_one(...).await       sqlx::Result<T>
   Multiple         .fetch_all(...).await       sqlx::Result<Vec<T>>

   Dopo una INSERT l'id generato si legge con result.last_insert_id(),
   dopo una DELETE result.rows_affected() == 0 significa che la riga non c'era.
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod buyer;
pub mod employee;
pub mod locality;
pub mod memory;
pub mod product;
pub mod product_batch;
pub mod purchase_order;
pub mod section;
pub mod seller;
pub mod traits;
pub mod warehouse;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Exists, Read, ReadAll, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use buyer::{BuyerRepository, BuyerStore, InMemoryBuyerRepository};
pub use employee::{EmployeeRepository, EmployeeStore, InMemoryEmployeeRepository};
pub use locality::{InMemoryLocalityRepository, LocalityRepository, LocalityStore};
pub use memory::MemoryDatabase;
pub use product::{InMemoryProductRepository, ProductRepository, ProductStore};
pub use product_batch::{InMemoryProductBatchRepository, ProductBatchRepository, ProductBatchStore};
pub use purchase_order::{
    InMemoryPurchaseOrderRepository, PurchaseOrderRepository, PurchaseOrderStore,
};
pub use section::{InMemorySectionRepository, SectionRepository, SectionStore};
pub use seller::{InMemorySellerRepository, SellerRepository, SellerStore};
pub use warehouse::{InMemoryWarehouseRepository, WarehouseRepository, WarehouseStore};
