//! Storage in memoria
//!
//! Implementazione dei repository senza MySQL, usata dai test del servizio e
//! dell'API HTTP. Rispetta lo stesso contratto dei repository MySQL:
//! id autoincrementali, violazione di unicità sulle chiavi naturali,
//! `RowNotFound` quando una delete non cancella nulla.

use dashmap::DashMap;
use sqlx::error::{DatabaseError, ErrorKind};
use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};

use crate::dtos::{
    BuyerPurchaseOrdersReportDTO, LocalitySellersReportDTO, SectionProductsReportDTO,
};
use crate::entities::{
    Buyer, Employee, Locality, Product, ProductBatch, PurchaseOrder, Section, Seller, Warehouse,
};

/// Errore restituito quando un inserimento/aggiornamento duplica una chiave naturale.
/// Viene incapsulato in `sqlx::Error::Database` come farebbe il driver MySQL.
#[derive(Debug)]
pub struct DuplicateKey {
    message: String,
    constraint: &'static str,
}

impl DuplicateKey {
    pub fn new(constraint: &'static str, value: impl fmt::Display) -> Self {
        Self {
            message: format!("Duplicate entry '{}' for key '{}'", value, constraint),
            constraint,
        }
    }

    pub fn into_sqlx(self) -> sqlx::Error {
        sqlx::Error::Database(Box::new(self))
    }
}

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for DuplicateKey {}

impl DatabaseError for DuplicateKey {
    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        // codice SQLSTATE di MySQL per ER_DUP_ENTRY
        Some(Cow::Borrowed("23000"))
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn constraint(&self) -> Option<&str> {
        Some(self.constraint)
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::UniqueViolation
    }
}

/// Tabella in memoria indicizzata per chiave primaria
pub struct MemoryTable<K, T> {
    rows: DashMap<K, T>,
    next_id: AtomicI32,
    inserts: AtomicUsize,
    // serializza le scritture che devono verificare l'unicità
    write_lock: Mutex<()>,
}

impl<K, T> MemoryTable<K, T>
where
    K: Eq + Hash + Ord + Clone,
    T: Clone,
{
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI32::new(1),
            inserts: AtomicUsize::new(0),
            write_lock: Mutex::new(()),
        }
    }

    /// Prossimo id autoincrementale
    pub fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Numero di inserimenti andati a buon fine
    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<T> {
        self.rows.get(key).map(|entry| entry.value().clone())
    }

    /// Tutte le righe, ordinate per chiave primaria
    pub fn all(&self) -> Vec<T> {
        let mut entries: Vec<(K, T)> = self
            .rows
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.into_iter().map(|(_, row)| row).collect()
    }

    pub fn any(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.rows.iter().any(|entry| predicate(entry.value()))
    }

    pub fn count(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.rows.iter().filter(|entry| predicate(entry.value())).count()
    }

    /// Inserisce una riga; `clashes` individua le righe esistenti con la stessa chiave naturale.
    pub fn insert(
        &self,
        key: K,
        row: T,
        clashes: impl Fn(&T) -> bool,
        duplicate: impl FnOnce() -> DuplicateKey,
    ) -> Result<(), sqlx::Error> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| sqlx::Error::WorkerCrashed)?;
        if self.rows.contains_key(&key) || self.any(&clashes) {
            return Err(duplicate().into_sqlx());
        }
        self.rows.insert(key, row);
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Sovrascrive una riga esistente; se la riga non c'è non fa nulla (come un UPDATE su 0 righe).
    /// `clashes` riceve le altre righe della tabella.
    pub fn replace(
        &self,
        key: &K,
        row: T,
        clashes: impl Fn(&T) -> bool,
        duplicate: impl FnOnce() -> DuplicateKey,
    ) -> Result<(), sqlx::Error> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| sqlx::Error::WorkerCrashed)?;
        let taken = self
            .rows
            .iter()
            .any(|entry| entry.key() != key && clashes(entry.value()));
        if taken {
            return Err(duplicate().into_sqlx());
        }
        if let Some(mut current) = self.rows.get_mut(key) {
            *current = row;
        }
        Ok(())
    }

    /// Rimuove una riga; `true` se esisteva
    pub fn remove(&self, key: &K) -> bool {
        self.rows.remove(key).is_some()
    }
}

impl<K, T> Default for MemoryTable<K, T>
where
    K: Eq + Hash + Ord + Clone,
    T: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// L'intero database in memoria, condiviso tra i repository in-memory
#[derive(Default)]
pub struct MemoryDatabase {
    pub localities: MemoryTable<String, Locality>,
    pub sellers: MemoryTable<i32, Seller>,
    pub warehouses: MemoryTable<i32, Warehouse>,
    pub sections: MemoryTable<i32, Section>,
    pub products: MemoryTable<i32, Product>,
    pub employees: MemoryTable<i32, Employee>,
    pub buyers: MemoryTable<i32, Buyer>,
    pub purchase_orders: MemoryTable<i32, PurchaseOrder>,
    pub product_batches: MemoryTable<i32, ProductBatch>,
    offline: AtomicBool,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simula un pool di connessioni non raggiungibile: ogni operazione fallisce
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn ensure_online(&self) -> Result<(), sqlx::Error> {
        if self.offline.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }

    /// Somma delle quantità correnti dei lotti, per sezione (solo sezioni con lotti)
    pub fn section_products_report(&self) -> Vec<SectionProductsReportDTO> {
        self.sections
            .all()
            .into_iter()
            .filter_map(|section| self.section_products_row(&section))
            .collect()
    }

    pub fn section_products_row(&self, section: &Section) -> Option<SectionProductsReportDTO> {
        let batches: Vec<ProductBatch> = self
            .product_batches
            .all()
            .into_iter()
            .filter(|batch| batch.section_id == section.id)
            .collect();
        if batches.is_empty() {
            return None;
        }
        Some(SectionProductsReportDTO {
            section_id: section.id,
            section_number: section.section_number,
            products_count: batches.iter().map(|b| i64::from(b.current_quantity)).sum(),
        })
    }

    pub fn locality_sellers_row(&self, locality: &Locality) -> LocalitySellersReportDTO {
        LocalitySellersReportDTO {
            locality_id: locality.id.clone(),
            locality_name: locality.locality_name.clone(),
            sellers_count: self.sellers.count(|s| s.locality_id == locality.id) as i64,
        }
    }

    pub fn buyer_purchase_orders_row(&self, buyer: &Buyer) -> BuyerPurchaseOrdersReportDTO {
        BuyerPurchaseOrdersReportDTO {
            id: buyer.id,
            card_number_id: buyer.card_number_id.clone(),
            first_name: buyer.first_name.clone(),
            last_name: buyer.last_name.clone(),
            purchase_orders_count: self.purchase_orders.count(|o| o.buyer_id == buyer.id) as i64,
        }
    }
}
