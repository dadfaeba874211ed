//! PurchaseOrderRepository - Repository per la gestione degli ordini di acquisto

use super::memory::{DuplicateKey, MemoryDatabase};
use super::{Create, Delete, Exists, Read, ReadAll, Update};
use crate::dtos::CreatePurchaseOrderDTO;
use crate::entities::{PurchaseOrder, same_key};
use async_trait::async_trait;
use sqlx::{Error, MySqlPool};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Operazioni richieste dal PurchaseOrderService; la chiave naturale è `order_number`
pub trait PurchaseOrderStore:
    ReadAll<PurchaseOrder>
    + Read<PurchaseOrder, i32>
    + Exists<String>
    + Create<PurchaseOrder, CreatePurchaseOrderDTO>
    + Update<PurchaseOrder>
    + Delete<i32>
    + Send
    + Sync
{
}

impl<T> PurchaseOrderStore for T where
    T: ReadAll<PurchaseOrder>
        + Read<PurchaseOrder, i32>
        + Exists<String>
        + Create<PurchaseOrder, CreatePurchaseOrderDTO>
        + Update<PurchaseOrder>
        + Delete<i32>
        + Send
        + Sync
{
}

pub struct PurchaseOrderRepository {
    connection_pool: MySqlPool,
}

impl PurchaseOrderRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl ReadAll<PurchaseOrder> for PurchaseOrderRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<PurchaseOrder>, Error> {
        debug!("Reading all purchase orders");
        let rows = sqlx::query_as::<_, PurchaseOrder>(
            r#"
            SELECT
                id, order_number, order_date, tracking_code, buyer_id, carrier_id,
                order_status_id, warehouse_id, product_record_id
            FROM purchase_orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} purchase orders", rows.len());
        Ok(rows)
    }
}

#[async_trait]
impl Read<PurchaseOrder, i32> for PurchaseOrderRepository {
    #[instrument(skip(self), fields(purchase_order_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<PurchaseOrder>, Error> {
        debug!("Reading purchase order by id");
        let row = sqlx::query_as::<_, PurchaseOrder>(
            r#"
            SELECT
                id, order_number, order_date, tracking_code, buyer_id, carrier_id,
                order_status_id, warehouse_id, product_record_id
            FROM purchase_orders
            WHERE id = ?
            "#,
        )
        .bind(*id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(row)
    }
}

#[async_trait]
impl Exists<String> for PurchaseOrderRepository {
    #[instrument(skip(self), fields(order_number = %order_number))]
    async fn exists(&self, order_number: &String) -> Result<bool, Error> {
        let row = sqlx::query("SELECT order_number FROM purchase_orders WHERE order_number = ?")
            .bind(order_number.as_str())
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(row.is_some())
    }
}

#[async_trait]
impl Create<PurchaseOrder, CreatePurchaseOrderDTO> for PurchaseOrderRepository {
    #[instrument(skip(self, data), fields(order_number = %data.order_number))]
    async fn create(&self, data: &CreatePurchaseOrderDTO) -> Result<PurchaseOrder, Error> {
        debug!("Creating new purchase order");
        let result = sqlx::query(
            r#"
            INSERT INTO purchase_orders (
                order_number, order_date, tracking_code, buyer_id, carrier_id,
                order_status_id, warehouse_id, product_record_id
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.order_number)
        .bind(data.order_date)
        .bind(&data.tracking_code)
        .bind(data.buyer_id)
        .bind(data.carrier_id)
        .bind(data.order_status_id)
        .bind(data.warehouse_id)
        .bind(data.product_record_id)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        info!("Purchase order created with id {}", new_id);
        Ok(data.with_id(new_id))
    }
}

#[async_trait]
impl Update<PurchaseOrder> for PurchaseOrderRepository {
    #[instrument(skip(self, purchase_order), fields(purchase_order_id = %purchase_order.id))]
    async fn update(&self, purchase_order: &PurchaseOrder) -> Result<(), Error> {
        debug!("Updating purchase order");
        sqlx::query(
            r#"
            UPDATE purchase_orders
            SET order_number = ?, order_date = ?, tracking_code = ?,
                buyer_id = ?, carrier_id = ?, order_status_id = ?,
                warehouse_id = ?, product_record_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&purchase_order.order_number)
        .bind(purchase_order.order_date)
        .bind(&purchase_order.tracking_code)
        .bind(purchase_order.buyer_id)
        .bind(purchase_order.carrier_id)
        .bind(purchase_order.order_status_id)
        .bind(purchase_order.warehouse_id)
        .bind(purchase_order.product_record_id)
        .bind(purchase_order.id)
        .execute(&self.connection_pool)
        .await?;

        info!("Purchase order updated successfully");
        Ok(())
    }
}

#[async_trait]
impl Delete<i32> for PurchaseOrderRepository {
    #[instrument(skip(self), fields(purchase_order_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        debug!("Deleting purchase order");
        let result = sqlx::query("DELETE FROM purchase_orders WHERE id = ?")
            .bind(*id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Purchase order deleted successfully");
        Ok(())
    }
}

/// Versione in memoria del repository degli ordini di acquisto
pub struct InMemoryPurchaseOrderRepository {
    db: Arc<MemoryDatabase>,
}

impl InMemoryPurchaseOrderRepository {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadAll<PurchaseOrder> for InMemoryPurchaseOrderRepository {
    async fn read_all(&self) -> Result<Vec<PurchaseOrder>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.purchase_orders.all())
    }
}

#[async_trait]
impl Read<PurchaseOrder, i32> for InMemoryPurchaseOrderRepository {
    async fn read(&self, id: &i32) -> Result<Option<PurchaseOrder>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.purchase_orders.get(id))
    }
}

#[async_trait]
impl Exists<String> for InMemoryPurchaseOrderRepository {
    async fn exists(&self, order_number: &String) -> Result<bool, Error> {
        self.db.ensure_online()?;
        Ok(self.db.purchase_orders.any(|p| same_key(&p.order_number, order_number)))
    }
}

#[async_trait]
impl Create<PurchaseOrder, CreatePurchaseOrderDTO> for InMemoryPurchaseOrderRepository {
    async fn create(&self, data: &CreatePurchaseOrderDTO) -> Result<PurchaseOrder, Error> {
        self.db.ensure_online()?;
        let purchase_order = data.with_id(self.db.purchase_orders.next_id());
        self.db.purchase_orders.insert(
            purchase_order.id,
            purchase_order.clone(),
            |p| same_key(&p.order_number, &data.order_number),
            || DuplicateKey::new("purchase_orders.order_number", &data.order_number),
        )?;
        Ok(purchase_order)
    }
}

#[async_trait]
impl Update<PurchaseOrder> for InMemoryPurchaseOrderRepository {
    async fn update(&self, purchase_order: &PurchaseOrder) -> Result<(), Error> {
        self.db.ensure_online()?;
        self.db.purchase_orders.replace(
            &purchase_order.id,
            purchase_order.clone(),
            |p| same_key(&p.order_number, &purchase_order.order_number),
            || DuplicateKey::new("purchase_orders.order_number", &purchase_order.order_number),
        )
    }
}

#[async_trait]
impl Delete<i32> for InMemoryPurchaseOrderRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        self.db.ensure_online()?;
        if self.db.purchase_orders.remove(id) {
            Ok(())
        } else {
            Err(Error::RowNotFound)
        }
    }
}
