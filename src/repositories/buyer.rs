//! BuyerRepository - Repository per la gestione degli acquirenti

use super::memory::{DuplicateKey, MemoryDatabase};
use super::{Create, Delete, Exists, Read, ReadAll, Update};
use crate::dtos::{CreateBuyerDTO, BuyerPurchaseOrdersReportDTO};
use crate::entities::{Buyer, same_key};
use async_trait::async_trait;
use sqlx::{Error, MySqlPool};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Operazioni richieste dal BuyerService; la chiave naturale è `card_number_id`
#[async_trait]
pub trait BuyerStore:
    ReadAll<Buyer>
    + Read<Buyer, i32>
    + Exists<String>
    + Create<Buyer, CreateBuyerDTO>
    + Update<Buyer>
    + Delete<i32>
    + Send
    + Sync
{
    /// Numero di ordini di acquisto per ogni acquirente (anche zero)
    async fn purchase_orders_report(&self) -> Result<Vec<BuyerPurchaseOrdersReportDTO>, Error>;

    /// Come `purchase_orders_report` ma per un solo acquirente; `None` se non esiste
    async fn purchase_orders_report_by_buyer(
        &self,
        buyer_id: &i32,
    ) -> Result<Option<BuyerPurchaseOrdersReportDTO>, Error>;
}

pub struct BuyerRepository {
    connection_pool: MySqlPool,
}

impl BuyerRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl ReadAll<Buyer> for BuyerRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Buyer>, Error> {
        debug!("Reading all buyers");
        let rows = sqlx::query_as::<_, Buyer>(
            r#"
            SELECT
                id, card_number_id, first_name, last_name
            FROM buyers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} buyers", rows.len());
        Ok(rows)
    }
}

#[async_trait]
impl Read<Buyer, i32> for BuyerRepository {
    #[instrument(skip(self), fields(buyer_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Buyer>, Error> {
        debug!("Reading buyer by id");
        let row = sqlx::query_as::<_, Buyer>(
            r#"
            SELECT
                id, card_number_id, first_name, last_name
            FROM buyers
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
impl Exists<String> for BuyerRepository {
    #[instrument(skip(self), fields(card_number_id = %card_number_id))]
    async fn exists(&self, card_number_id: &String) -> Result<bool, Error> {
        let row = sqlx::query("SELECT card_number_id FROM buyers WHERE card_number_id = ?")
            .bind(card_number_id.as_str())
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(row.is_some())
    }
}

#[async_trait]
impl Create<Buyer, CreateBuyerDTO> for BuyerRepository {
    #[instrument(skip(self, data), fields(card_number_id = %data.card_number_id))]
    async fn create(&self, data: &CreateBuyerDTO) -> Result<Buyer, Error> {
        debug!("Creating new buyer");
        let result = sqlx::query(
            r#"
            INSERT INTO buyers (
                card_number_id, first_name, last_name
            )
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&data.card_number_id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        info!("Buyer created with id {}", new_id);
        Ok(data.with_id(new_id))
    }
}

#[async_trait]
impl Update<Buyer> for BuyerRepository {
    #[instrument(skip(self, buyer), fields(buyer_id = %buyer.id))]
    async fn update(&self, buyer: &Buyer) -> Result<(), Error> {
        debug!("Updating buyer");
        sqlx::query(
            r#"
            UPDATE buyers
            SET card_number_id = ?, first_name = ?, last_name = ?
            WHERE id = ?
            "#,
        )
        .bind(&buyer.card_number_id)
        .bind(&buyer.first_name)
        .bind(&buyer.last_name)
        .bind(buyer.id)
        .execute(&self.connection_pool)
        .await?;

        info!("Buyer updated successfully");
        Ok(())
    }
}

#[async_trait]
impl Delete<i32> for BuyerRepository {
    #[instrument(skip(self), fields(buyer_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        debug!("Deleting buyer");
        let result = sqlx::query("DELETE FROM buyers WHERE id = ?")
            .bind(*id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Buyer deleted successfully");
        Ok(())
    }
}

#[async_trait]
impl BuyerStore for BuyerRepository {
    #[instrument(skip(self))]
    async fn purchase_orders_report(&self) -> Result<Vec<BuyerPurchaseOrdersReportDTO>, Error> {
        debug!("Counting purchase orders for every buyer");
        let rows = sqlx::query_as::<_, BuyerPurchaseOrdersReportDTO>(
            r#"
            SELECT
                b.id,
                b.card_number_id,
                b.first_name,
                b.last_name,
                COUNT(po.id) AS purchase_orders_count
            FROM buyers b
            LEFT JOIN purchase_orders po ON po.buyer_id = b.id
            GROUP BY b.id, b.card_number_id, b.first_name, b.last_name
            ORDER BY b.id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(rows)
    }

    #[instrument(skip(self), fields(buyer_id = %buyer_id))]
    async fn purchase_orders_report_by_buyer(
        &self,
        buyer_id: &i32,
    ) -> Result<Option<BuyerPurchaseOrdersReportDTO>, Error> {
        debug!("Counting purchase orders for buyer");
        let row = sqlx::query_as::<_, BuyerPurchaseOrdersReportDTO>(
            r#"
            SELECT
                b.id,
                b.card_number_id,
                b.first_name,
                b.last_name,
                COUNT(po.id) AS purchase_orders_count
            FROM buyers b
            LEFT JOIN purchase_orders po ON po.buyer_id = b.id
            WHERE b.id = ?
            GROUP BY b.id, b.card_number_id, b.first_name, b.last_name
            "#,
        )
        .bind(*buyer_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(row)
    }
}

/// Versione in memoria del repository degli acquirenti
pub struct InMemoryBuyerRepository {
    db: Arc<MemoryDatabase>,
}

impl InMemoryBuyerRepository {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadAll<Buyer> for InMemoryBuyerRepository {
    async fn read_all(&self) -> Result<Vec<Buyer>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.buyers.all())
    }
}

#[async_trait]
impl Read<Buyer, i32> for InMemoryBuyerRepository {
    async fn read(&self, id: &i32) -> Result<Option<Buyer>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.buyers.get(id))
    }
}

#[async_trait]
impl Exists<String> for InMemoryBuyerRepository {
    async fn exists(&self, card_number_id: &String) -> Result<bool, Error> {
        self.db.ensure_online()?;
        Ok(self.db.buyers.any(|b| same_key(&b.card_number_id, card_number_id)))
    }
}

#[async_trait]
impl Create<Buyer, CreateBuyerDTO> for InMemoryBuyerRepository {
    async fn create(&self, data: &CreateBuyerDTO) -> Result<Buyer, Error> {
        self.db.ensure_online()?;
        let buyer = data.with_id(self.db.buyers.next_id());
        self.db.buyers.insert(
            buyer.id,
            buyer.clone(),
            |b| same_key(&b.card_number_id, &data.card_number_id),
            || DuplicateKey::new("buyers.card_number_id", &data.card_number_id),
        )?;
        Ok(buyer)
    }
}

#[async_trait]
impl Update<Buyer> for InMemoryBuyerRepository {
    async fn update(&self, buyer: &Buyer) -> Result<(), Error> {
        self.db.ensure_online()?;
        self.db.buyers.replace(
            &buyer.id,
            buyer.clone(),
            |b| same_key(&b.card_number_id, &buyer.card_number_id),
            || DuplicateKey::new("buyers.card_number_id", &buyer.card_number_id),
        )
    }
}

#[async_trait]
impl Delete<i32> for InMemoryBuyerRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        self.db.ensure_online()?;
        if self.db.buyers.remove(id) {
            Ok(())
        } else {
            Err(Error::RowNotFound)
        }
    }
}

#[async_trait]
impl BuyerStore for InMemoryBuyerRepository {
    async fn purchase_orders_report(&self) -> Result<Vec<BuyerPurchaseOrdersReportDTO>, Error> {
        self.db.ensure_online()?;
        Ok(self
            .db
            .buyers
            .all()
            .iter()
            .map(|buyer| self.db.buyer_purchase_orders_row(buyer))
            .collect())
    }

    async fn purchase_orders_report_by_buyer(
        &self,
        buyer_id: &i32,
    ) -> Result<Option<BuyerPurchaseOrdersReportDTO>, Error> {
        self.db.ensure_online()?;
        Ok(self
            .db
            .buyers
            .get(buyer_id)
            .map(|buyer| self.db.buyer_purchase_orders_row(&buyer)))
    }
}
