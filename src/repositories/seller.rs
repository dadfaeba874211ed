//! SellerRepository - Repository per la gestione dei venditori

use super::memory::{DuplicateKey, MemoryDatabase};
use super::{Create, Delete, Exists, Read, ReadAll, Update};
use crate::dtos::CreateSellerDTO;
use crate::entities::Seller;
use async_trait::async_trait;
use sqlx::{Error, MySqlPool};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Operazioni richieste dal SellerService; la chiave naturale è `cid`
pub trait SellerStore:
    ReadAll<Seller>
    + Read<Seller, i32>
    + Exists<i32>
    + Create<Seller, CreateSellerDTO>
    + Update<Seller>
    + Delete<i32>
    + Send
    + Sync
{
}

impl<T> SellerStore for T where
    T: ReadAll<Seller>
        + Read<Seller, i32>
        + Exists<i32>
        + Create<Seller, CreateSellerDTO>
        + Update<Seller>
        + Delete<i32>
        + Send
        + Sync
{
}

// SELLER REPO
pub struct SellerRepository {
    connection_pool: MySqlPool,
}

impl SellerRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl ReadAll<Seller> for SellerRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Seller>, Error> {
        debug!("Reading all sellers");
        let sellers = sqlx::query_as::<_, Seller>(
            r#"
            SELECT id, cid, company_name, address, telephone, locality_id
            FROM sellers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} sellers", sellers.len());
        Ok(sellers)
    }
}

#[async_trait]
impl Read<Seller, i32> for SellerRepository {
    #[instrument(skip(self), fields(seller_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Seller>, Error> {
        debug!("Reading seller by id");
        let seller = sqlx::query_as::<_, Seller>(
            r#"
            SELECT id, cid, company_name, address, telephone, locality_id
            FROM sellers
            WHERE id = ?
            "#,
        )
        .bind(*id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(seller)
    }
}

#[async_trait]
impl Exists<i32> for SellerRepository {
    #[instrument(skip(self), fields(cid = %cid))]
    async fn exists(&self, cid: &i32) -> Result<bool, Error> {
        let row = sqlx::query("SELECT cid FROM sellers WHERE cid = ?")
            .bind(*cid)
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(row.is_some())
    }
}

#[async_trait]
impl Create<Seller, CreateSellerDTO> for SellerRepository {
    #[instrument(skip(self, data), fields(cid = %data.cid))]
    async fn create(&self, data: &CreateSellerDTO) -> Result<Seller, Error> {
        debug!("Creating new seller");
        let result = sqlx::query(
            r#"
            INSERT INTO sellers (cid, company_name, address, telephone, locality_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(data.cid)
        .bind(&data.company_name)
        .bind(&data.address)
        .bind(&data.telephone)
        .bind(&data.locality_id)
        .execute(&self.connection_pool)
        .await?;

        // Get the last inserted ID
        let new_id = result.last_insert_id() as i32;

        info!("Seller created with id {}", new_id);
        Ok(data.with_id(new_id))
    }
}

#[async_trait]
impl Update<Seller> for SellerRepository {
    #[instrument(skip(self, seller), fields(seller_id = %seller.id))]
    async fn update(&self, seller: &Seller) -> Result<(), Error> {
        debug!("Updating seller");
        sqlx::query(
            r#"
            UPDATE sellers
            SET cid = ?, company_name = ?, address = ?, telephone = ?, locality_id = ?
            WHERE id = ?
            "#,
        )
        .bind(seller.cid)
        .bind(&seller.company_name)
        .bind(&seller.address)
        .bind(&seller.telephone)
        .bind(&seller.locality_id)
        .bind(seller.id)
        .execute(&self.connection_pool)
        .await?;

        info!("Seller updated successfully");
        Ok(())
    }
}

#[async_trait]
impl Delete<i32> for SellerRepository {
    #[instrument(skip(self), fields(seller_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        debug!("Deleting seller");
        let result = sqlx::query("DELETE FROM sellers WHERE id = ?")
            .bind(*id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Seller deleted successfully");
        Ok(())
    }
}

/// Versione in memoria del repository dei venditori
pub struct InMemorySellerRepository {
    db: Arc<MemoryDatabase>,
}

impl InMemorySellerRepository {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadAll<Seller> for InMemorySellerRepository {
    async fn read_all(&self) -> Result<Vec<Seller>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.sellers.all())
    }
}

#[async_trait]
impl Read<Seller, i32> for InMemorySellerRepository {
    async fn read(&self, id: &i32) -> Result<Option<Seller>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.sellers.get(id))
    }
}

#[async_trait]
impl Exists<i32> for InMemorySellerRepository {
    async fn exists(&self, cid: &i32) -> Result<bool, Error> {
        self.db.ensure_online()?;
        Ok(self.db.sellers.any(|s| s.cid == *cid))
    }
}

#[async_trait]
impl Create<Seller, CreateSellerDTO> for InMemorySellerRepository {
    async fn create(&self, data: &CreateSellerDTO) -> Result<Seller, Error> {
        self.db.ensure_online()?;
        let seller = data.with_id(self.db.sellers.next_id());
        self.db.sellers.insert(
            seller.id,
            seller.clone(),
            |s| s.cid == data.cid,
            || DuplicateKey::new("sellers.cid", data.cid),
        )?;
        Ok(seller)
    }
}

#[async_trait]
impl Update<Seller> for InMemorySellerRepository {
    async fn update(&self, seller: &Seller) -> Result<(), Error> {
        self.db.ensure_online()?;
        self.db.sellers.replace(
            &seller.id,
            seller.clone(),
            |s| s.cid == seller.cid,
            || DuplicateKey::new("sellers.cid", seller.cid),
        )
    }
}

#[async_trait]
impl Delete<i32> for InMemorySellerRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        self.db.ensure_online()?;
        if self.db.sellers.remove(id) {
            Ok(())
        } else {
            Err(Error::RowNotFound)
        }
    }
}
