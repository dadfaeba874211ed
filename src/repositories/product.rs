//! ProductRepository - Repository per la gestione dei prodotti

use super::memory::{DuplicateKey, MemoryDatabase};
use super::{Create, Delete, Exists, Read, ReadAll, Update};
use crate::dtos::CreateProductDTO;
use crate::entities::{Product, same_key};
use async_trait::async_trait;
use sqlx::{Error, MySqlPool};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Operazioni richieste dal ProductService; la chiave naturale è `product_code`
pub trait ProductStore:
    ReadAll<Product>
    + Read<Product, i32>
    + Exists<String>
    + Create<Product, CreateProductDTO>
    + Update<Product>
    + Delete<i32>
    + Send
    + Sync
{
}

impl<T> ProductStore for T where
    T: ReadAll<Product>
        + Read<Product, i32>
        + Exists<String>
        + Create<Product, CreateProductDTO>
        + Update<Product>
        + Delete<i32>
        + Send
        + Sync
{
}

pub struct ProductRepository {
    connection_pool: MySqlPool,
}

impl ProductRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl ReadAll<Product> for ProductRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Product>, Error> {
        debug!("Reading all products");
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id, product_code, description, width, height, length, net_weight,
                expiration_rate, recommended_freezing_temperature, freezing_rate,
                product_type_id, seller_id
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} products", rows.len());
        Ok(rows)
    }
}

#[async_trait]
impl Read<Product, i32> for ProductRepository {
    #[instrument(skip(self), fields(product_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Product>, Error> {
        debug!("Reading product by id");
        let row = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id, product_code, description, width, height, length, net_weight,
                expiration_rate, recommended_freezing_temperature, freezing_rate,
                product_type_id, seller_id
            FROM products
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
impl Exists<String> for ProductRepository {
    #[instrument(skip(self), fields(product_code = %product_code))]
    async fn exists(&self, product_code: &String) -> Result<bool, Error> {
        let row = sqlx::query("SELECT product_code FROM products WHERE product_code = ?")
            .bind(product_code.as_str())
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(row.is_some())
    }
}

#[async_trait]
impl Create<Product, CreateProductDTO> for ProductRepository {
    #[instrument(skip(self, data), fields(product_code = %data.product_code))]
    async fn create(&self, data: &CreateProductDTO) -> Result<Product, Error> {
        debug!("Creating new product");
        let result = sqlx::query(
            r#"
            INSERT INTO products (
                product_code, description, width, height, length, net_weight,
                expiration_rate, recommended_freezing_temperature, freezing_rate,
                product_type_id, seller_id
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.product_code)
        .bind(&data.description)
        .bind(data.width)
        .bind(data.height)
        .bind(data.length)
        .bind(data.net_weight)
        .bind(data.expiration_rate)
        .bind(data.recommended_freezing_temperature)
        .bind(data.freezing_rate)
        .bind(data.product_type_id)
        .bind(data.seller_id)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        info!("Product created with id {}", new_id);
        Ok(data.with_id(new_id))
    }
}

#[async_trait]
impl Update<Product> for ProductRepository {
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update(&self, product: &Product) -> Result<(), Error> {
        debug!("Updating product");
        sqlx::query(
            r#"
            UPDATE products
            SET product_code = ?, description = ?, width = ?, height = ?,
                length = ?, net_weight = ?, expiration_rate = ?,
                recommended_freezing_temperature = ?, freezing_rate = ?,
                product_type_id = ?, seller_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.product_code)
        .bind(&product.description)
        .bind(product.width)
        .bind(product.height)
        .bind(product.length)
        .bind(product.net_weight)
        .bind(product.expiration_rate)
        .bind(product.recommended_freezing_temperature)
        .bind(product.freezing_rate)
        .bind(product.product_type_id)
        .bind(product.seller_id)
        .bind(product.id)
        .execute(&self.connection_pool)
        .await?;

        info!("Product updated successfully");
        Ok(())
    }
}

#[async_trait]
impl Delete<i32> for ProductRepository {
    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        debug!("Deleting product");
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(*id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Product deleted successfully");
        Ok(())
    }
}

/// Versione in memoria del repository dei prodotti
pub struct InMemoryProductRepository {
    db: Arc<MemoryDatabase>,
}

impl InMemoryProductRepository {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadAll<Product> for InMemoryProductRepository {
    async fn read_all(&self) -> Result<Vec<Product>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.products.all())
    }
}

#[async_trait]
impl Read<Product, i32> for InMemoryProductRepository {
    async fn read(&self, id: &i32) -> Result<Option<Product>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.products.get(id))
    }
}

#[async_trait]
impl Exists<String> for InMemoryProductRepository {
    async fn exists(&self, product_code: &String) -> Result<bool, Error> {
        self.db.ensure_online()?;
        Ok(self.db.products.any(|p| same_key(&p.product_code, product_code)))
    }
}

#[async_trait]
impl Create<Product, CreateProductDTO> for InMemoryProductRepository {
    async fn create(&self, data: &CreateProductDTO) -> Result<Product, Error> {
        self.db.ensure_online()?;
        let product = data.with_id(self.db.products.next_id());
        self.db.products.insert(
            product.id,
            product.clone(),
            |p| same_key(&p.product_code, &data.product_code),
            || DuplicateKey::new("products.product_code", &data.product_code),
        )?;
        Ok(product)
    }
}

#[async_trait]
impl Update<Product> for InMemoryProductRepository {
    async fn update(&self, product: &Product) -> Result<(), Error> {
        self.db.ensure_online()?;
        self.db.products.replace(
            &product.id,
            product.clone(),
            |p| same_key(&p.product_code, &product.product_code),
            || DuplicateKey::new("products.product_code", &product.product_code),
        )
    }
}

#[async_trait]
impl Delete<i32> for InMemoryProductRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        self.db.ensure_online()?;
        if self.db.products.remove(id) {
            Ok(())
        } else {
            Err(Error::RowNotFound)
        }
    }
}
