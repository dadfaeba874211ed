//! WarehouseRepository - Repository per la gestione dei magazzini

use super::memory::{DuplicateKey, MemoryDatabase};
use super::{Create, Delete, Exists, Read, ReadAll, Update};
use crate::dtos::CreateWarehouseDTO;
use crate::entities::{Warehouse, same_key};
use async_trait::async_trait;
use sqlx::{Error, MySqlPool};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Operazioni richieste dal WarehouseService; la chiave naturale è `warehouse_code`
pub trait WarehouseStore:
    ReadAll<Warehouse>
    + Read<Warehouse, i32>
    + Exists<String>
    + Create<Warehouse, CreateWarehouseDTO>
    + Update<Warehouse>
    + Delete<i32>
    + Send
    + Sync
{
}

impl<T> WarehouseStore for T where
    T: ReadAll<Warehouse>
        + Read<Warehouse, i32>
        + Exists<String>
        + Create<Warehouse, CreateWarehouseDTO>
        + Update<Warehouse>
        + Delete<i32>
        + Send
        + Sync
{
}

pub struct WarehouseRepository {
    connection_pool: MySqlPool,
}

impl WarehouseRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl ReadAll<Warehouse> for WarehouseRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Warehouse>, Error> {
        debug!("Reading all warehouses");
        let rows = sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT
                id, warehouse_code, address, telephone, minimum_capacity,
                minimum_temperature, locality_id
            FROM warehouses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} warehouses", rows.len());
        Ok(rows)
    }
}

#[async_trait]
impl Read<Warehouse, i32> for WarehouseRepository {
    #[instrument(skip(self), fields(warehouse_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Warehouse>, Error> {
        debug!("Reading warehouse by id");
        let row = sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT
                id, warehouse_code, address, telephone, minimum_capacity,
                minimum_temperature, locality_id
            FROM warehouses
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
impl Exists<String> for WarehouseRepository {
    #[instrument(skip(self), fields(warehouse_code = %warehouse_code))]
    async fn exists(&self, warehouse_code: &String) -> Result<bool, Error> {
        let row = sqlx::query("SELECT warehouse_code FROM warehouses WHERE warehouse_code = ?")
            .bind(warehouse_code.as_str())
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(row.is_some())
    }
}

#[async_trait]
impl Create<Warehouse, CreateWarehouseDTO> for WarehouseRepository {
    #[instrument(skip(self, data), fields(warehouse_code = %data.warehouse_code))]
    async fn create(&self, data: &CreateWarehouseDTO) -> Result<Warehouse, Error> {
        debug!("Creating new warehouse");
        let result = sqlx::query(
            r#"
            INSERT INTO warehouses (
                warehouse_code, address, telephone, minimum_capacity,
                minimum_temperature, locality_id
            )
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.warehouse_code)
        .bind(&data.address)
        .bind(&data.telephone)
        .bind(data.minimum_capacity)
        .bind(data.minimum_temperature)
        .bind(&data.locality_id)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        info!("Warehouse created with id {}", new_id);
        Ok(data.with_id(new_id))
    }
}

#[async_trait]
impl Update<Warehouse> for WarehouseRepository {
    #[instrument(skip(self, warehouse), fields(warehouse_id = %warehouse.id))]
    async fn update(&self, warehouse: &Warehouse) -> Result<(), Error> {
        debug!("Updating warehouse");
        sqlx::query(
            r#"
            UPDATE warehouses
            SET warehouse_code = ?, address = ?, telephone = ?,
                minimum_capacity = ?, minimum_temperature = ?, locality_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&warehouse.warehouse_code)
        .bind(&warehouse.address)
        .bind(&warehouse.telephone)
        .bind(warehouse.minimum_capacity)
        .bind(warehouse.minimum_temperature)
        .bind(&warehouse.locality_id)
        .bind(warehouse.id)
        .execute(&self.connection_pool)
        .await?;

        info!("Warehouse updated successfully");
        Ok(())
    }
}

#[async_trait]
impl Delete<i32> for WarehouseRepository {
    #[instrument(skip(self), fields(warehouse_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        debug!("Deleting warehouse");
        let result = sqlx::query("DELETE FROM warehouses WHERE id = ?")
            .bind(*id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Warehouse deleted successfully");
        Ok(())
    }
}

/// Versione in memoria del repository dei magazzini
pub struct InMemoryWarehouseRepository {
    db: Arc<MemoryDatabase>,
}

impl InMemoryWarehouseRepository {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadAll<Warehouse> for InMemoryWarehouseRepository {
    async fn read_all(&self) -> Result<Vec<Warehouse>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.warehouses.all())
    }
}

#[async_trait]
impl Read<Warehouse, i32> for InMemoryWarehouseRepository {
    async fn read(&self, id: &i32) -> Result<Option<Warehouse>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.warehouses.get(id))
    }
}

#[async_trait]
impl Exists<String> for InMemoryWarehouseRepository {
    async fn exists(&self, warehouse_code: &String) -> Result<bool, Error> {
        self.db.ensure_online()?;
        Ok(self.db.warehouses.any(|w| same_key(&w.warehouse_code, warehouse_code)))
    }
}

#[async_trait]
impl Create<Warehouse, CreateWarehouseDTO> for InMemoryWarehouseRepository {
    async fn create(&self, data: &CreateWarehouseDTO) -> Result<Warehouse, Error> {
        self.db.ensure_online()?;
        let warehouse = data.with_id(self.db.warehouses.next_id());
        self.db.warehouses.insert(
            warehouse.id,
            warehouse.clone(),
            |w| same_key(&w.warehouse_code, &data.warehouse_code),
            || DuplicateKey::new("warehouses.warehouse_code", &data.warehouse_code),
        )?;
        Ok(warehouse)
    }
}

#[async_trait]
impl Update<Warehouse> for InMemoryWarehouseRepository {
    async fn update(&self, warehouse: &Warehouse) -> Result<(), Error> {
        self.db.ensure_online()?;
        self.db.warehouses.replace(
            &warehouse.id,
            warehouse.clone(),
            |w| same_key(&w.warehouse_code, &warehouse.warehouse_code),
            || DuplicateKey::new("warehouses.warehouse_code", &warehouse.warehouse_code),
        )
    }
}

#[async_trait]
impl Delete<i32> for InMemoryWarehouseRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        self.db.ensure_online()?;
        if self.db.warehouses.remove(id) {
            Ok(())
        } else {
            Err(Error::RowNotFound)
        }
    }
}

#[cfg(test)]
mod mysql_tests {
    use super::*;

    fn new_warehouse(warehouse_code: &str) -> CreateWarehouseDTO {
        CreateWarehouseDTO {
            warehouse_code: warehouse_code.to_string(),
            address: "Ruta 8 km 60".to_string(),
            telephone: "2323-440000".to_string(),
            minimum_capacity: 100,
            minimum_temperature: -18.5,
            locality_id: "6700".to_string(),
        }
    }

    /// Insert, select, update e delete sulle query MySQL
    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a MySQL database (DATABASE_URL)"]
    async fn test_warehouse_round_trip(pool: MySqlPool) -> sqlx::Result<()> {
        let repo = WarehouseRepository::new(pool);

        let created = repo.create(&new_warehouse("W-1")).await?;
        assert_eq!(repo.read(&created.id).await?, Some(created.clone()));
        assert!(repo.exists(&"W-1".to_string()).await?);

        let mut changed = created.clone();
        changed.warehouse_code = "W-2".to_string();
        changed.minimum_capacity = 250;
        changed.minimum_temperature = -20.0;
        repo.update(&changed).await?;
        assert_eq!(repo.read(&created.id).await?, Some(changed.clone()));
        assert_eq!(repo.read_all().await?, vec![changed]);
        assert!(!repo.exists(&"W-1".to_string()).await?);

        repo.delete(&created.id).await?;
        assert!(repo.read(&created.id).await?.is_none());
        assert!(matches!(repo.delete(&created.id).await, Err(Error::RowNotFound)));

        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a MySQL database (DATABASE_URL)"]
    async fn test_duplicate_warehouse_is_rejected(pool: MySqlPool) -> sqlx::Result<()> {
        let repo = WarehouseRepository::new(pool);
        repo.create(&new_warehouse("W-1")).await?;

        let err = repo.create(&new_warehouse("W-1")).await.unwrap_err();

        assert!(matches!(err, Error::Database(ref db) if db.is_unique_violation()));
        assert_eq!(repo.read_all().await?.len(), 1);

        Ok(())
    }
}
