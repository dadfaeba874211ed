//! LocalityRepository - Repository per la gestione delle località
//!
//! La chiave primaria è il codice della località scelto dal client, quindi
//! la verifica di esistenza e la lettura usano la stessa colonna.

use super::memory::{DuplicateKey, MemoryDatabase};
use super::{Create, Delete, Exists, Read, ReadAll, Update};
use crate::dtos::{CreateLocalityDTO, LocalitySellersReportDTO};
use crate::entities::Locality;
use async_trait::async_trait;
use sqlx::{Error, MySqlPool};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[async_trait]
pub trait LocalityStore:
    ReadAll<Locality>
    + Read<Locality, String>
    + Exists<String>
    + Create<Locality, CreateLocalityDTO>
    + Update<Locality>
    + Delete<String>
    + Send
    + Sync
{
    /// Numero di venditori registrati nella località; `None` se la località non esiste
    async fn sellers_report(&self, id: &str) -> Result<Option<LocalitySellersReportDTO>, Error>;
}

// LOCALITY REPO
pub struct LocalityRepository {
    connection_pool: MySqlPool,
}

impl LocalityRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl ReadAll<Locality> for LocalityRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Locality>, Error> {
        debug!("Reading all localities");
        let localities = sqlx::query_as::<_, Locality>(
            "SELECT id, country_name, province_name, locality_name FROM localities ORDER BY id",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(localities)
    }
}

#[async_trait]
impl Read<Locality, String> for LocalityRepository {
    #[instrument(skip(self), fields(locality_id = %id))]
    async fn read(&self, id: &String) -> Result<Option<Locality>, Error> {
        debug!("Reading locality by id");
        let locality = sqlx::query_as::<_, Locality>(
            "SELECT id, country_name, province_name, locality_name FROM localities WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(locality)
    }
}

#[async_trait]
impl Exists<String> for LocalityRepository {
    #[instrument(skip(self), fields(locality_id = %id))]
    async fn exists(&self, id: &String) -> Result<bool, Error> {
        let row = sqlx::query("SELECT id FROM localities WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(row.is_some())
    }
}

#[async_trait]
impl Create<Locality, CreateLocalityDTO> for LocalityRepository {
    #[instrument(skip(self, data), fields(locality_id = %data.id))]
    async fn create(&self, data: &CreateLocalityDTO) -> Result<Locality, Error> {
        debug!("Creating new locality");
        sqlx::query(
            r#"
            INSERT INTO localities (id, country_name, province_name, locality_name)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&data.id)
        .bind(&data.country_name)
        .bind(&data.province_name)
        .bind(&data.locality_name)
        .execute(&self.connection_pool)
        .await?;

        info!("Locality created");
        Ok(Locality::from(data.clone()))
    }
}

#[async_trait]
impl Update<Locality> for LocalityRepository {
    #[instrument(skip(self, locality), fields(locality_id = %locality.id))]
    async fn update(&self, locality: &Locality) -> Result<(), Error> {
        debug!("Updating locality");
        sqlx::query(
            r#"
            UPDATE localities
            SET country_name = ?, province_name = ?, locality_name = ?
            WHERE id = ?
            "#,
        )
        .bind(&locality.country_name)
        .bind(&locality.province_name)
        .bind(&locality.locality_name)
        .bind(&locality.id)
        .execute(&self.connection_pool)
        .await?;

        info!("Locality updated successfully");
        Ok(())
    }
}

#[async_trait]
impl Delete<String> for LocalityRepository {
    #[instrument(skip(self), fields(locality_id = %id))]
    async fn delete(&self, id: &String) -> Result<(), Error> {
        debug!("Deleting locality");
        let result = sqlx::query("DELETE FROM localities WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Locality deleted successfully");
        Ok(())
    }
}

#[async_trait]
impl LocalityStore for LocalityRepository {
    #[instrument(skip(self), fields(locality_id = %id))]
    async fn sellers_report(&self, id: &str) -> Result<Option<LocalitySellersReportDTO>, Error> {
        debug!("Counting sellers for locality");
        // LEFT JOIN: una località senza venditori compare comunque con conteggio 0
        let report = sqlx::query_as::<_, LocalitySellersReportDTO>(
            r#"
            SELECT
                l.id AS locality_id,
                l.locality_name,
                COUNT(s.id) AS sellers_count
            FROM localities l
            LEFT JOIN sellers s ON s.locality_id = l.id
            WHERE l.id = ?
            GROUP BY l.id, l.locality_name
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(report)
    }
}

/// Versione in memoria del repository delle località
pub struct InMemoryLocalityRepository {
    db: Arc<MemoryDatabase>,
}

impl InMemoryLocalityRepository {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadAll<Locality> for InMemoryLocalityRepository {
    async fn read_all(&self) -> Result<Vec<Locality>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.localities.all())
    }
}

#[async_trait]
impl Read<Locality, String> for InMemoryLocalityRepository {
    async fn read(&self, id: &String) -> Result<Option<Locality>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.localities.get(id))
    }
}

#[async_trait]
impl Exists<String> for InMemoryLocalityRepository {
    async fn exists(&self, id: &String) -> Result<bool, Error> {
        self.db.ensure_online()?;
        Ok(self.db.localities.get(id).is_some())
    }
}

#[async_trait]
impl Create<Locality, CreateLocalityDTO> for InMemoryLocalityRepository {
    async fn create(&self, data: &CreateLocalityDTO) -> Result<Locality, Error> {
        self.db.ensure_online()?;
        let locality = Locality::from(data.clone());
        self.db.localities.insert(
            locality.id.clone(),
            locality.clone(),
            |_| false,
            || DuplicateKey::new("PRIMARY", &data.id),
        )?;
        Ok(locality)
    }
}

#[async_trait]
impl Update<Locality> for InMemoryLocalityRepository {
    async fn update(&self, locality: &Locality) -> Result<(), Error> {
        self.db.ensure_online()?;
        self.db.localities.replace(
            &locality.id,
            locality.clone(),
            |_| false,
            || DuplicateKey::new("PRIMARY", &locality.id),
        )
    }
}

#[async_trait]
impl Delete<String> for InMemoryLocalityRepository {
    async fn delete(&self, id: &String) -> Result<(), Error> {
        self.db.ensure_online()?;
        if self.db.localities.remove(id) {
            Ok(())
        } else {
            Err(Error::RowNotFound)
        }
    }
}

#[async_trait]
impl LocalityStore for InMemoryLocalityRepository {
    async fn sellers_report(&self, id: &str) -> Result<Option<LocalitySellersReportDTO>, Error> {
        self.db.ensure_online()?;
        Ok(self
            .db
            .localities
            .get(&id.to_string())
            .map(|locality| self.db.locality_sellers_row(&locality)))
    }
}

#[cfg(test)]
mod mysql_tests {
    use super::*;

    fn new_locality(id: &str) -> CreateLocalityDTO {
        CreateLocalityDTO {
            id: id.to_string(),
            country_name: "Argentina".to_string(),
            province_name: "Buenos Aires".to_string(),
            locality_name: "Lujan".to_string(),
        }
    }

    /// Insert, select, update e delete sulle query MySQL
    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a MySQL database (DATABASE_URL)"]
    async fn test_locality_round_trip(pool: MySqlPool) -> sqlx::Result<()> {
        let repo = LocalityRepository::new(pool);

        let created = repo.create(&new_locality("6700")).await?;
        assert_eq!(repo.read(&created.id).await?, Some(created.clone()));
        assert!(repo.exists(&"6700".to_string()).await?);

        let mut changed = created.clone();
        changed.locality_name = "Lujan de Cuyo".to_string();
        changed.province_name = "Mendoza".to_string();
        repo.update(&changed).await?;
        assert_eq!(repo.read(&created.id).await?, Some(changed.clone()));
        assert_eq!(repo.read_all().await?, vec![changed]);

        repo.delete(&created.id).await?;
        assert!(repo.read(&created.id).await?.is_none());
        assert!(matches!(repo.delete(&created.id).await, Err(Error::RowNotFound)));

        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a MySQL database (DATABASE_URL)"]
    async fn test_duplicate_locality_is_rejected(pool: MySqlPool) -> sqlx::Result<()> {
        let repo = LocalityRepository::new(pool);
        repo.create(&new_locality("6700")).await?;

        let err = repo.create(&new_locality("6700")).await.unwrap_err();

        assert!(matches!(err, Error::Database(ref db) if db.is_unique_violation()));
        assert_eq!(repo.read_all().await?.len(), 1);

        Ok(())
    }
}
