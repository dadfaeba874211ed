//! SectionRepository - Repository per la gestione delle sezioni

use super::memory::{DuplicateKey, MemoryDatabase};
use super::{Create, Delete, Exists, Read, ReadAll, Update};
use crate::dtos::CreateSectionDTO;
use crate::entities::Section;
use async_trait::async_trait;
use sqlx::{Error, MySqlPool};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Operazioni richieste dal SectionService; la chiave naturale è `section_number`
pub trait SectionStore:
    ReadAll<Section>
    + Read<Section, i32>
    + Exists<i32>
    + Create<Section, CreateSectionDTO>
    + Update<Section>
    + Delete<i32>
    + Send
    + Sync
{
}

impl<T> SectionStore for T where
    T: ReadAll<Section>
        + Read<Section, i32>
        + Exists<i32>
        + Create<Section, CreateSectionDTO>
        + Update<Section>
        + Delete<i32>
        + Send
        + Sync
{
}

pub struct SectionRepository {
    connection_pool: MySqlPool,
}

impl SectionRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl ReadAll<Section> for SectionRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Section>, Error> {
        debug!("Reading all sections");
        let rows = sqlx::query_as::<_, Section>(
            r#"
            SELECT
                id, section_number, current_temperature, minimum_temperature,
                current_capacity, minimum_capacity, maximum_capacity, warehouse_id,
                product_type_id
            FROM sections
            ORDER BY id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} sections", rows.len());
        Ok(rows)
    }
}

#[async_trait]
impl Read<Section, i32> for SectionRepository {
    #[instrument(skip(self), fields(section_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Section>, Error> {
        debug!("Reading section by id");
        let row = sqlx::query_as::<_, Section>(
            r#"
            SELECT
                id, section_number, current_temperature, minimum_temperature,
                current_capacity, minimum_capacity, maximum_capacity, warehouse_id,
                product_type_id
            FROM sections
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
impl Exists<i32> for SectionRepository {
    #[instrument(skip(self), fields(section_number = %section_number))]
    async fn exists(&self, section_number: &i32) -> Result<bool, Error> {
        let row = sqlx::query("SELECT section_number FROM sections WHERE section_number = ?")
            .bind(*section_number)
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(row.is_some())
    }
}

#[async_trait]
impl Create<Section, CreateSectionDTO> for SectionRepository {
    #[instrument(skip(self, data), fields(section_number = %data.section_number))]
    async fn create(&self, data: &CreateSectionDTO) -> Result<Section, Error> {
        debug!("Creating new section");
        let result = sqlx::query(
            r#"
            INSERT INTO sections (
                section_number, current_temperature, minimum_temperature,
                current_capacity, minimum_capacity, maximum_capacity, warehouse_id,
                product_type_id
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(data.section_number)
        .bind(data.current_temperature)
        .bind(data.minimum_temperature)
        .bind(data.current_capacity)
        .bind(data.minimum_capacity)
        .bind(data.maximum_capacity)
        .bind(data.warehouse_id)
        .bind(data.product_type_id)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        info!("Section created with id {}", new_id);
        Ok(data.with_id(new_id))
    }
}

#[async_trait]
impl Update<Section> for SectionRepository {
    #[instrument(skip(self, section), fields(section_id = %section.id))]
    async fn update(&self, section: &Section) -> Result<(), Error> {
        debug!("Updating section");
        sqlx::query(
            r#"
            UPDATE sections
            SET section_number = ?, current_temperature = ?,
                minimum_temperature = ?, current_capacity = ?,
                minimum_capacity = ?, maximum_capacity = ?, warehouse_id = ?,
                product_type_id = ?
            WHERE id = ?
            "#,
        )
        .bind(section.section_number)
        .bind(section.current_temperature)
        .bind(section.minimum_temperature)
        .bind(section.current_capacity)
        .bind(section.minimum_capacity)
        .bind(section.maximum_capacity)
        .bind(section.warehouse_id)
        .bind(section.product_type_id)
        .bind(section.id)
        .execute(&self.connection_pool)
        .await?;

        info!("Section updated successfully");
        Ok(())
    }
}

#[async_trait]
impl Delete<i32> for SectionRepository {
    #[instrument(skip(self), fields(section_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        debug!("Deleting section");
        let result = sqlx::query("DELETE FROM sections WHERE id = ?")
            .bind(*id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Section deleted successfully");
        Ok(())
    }
}

/// Versione in memoria del repository delle sezioni
pub struct InMemorySectionRepository {
    db: Arc<MemoryDatabase>,
}

impl InMemorySectionRepository {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadAll<Section> for InMemorySectionRepository {
    async fn read_all(&self) -> Result<Vec<Section>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.sections.all())
    }
}

#[async_trait]
impl Read<Section, i32> for InMemorySectionRepository {
    async fn read(&self, id: &i32) -> Result<Option<Section>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.sections.get(id))
    }
}

#[async_trait]
impl Exists<i32> for InMemorySectionRepository {
    async fn exists(&self, section_number: &i32) -> Result<bool, Error> {
        self.db.ensure_online()?;
        Ok(self.db.sections.any(|s| s.section_number == *section_number))
    }
}

#[async_trait]
impl Create<Section, CreateSectionDTO> for InMemorySectionRepository {
    async fn create(&self, data: &CreateSectionDTO) -> Result<Section, Error> {
        self.db.ensure_online()?;
        let section = data.with_id(self.db.sections.next_id());
        self.db.sections.insert(
            section.id,
            section.clone(),
            |s| s.section_number == data.section_number,
            || DuplicateKey::new("sections.section_number", data.section_number),
        )?;
        Ok(section)
    }
}

#[async_trait]
impl Update<Section> for InMemorySectionRepository {
    async fn update(&self, section: &Section) -> Result<(), Error> {
        self.db.ensure_online()?;
        self.db.sections.replace(
            &section.id,
            section.clone(),
            |s| s.section_number == section.section_number,
            || DuplicateKey::new("sections.section_number", section.section_number),
        )
    }
}

#[async_trait]
impl Delete<i32> for InMemorySectionRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        self.db.ensure_online()?;
        if self.db.sections.remove(id) {
            Ok(())
        } else {
            Err(Error::RowNotFound)
        }
    }
}
