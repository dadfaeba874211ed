//! ProductBatchRepository - Repository per la gestione dei lotti di prodotto

use super::memory::{DuplicateKey, MemoryDatabase};
use super::{Create, Delete, Exists, Read, ReadAll, Update};
use crate::dtos::{CreateProductBatchDTO, SectionProductsReportDTO};
use crate::entities::ProductBatch;
use async_trait::async_trait;
use sqlx::{Error, MySqlPool};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Operazioni richieste dal ProductBatchService; la chiave naturale è `batch_number`
#[async_trait]
pub trait ProductBatchStore:
    ReadAll<ProductBatch>
    + Read<ProductBatch, i32>
    + Exists<i32>
    + Create<ProductBatch, CreateProductBatchDTO>
    + Update<ProductBatch>
    + Delete<i32>
    + Send
    + Sync
{
    /// Somma delle quantità correnti per ogni sezione che contiene almeno un lotto
    async fn section_products_report(&self) -> Result<Vec<SectionProductsReportDTO>, Error>;

    /// Come `section_products_report` ma per una sola sezione;
    /// `None` se la sezione non esiste o non contiene lotti
    async fn section_products_report_by_section(
        &self,
        section_id: &i32,
    ) -> Result<Option<SectionProductsReportDTO>, Error>;
}

pub struct ProductBatchRepository {
    connection_pool: MySqlPool,
}

impl ProductBatchRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl ReadAll<ProductBatch> for ProductBatchRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<ProductBatch>, Error> {
        debug!("Reading all product batches");
        let rows = sqlx::query_as::<_, ProductBatch>(
            r#"
            SELECT
                id, batch_number, current_quantity, current_temperature, due_date,
                initial_quantity, manufacturing_date, manufacturing_hour,
                minimum_temperature, product_id, section_id
            FROM product_batches
            ORDER BY id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} product batches", rows.len());
        Ok(rows)
    }
}

#[async_trait]
impl Read<ProductBatch, i32> for ProductBatchRepository {
    #[instrument(skip(self), fields(product_batch_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<ProductBatch>, Error> {
        debug!("Reading product batch by id");
        let row = sqlx::query_as::<_, ProductBatch>(
            r#"
            SELECT
                id, batch_number, current_quantity, current_temperature, due_date,
                initial_quantity, manufacturing_date, manufacturing_hour,
                minimum_temperature, product_id, section_id
            FROM product_batches
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
impl Exists<i32> for ProductBatchRepository {
    #[instrument(skip(self), fields(batch_number = %batch_number))]
    async fn exists(&self, batch_number: &i32) -> Result<bool, Error> {
        let row = sqlx::query("SELECT batch_number FROM product_batches WHERE batch_number = ?")
            .bind(*batch_number)
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(row.is_some())
    }
}

#[async_trait]
impl Create<ProductBatch, CreateProductBatchDTO> for ProductBatchRepository {
    #[instrument(skip(self, data), fields(batch_number = %data.batch_number))]
    async fn create(&self, data: &CreateProductBatchDTO) -> Result<ProductBatch, Error> {
        debug!("Creating new product batch");
        let result = sqlx::query(
            r#"
            INSERT INTO product_batches (
                batch_number, current_quantity, current_temperature, due_date,
                initial_quantity, manufacturing_date, manufacturing_hour,
                minimum_temperature, product_id, section_id
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(data.batch_number)
        .bind(data.current_quantity)
        .bind(data.current_temperature)
        .bind(data.due_date)
        .bind(data.initial_quantity)
        .bind(data.manufacturing_date)
        .bind(data.manufacturing_hour)
        .bind(data.minimum_temperature)
        .bind(data.product_id)
        .bind(data.section_id)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        info!("Product batch created with id {}", new_id);
        Ok(data.with_id(new_id))
    }
}

#[async_trait]
impl Update<ProductBatch> for ProductBatchRepository {
    #[instrument(skip(self, product_batch), fields(product_batch_id = %product_batch.id))]
    async fn update(&self, product_batch: &ProductBatch) -> Result<(), Error> {
        debug!("Updating product batch");
        sqlx::query(
            r#"
            UPDATE product_batches
            SET batch_number = ?, current_quantity = ?, current_temperature = ?,
                due_date = ?, initial_quantity = ?, manufacturing_date = ?,
                manufacturing_hour = ?, minimum_temperature = ?, product_id = ?,
                section_id = ?
            WHERE id = ?
            "#,
        )
        .bind(product_batch.batch_number)
        .bind(product_batch.current_quantity)
        .bind(product_batch.current_temperature)
        .bind(product_batch.due_date)
        .bind(product_batch.initial_quantity)
        .bind(product_batch.manufacturing_date)
        .bind(product_batch.manufacturing_hour)
        .bind(product_batch.minimum_temperature)
        .bind(product_batch.product_id)
        .bind(product_batch.section_id)
        .bind(product_batch.id)
        .execute(&self.connection_pool)
        .await?;

        info!("Product batch updated successfully");
        Ok(())
    }
}

#[async_trait]
impl Delete<i32> for ProductBatchRepository {
    #[instrument(skip(self), fields(product_batch_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        debug!("Deleting product batch");
        let result = sqlx::query("DELETE FROM product_batches WHERE id = ?")
            .bind(*id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Product batch deleted successfully");
        Ok(())
    }
}

#[async_trait]
impl ProductBatchStore for ProductBatchRepository {
    #[instrument(skip(self))]
    async fn section_products_report(&self) -> Result<Vec<SectionProductsReportDTO>, Error> {
        debug!("Aggregating product batches by section");
        // SUM su INT restituisce DECIMAL in MySQL: il CAST lo riporta a BIGINT
        let rows = sqlx::query_as::<_, SectionProductsReportDTO>(
            r#"
            SELECT
                s.id AS section_id,
                s.section_number,
                CAST(SUM(pb.current_quantity) AS SIGNED) AS products_count
            FROM sections s
            INNER JOIN product_batches pb ON pb.section_id = s.id
            GROUP BY s.id, s.section_number
            ORDER BY s.id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Report covers {} sections", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self), fields(section_id = %section_id))]
    async fn section_products_report_by_section(
        &self,
        section_id: &i32,
    ) -> Result<Option<SectionProductsReportDTO>, Error> {
        debug!("Aggregating product batches for section");
        let row = sqlx::query_as::<_, SectionProductsReportDTO>(
            r#"
            SELECT
                s.id AS section_id,
                s.section_number,
                CAST(SUM(pb.current_quantity) AS SIGNED) AS products_count
            FROM sections s
            INNER JOIN product_batches pb ON pb.section_id = s.id
            WHERE s.id = ?
            GROUP BY s.id, s.section_number
            "#,
        )
        .bind(*section_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(row)
    }
}

/// Versione in memoria del repository dei lotti di prodotto
pub struct InMemoryProductBatchRepository {
    db: Arc<MemoryDatabase>,
}

impl InMemoryProductBatchRepository {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadAll<ProductBatch> for InMemoryProductBatchRepository {
    async fn read_all(&self) -> Result<Vec<ProductBatch>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.product_batches.all())
    }
}

#[async_trait]
impl Read<ProductBatch, i32> for InMemoryProductBatchRepository {
    async fn read(&self, id: &i32) -> Result<Option<ProductBatch>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.product_batches.get(id))
    }
}

#[async_trait]
impl Exists<i32> for InMemoryProductBatchRepository {
    async fn exists(&self, batch_number: &i32) -> Result<bool, Error> {
        self.db.ensure_online()?;
        Ok(self.db.product_batches.any(|p| p.batch_number == *batch_number))
    }
}

#[async_trait]
impl Create<ProductBatch, CreateProductBatchDTO> for InMemoryProductBatchRepository {
    async fn create(&self, data: &CreateProductBatchDTO) -> Result<ProductBatch, Error> {
        self.db.ensure_online()?;
        let product_batch = data.with_id(self.db.product_batches.next_id());
        self.db.product_batches.insert(
            product_batch.id,
            product_batch.clone(),
            |p| p.batch_number == data.batch_number,
            || DuplicateKey::new("product_batches.batch_number", data.batch_number),
        )?;
        Ok(product_batch)
    }
}

#[async_trait]
impl Update<ProductBatch> for InMemoryProductBatchRepository {
    async fn update(&self, product_batch: &ProductBatch) -> Result<(), Error> {
        self.db.ensure_online()?;
        self.db.product_batches.replace(
            &product_batch.id,
            product_batch.clone(),
            |p| p.batch_number == product_batch.batch_number,
            || DuplicateKey::new("product_batches.batch_number", product_batch.batch_number),
        )
    }
}

#[async_trait]
impl Delete<i32> for InMemoryProductBatchRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        self.db.ensure_online()?;
        if self.db.product_batches.remove(id) {
            Ok(())
        } else {
            Err(Error::RowNotFound)
        }
    }
}

#[async_trait]
impl ProductBatchStore for InMemoryProductBatchRepository {
    async fn section_products_report(&self) -> Result<Vec<SectionProductsReportDTO>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.section_products_report())
    }

    async fn section_products_report_by_section(
        &self,
        section_id: &i32,
    ) -> Result<Option<SectionProductsReportDTO>, Error> {
        self.db.ensure_online()?;
        Ok(self
            .db
            .sections
            .get(section_id)
            .and_then(|section| self.db.section_products_row(&section)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Section;
    use chrono::NaiveDate;

    fn section(id: i32, section_number: i32) -> Section {
        Section {
            id,
            section_number,
            current_temperature: 2.0,
            minimum_temperature: -5.0,
            current_capacity: 10,
            minimum_capacity: 5,
            maximum_capacity: 100,
            warehouse_id: 1,
            product_type_id: 1,
        }
    }

    fn batch(batch_number: i32, section_id: i32, quantity: i32) -> CreateProductBatchDTO {
        CreateProductBatchDTO {
            batch_number,
            current_quantity: quantity,
            current_temperature: 1.5,
            due_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            initial_quantity: quantity,
            manufacturing_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            manufacturing_hour: 9,
            minimum_temperature: -3.0,
            product_id: 1,
            section_id,
        }
    }

    fn seeded() -> InMemoryProductBatchRepository {
        let db = Arc::new(MemoryDatabase::new());
        for s in [section(1, 10), section(2, 20), section(3, 30)] {
            db.sections
                .insert(s.id, s, |_| false, || DuplicateKey::new("PRIMARY", 0))
                .unwrap();
        }
        InMemoryProductBatchRepository::new(db)
    }

    #[tokio::test]
    async fn test_report_sums_quantities_and_skips_empty_sections() {
        let repo = seeded();
        repo.create(&batch(111, 1, 20)).await.unwrap();
        repo.create(&batch(112, 1, 30)).await.unwrap();
        repo.create(&batch(211, 2, 15)).await.unwrap();

        let report = repo.section_products_report().await.unwrap();

        assert_eq!(
            report,
            vec![
                SectionProductsReportDTO { section_id: 1, section_number: 10, products_count: 50 },
                SectionProductsReportDTO { section_id: 2, section_number: 20, products_count: 15 },
            ]
        );
    }

    #[tokio::test]
    async fn test_report_by_section_without_batches_is_none() {
        let repo = seeded();
        repo.create(&batch(111, 1, 20)).await.unwrap();

        assert!(repo.section_products_report_by_section(&3).await.unwrap().is_none());
        assert!(repo.section_products_report_by_section(&99).await.unwrap().is_none());
        assert_eq!(
            repo.section_products_report_by_section(&1).await.unwrap().map(|r| r.products_count),
            Some(20)
        );
    }
}
