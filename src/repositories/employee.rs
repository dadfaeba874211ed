//! EmployeeRepository - Repository per la gestione dei dipendenti

use super::memory::{DuplicateKey, MemoryDatabase};
use super::{Create, Delete, Exists, Read, ReadAll, Update};
use crate::dtos::CreateEmployeeDTO;
use crate::entities::{Employee, same_key};
use async_trait::async_trait;
use sqlx::{Error, MySqlPool};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Operazioni richieste dal EmployeeService; la chiave naturale è `card_number_id`
pub trait EmployeeStore:
    ReadAll<Employee>
    + Read<Employee, i32>
    + Exists<String>
    + Create<Employee, CreateEmployeeDTO>
    + Update<Employee>
    + Delete<i32>
    + Send
    + Sync
{
}

impl<T> EmployeeStore for T where
    T: ReadAll<Employee>
        + Read<Employee, i32>
        + Exists<String>
        + Create<Employee, CreateEmployeeDTO>
        + Update<Employee>
        + Delete<i32>
        + Send
        + Sync
{
}

pub struct EmployeeRepository {
    connection_pool: MySqlPool,
}

impl EmployeeRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl ReadAll<Employee> for EmployeeRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Employee>, Error> {
        debug!("Reading all employees");
        let rows = sqlx::query_as::<_, Employee>(
            r#"
            SELECT
                id, card_number_id, first_name, last_name, warehouse_id
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} employees", rows.len());
        Ok(rows)
    }
}

#[async_trait]
impl Read<Employee, i32> for EmployeeRepository {
    #[instrument(skip(self), fields(employee_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Employee>, Error> {
        debug!("Reading employee by id");
        let row = sqlx::query_as::<_, Employee>(
            r#"
            SELECT
                id, card_number_id, first_name, last_name, warehouse_id
            FROM employees
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
impl Exists<String> for EmployeeRepository {
    #[instrument(skip(self), fields(card_number_id = %card_number_id))]
    async fn exists(&self, card_number_id: &String) -> Result<bool, Error> {
        let row = sqlx::query("SELECT card_number_id FROM employees WHERE card_number_id = ?")
            .bind(card_number_id.as_str())
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(row.is_some())
    }
}

#[async_trait]
impl Create<Employee, CreateEmployeeDTO> for EmployeeRepository {
    #[instrument(skip(self, data), fields(card_number_id = %data.card_number_id))]
    async fn create(&self, data: &CreateEmployeeDTO) -> Result<Employee, Error> {
        debug!("Creating new employee");
        let result = sqlx::query(
            r#"
            INSERT INTO employees (
                card_number_id, first_name, last_name, warehouse_id
            )
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&data.card_number_id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.warehouse_id)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        info!("Employee created with id {}", new_id);
        Ok(data.with_id(new_id))
    }
}

#[async_trait]
impl Update<Employee> for EmployeeRepository {
    #[instrument(skip(self, employee), fields(employee_id = %employee.id))]
    async fn update(&self, employee: &Employee) -> Result<(), Error> {
        debug!("Updating employee");
        sqlx::query(
            r#"
            UPDATE employees
            SET card_number_id = ?, first_name = ?, last_name = ?, warehouse_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&employee.card_number_id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.warehouse_id)
        .bind(employee.id)
        .execute(&self.connection_pool)
        .await?;

        info!("Employee updated successfully");
        Ok(())
    }
}

#[async_trait]
impl Delete<i32> for EmployeeRepository {
    #[instrument(skip(self), fields(employee_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        debug!("Deleting employee");
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(*id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        info!("Employee deleted successfully");
        Ok(())
    }
}

/// Versione in memoria del repository dei dipendenti
pub struct InMemoryEmployeeRepository {
    db: Arc<MemoryDatabase>,
}

impl InMemoryEmployeeRepository {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadAll<Employee> for InMemoryEmployeeRepository {
    async fn read_all(&self) -> Result<Vec<Employee>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.employees.all())
    }
}

#[async_trait]
impl Read<Employee, i32> for InMemoryEmployeeRepository {
    async fn read(&self, id: &i32) -> Result<Option<Employee>, Error> {
        self.db.ensure_online()?;
        Ok(self.db.employees.get(id))
    }
}

#[async_trait]
impl Exists<String> for InMemoryEmployeeRepository {
    async fn exists(&self, card_number_id: &String) -> Result<bool, Error> {
        self.db.ensure_online()?;
        Ok(self.db.employees.any(|e| same_key(&e.card_number_id, card_number_id)))
    }
}

#[async_trait]
impl Create<Employee, CreateEmployeeDTO> for InMemoryEmployeeRepository {
    async fn create(&self, data: &CreateEmployeeDTO) -> Result<Employee, Error> {
        self.db.ensure_online()?;
        let employee = data.with_id(self.db.employees.next_id());
        self.db.employees.insert(
            employee.id,
            employee.clone(),
            |e| same_key(&e.card_number_id, &data.card_number_id),
            || DuplicateKey::new("employees.card_number_id", &data.card_number_id),
        )?;
        Ok(employee)
    }
}

#[async_trait]
impl Update<Employee> for InMemoryEmployeeRepository {
    async fn update(&self, employee: &Employee) -> Result<(), Error> {
        self.db.ensure_online()?;
        self.db.employees.replace(
            &employee.id,
            employee.clone(),
            |e| same_key(&e.card_number_id, &employee.card_number_id),
            || DuplicateKey::new("employees.card_number_id", &employee.card_number_id),
        )
    }
}

#[async_trait]
impl Delete<i32> for InMemoryEmployeeRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        self.db.ensure_online()?;
        if self.db.employees.remove(id) {
            Ok(())
        } else {
            Err(Error::RowNotFound)
        }
    }
}

#[cfg(test)]
mod mysql_tests {
    use super::*;

    fn new_employee(card_number_id: &str) -> CreateEmployeeDTO {
        CreateEmployeeDTO {
            card_number_id: card_number_id.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            warehouse_id: 1,
        }
    }

    /// Insert, select, update e delete sulle query MySQL
    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a MySQL database (DATABASE_URL)"]
    async fn test_employee_round_trip(pool: MySqlPool) -> sqlx::Result<()> {
        let repo = EmployeeRepository::new(pool);

        let created = repo.create(&new_employee("E-1")).await?;
        assert_eq!(repo.read(&created.id).await?, Some(created.clone()));
        assert!(repo.exists(&"E-1".to_string()).await?);

        let mut changed = created.clone();
        changed.card_number_id = "E-2".to_string();
        changed.last_name = "Byron".to_string();
        changed.warehouse_id = 2;
        repo.update(&changed).await?;
        assert_eq!(repo.read(&created.id).await?, Some(changed.clone()));
        assert_eq!(repo.read_all().await?, vec![changed]);
        assert!(!repo.exists(&"E-1".to_string()).await?);

        repo.delete(&created.id).await?;
        assert!(repo.read(&created.id).await?.is_none());
        assert!(matches!(repo.delete(&created.id).await, Err(Error::RowNotFound)));

        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a MySQL database (DATABASE_URL)"]
    async fn test_duplicate_employee_is_rejected(pool: MySqlPool) -> sqlx::Result<()> {
        let repo = EmployeeRepository::new(pool);
        repo.create(&new_employee("E-1")).await?;

        let err = repo.create(&new_employee("E-1")).await.unwrap_err();

        assert!(matches!(err, Error::Database(ref db) if db.is_unique_violation()));
        assert_eq!(repo.read_all().await?.len(), 1);

        Ok(())
    }
}
