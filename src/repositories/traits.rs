//! Common repository traits
//!
//! This module defines generic interfaces for database operations.
//! Every entity repository implements the subset it needs; the per-entity
//! `*Store` traits bundle them so that services can hold a trait object
//! (MySQL in production, in-memory in tests).

use async_trait::async_trait;

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the database)
/// * `CreateDTO` - DTO for creation (without ID, will be automatically generated)
#[async_trait]
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the database
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the database
    /// * `Err(sqlx::Error)` - Error during insertion (a duplicated natural key
    ///   surfaces as a unique violation)
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key (e.g. `i32`, `String`)
#[async_trait]
pub trait Read<Entity, Id> {
    /// Reads an entity from the database by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for reading every row of a table
#[async_trait]
pub trait ReadAll<Entity> {
    /// Reads all the entities, ordered by primary key.
    /// A failure on any row fails the whole call.
    async fn read_all(&self) -> Result<Vec<Entity>, sqlx::Error>;
}

/// Trait for checking whether a natural key is already taken
///
/// # Type Parameters
/// * `Key` - Type of the natural key (e.g. `cid`, `product_code`)
#[async_trait]
pub trait Exists<Key> {
    /// # Returns
    /// * `Ok(true)` - A row with that key exists
    /// * `Ok(false)` - No row with that key
    /// * `Err(sqlx::Error)` - The check could not be performed
    async fn exists(&self, key: &Key) -> Result<bool, sqlx::Error>;
}

/// Trait for updating existing entities
///
/// The entity is written as a whole: merging a partial update into the
/// current row is done by the service before calling this.
#[async_trait]
pub trait Update<Entity> {
    /// Overwrites every mutable column of the row identified by the entity's id.
    /// Rows affected are not checked: existence is verified by the caller.
    async fn update(&self, entity: &Entity) -> Result<(), sqlx::Error>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
#[async_trait]
pub trait Delete<Id> {
    /// Deletes an entity from the database
    ///
    /// # Returns
    /// * `Ok(())` - Deletion successful
    /// * `Err(sqlx::Error::RowNotFound)` - No row was deleted
    /// * `Err(sqlx::Error)` - Error during deletion
    async fn delete(&self, id: &Id) -> Result<(), sqlx::Error>;
}
