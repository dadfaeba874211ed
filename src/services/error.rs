//! Errori del livello service
//!
//! Ogni errore porta con sé l'entità coinvolta e la chiave che l'ha causato,
//! così l'handler può rispondere con un messaggio preciso.

use std::fmt::Display;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} with {field} {value} already exists")]
    Conflict {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: impl Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn conflict(entity: &'static str, field: &'static str, value: impl Display) -> Self {
        Self::Conflict {
            entity,
            field,
            value: value.to_string(),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::UnprocessableEntity(message.into())
    }

    /// Traduce l'errore di una INSERT/UPDATE: la violazione di un vincolo UNIQUE
    /// (due richieste concorrenti che superano entrambe il controllo di esistenza)
    /// diventa un conflitto sulla chiave naturale.
    pub fn from_write(
        entity: &'static str,
        field: &'static str,
        value: impl Display,
        err: sqlx::Error,
    ) -> Self {
        match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                Self::conflict(entity, field, value)
            }
            other => {
                error!("Failed to write {}: {}", entity, other);
                Self::Database(other)
            }
        }
    }

    /// Traduce l'errore di una DELETE: zero righe cancellate significa che la riga non c'era
    pub fn from_delete(entity: &'static str, id: impl Display, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found(entity, id),
            other => {
                error!("Failed to delete {}: {}", entity, other);
                Self::Database(other)
            }
        }
    }
}
