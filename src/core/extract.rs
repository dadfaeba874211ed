//! Custom Axum extractors
//!
//! Rifiutano la richiesta prima che arrivi al servizio: id non valido nel path -> 400,
//! corpo JSON malformato, incompleto o che non supera la validazione -> 422.

use super::error::AppError;
use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use tracing::warn;
use validator::Validate;

/// Parametro `{id}` del path, convertito nel tipo richiesto dall'handler
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                warn!("Rejected path parameter: {}", rejection.body_text());
                AppError::bad_request(rejection.body_text())
            })?;

        Ok(Self(id))
    }
}

/// Corpo JSON deserializzato e validato con le regole `validator` del DTO
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                warn!("Rejected request body: {}", rejection.body_text());
                AppError::unprocessable_entity(rejection.body_text())
            })?;

        body.validate().map_err(|errors| {
            warn!("Request body failed validation: {}", errors);
            AppError::from(errors)
        })?;

        Ok(Self(body))
    }
}
