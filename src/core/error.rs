//! Errori HTTP - Conversione degli errori applicativi nella risposta JSON
//!
//! Il corpo di ogni errore è `{"code": "<stato>", "message": "..."}` dove `code`
//! è il nome canonico dello stato HTTP in snake_case (`not_found`, `conflict`, ...).

use crate::services::ServiceError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
struct ErrorResponse {
    code: String,
    message: String,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Nome canonico dello stato in snake_case, es. "Not Found" -> "not_found"
    pub fn code(&self) -> String {
        self.status
            .canonical_reason()
            .unwrap_or("error")
            .to_lowercase()
            .replace(' ', "_")
    }

    // Common error constructors
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                error!("Database pool unavailable: {}", err);
                Self::service_unavailable("Database unavailable")
            }

            other => {
                error!("Database error: {}", other);
                Self::internal_server_error("Internal server error")
            }
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { .. } => Self::not_found(err.to_string()),
            ServiceError::Conflict { .. } => Self::conflict(err.to_string()),
            ServiceError::UnprocessableEntity(message) => Self::unprocessable_entity(message),
            ServiceError::Database(db_err) => Self::from(db_err),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::unprocessable_entity(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            code: self.code(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::DuplicateKey;

    #[test]
    fn test_service_errors_map_to_status() {
        let cases = [
            (ServiceError::not_found("seller", 1), StatusCode::NOT_FOUND),
            (ServiceError::conflict("seller", "cid", 1), StatusCode::CONFLICT),
            (
                ServiceError::unprocessable("current_capacity cannot exceed maximum_capacity"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ServiceError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ServiceError::Database(sqlx::Error::PoolClosed),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ServiceError::Database(DuplicateKey::new("sellers.cid", 1).into_sqlx()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn test_codes_are_snake_case_reasons() {
        assert_eq!(AppError::not_found("x").code(), "not_found");
        assert_eq!(AppError::bad_request("x").code(), "bad_request");
        assert_eq!(AppError::unprocessable_entity("x").code(), "unprocessable_entity");
        assert_eq!(AppError::internal_server_error("x").code(), "internal_server_error");
        assert_eq!(AppError::service_unavailable("x").code(), "service_unavailable");
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = AppError::from(ServiceError::Database(sqlx::Error::WorkerCrashed));
        assert_eq!(err.message(), "Internal server error");
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = AppError::from(ServiceError::not_found("seller", 999)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "code": "not_found",
                "message": "seller with id 999 not found"
            })
        );
    }
}
