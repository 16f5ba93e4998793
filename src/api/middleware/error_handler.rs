//! Error handler for converting AppError to HTTP responses.
//!
//! The API exposes two wire shapes: a `{"message": ...}` envelope for
//! not-found, conflict, auth and server errors, and an
//! `{"ok": false, "errores": [...]}` envelope for input validation
//! failures. Internal details are logged server-side and never leak into
//! the response body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::dto::{MessageResponse, ValidationErrorResponse};
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404
    /// - Duplicate → 409
    /// - Validation → 400 (errores envelope)
    /// - BadRequest → 400
    /// - Unauthorized → 401
    /// - Forbidden → 403
    /// - Database / Configuration / Internal → 500
    /// - ConnectionPool → 503
    fn into_response(self) -> Response {
        let status = status_code(&self);

        let message = match self {
            AppError::Validation { errors } => {
                return (status, Json(ValidationErrorResponse::new(errors))).into_response();
            }
            error @ AppError::NotFound { .. } => error.to_string(),
            error @ AppError::Duplicate { .. } => error.to_string(),
            AppError::BadRequest { message }
            | AppError::Unauthorized { message }
            | AppError::Forbidden { message } => message,
            AppError::ConnectionPool { source } => {
                tracing::error!(error = %source, "connection pool failure");
                "Database connection unavailable".to_string()
            }
            AppError::Database { operation, source } => {
                tracing::error!(operation = %operation, error = %source, "database failure");
                "An internal error occurred".to_string()
            }
            AppError::Configuration { key, source } => {
                tracing::error!(key = %key, error = %source, "configuration failure");
                "An internal error occurred".to_string()
            }
            AppError::Internal { source } => {
                tracing::error!(error = %source, "internal failure");
                "An internal error occurred".to_string()
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

/// Maps an AppError variant to its HTTP status code. The `IntoResponse`
/// impl above derives its status from this mapping.
pub fn status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
        AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_uses_message_envelope() {
        let error = AppError::not_found("user", "id", "123");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("user"));
        assert!(body.get("errores").is_none());
    }

    #[tokio::test]
    async fn test_duplicate_is_conflict() {
        let error = AppError::Duplicate {
            entity: "user".to_string(),
            field: "email".to_string(),
            value: "ana@example.com".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_validation_uses_errores_envelope() {
        let error = AppError::validation("invalid_type", "password is required", "password");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["ok"], serde_json::json!(false));
        assert_eq!(body["errores"][0]["path"], serde_json::json!(["password"]));
    }

    #[tokio::test]
    async fn test_internal_error_is_sanitized() {
        let error = AppError::Internal {
            source: anyhow::anyhow!("secret connection string leaked"),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn test_connection_pool_maps_to_503() {
        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("pool exhausted"),
        };
        assert_eq!(status_code(&error), StatusCode::SERVICE_UNAVAILABLE);

        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("pool exhausted"),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Database connection unavailable");
    }
}
