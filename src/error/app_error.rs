use serde::Serialize;
use thiserror::Error;

use crate::error::DatabaseErrorConverter;

/// A single field-level validation failure.
///
/// Serialized inside the `errores` array of a 400 response, with `path`
/// holding the offending field name(s).
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ValidationFieldError {
    pub code: String,
    pub message: String,
    pub path: Vec<String>,
}

impl ValidationFieldError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: vec![field.into()],
        }
    }
}

/// Application-wide error type that represents all possible errors in the system.
///
/// Variants carry enough structure for the response layer to build the two
/// wire shapes the API exposes: a `{"message": ...}` envelope for most
/// failures and an `{"ok": false, "errores": [...]}` envelope for input
/// validation.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Duplicate entry error for unique constraint violations
    #[error("Duplicate entry: {entity}.{field} = '{value}' already exists")]
    Duplicate {
        entity: String,
        field: String,
        value: String,
    },

    /// Input validation error with per-field details
    #[error("Validation failed ({} error(s))", errors.len())]
    Validation { errors: Vec<ValidationFieldError> },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Unauthorized access error with authentication message
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Forbidden access error with authorization message
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Convenience constructor for a single-field validation failure.
    pub fn validation(
        code: impl Into<String>,
        message: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        AppError::Validation {
            errors: vec![ValidationFieldError::new(code, message, field)],
        }
    }

    pub fn not_found(
        entity: impl Into<String>,
        field: impl Into<String>,
        value: impl ToString,
    ) -> Self {
        AppError::NotFound {
            entity: entity.into(),
            field: field.into(),
            value: value.to_string(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::Unauthorized {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl From<bb8::RunError<diesel_async::pooled_connection::PoolError>> for AppError {
    fn from(error: bb8::RunError<diesel_async::pooled_connection::PoolError>) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::from(error),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |e| ValidationFieldError {
                    code: e.code.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field)),
                    path: vec![field.to_string()],
                })
            })
            .collect();
        AppError::Validation { errors }
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(error: argon2::password_hash::Error) -> Self {
        AppError::Internal {
            source: anyhow::Error::msg(error.to_string()),
        }
    }
}

impl From<argon2::password_hash::phc::Error> for AppError {
    fn from(error: argon2::password_hash::phc::Error) -> Self {
        AppError::from(argon2::password_hash::Error::from(error))
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(email(message = "Invalid email"))]
        email: String,
    }

    #[test]
    fn test_validation_errors_conversion() {
        let probe = Probe {
            email: "not-an-email".to_string(),
        };
        let err: AppError = probe.validate().unwrap_err().into();

        match err {
            AppError::Validation { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].code, "email");
                assert_eq!(errors[0].message, "Invalid email");
                assert_eq!(errors[0].path, vec!["email".to_string()]);
            }
            other => panic!("Expected Validation error, got: {:?}", other),
        }
    }

    #[test]
    fn test_single_field_constructor() {
        let err = AppError::validation("required", "Password is required", "password");
        match err {
            AppError::Validation { errors } => {
                assert_eq!(errors[0].path, vec!["password".to_string()]);
            }
            other => panic!("Expected Validation error, got: {:?}", other),
        }
    }
}
