//! Error response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ValidationFieldError;

/// Plain message wrapper used for not-found, conflict, auth and server
/// errors, and for success messages on delete/assign operations.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for request validation failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub ok: bool,
    pub errores: Vec<ValidationFieldError>,
}

impl ValidationErrorResponse {
    pub fn new(errores: Vec<ValidationFieldError>) -> Self {
        Self { ok: false, errores }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_shape() {
        let body = serde_json::to_value(MessageResponse::new("No encontrado")).unwrap();
        assert_eq!(body, serde_json::json!({"message": "No encontrado"}));
    }

    #[test]
    fn test_validation_response_shape() {
        let error = ValidationFieldError::new("invalid_type", "password is required", "password");
        let body = serde_json::to_value(ValidationErrorResponse::new(vec![error])).unwrap();
        assert_eq!(body["ok"], serde_json::json!(false));
        assert_eq!(body["errores"][0]["path"], serde_json::json!(["password"]));
    }
}
