use axum::Json;
use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// JSON extractor that runs `validator` rules after deserialization.
///
/// Deserialization failures for a missing required field are reported as a
/// field-level validation error so clients see the offending field in the
/// `path` of the 400 payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            if let Some(field) = extract_missing_field(&message) {
                AppError::validation(
                    "invalid_type",
                    format!("{} is required", field),
                    field,
                )
            } else {
                AppError::BadRequest { message }
            }
        }
        other => AppError::BadRequest {
            message: other.body_text(),
        },
    }
}

/// Pulls the field name out of serde's "missing field `name`" message.
fn extract_missing_field(message: &str) -> Option<String> {
    let marker = "missing field `";
    let start = message.find(marker)? + marker.len();
    let end = message[start..].find('`')?;
    Some(message[start..start + end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestPayload {
        #[validate(length(min = 3, max = 20, message = "Name must be between 3 and 20 characters"))]
        name: String,
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload() {
        let request = json_request(r#"{"name":"Ana García","email":"ana@example.com"}"#);

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_ok());
        let ValidatedJson(payload) = result.unwrap();
        assert_eq!(payload.name, "Ana García");
        assert_eq!(payload.email, "ana@example.com");
    }

    #[tokio::test]
    async fn test_validation_error_invalid_email() {
        let request = json_request(r#"{"name":"Ana García","email":"not-an-email"}"#);

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::Validation { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].path, vec!["email".to_string()]);
                assert!(errors[0].message.contains("Invalid email format"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_field_reports_path() {
        let request = json_request(r#"{"name":"Ana García"}"#);

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::Validation { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].path, vec!["email".to_string()]);
                assert!(errors[0].message.contains("required"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = json_request(r#"{"name": "#);

        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::BadRequest { message } => assert!(!message.is_empty()),
            other => panic!("Expected BadRequest error, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_missing_field() {
        let msg = "Failed to deserialize the JSON body into the target type: missing field `password` at line 1 column 30";
        assert_eq!(extract_missing_field(msg), Some("password".to_string()));
        assert_eq!(extract_missing_field("no marker here"), None);
    }
}
