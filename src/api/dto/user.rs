//! User-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::role::RoleResponse;
use crate::api::dto::{double_option, format_timestamp};
use crate::models::{NewUser, Role, UpdateUser, User};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new user.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    #[schema(min_length = 2, max_length = 100)]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: String,
    #[validate(length(min = 6, max = 72, message = "Password must be between 6 and 72 characters"))]
    #[schema(format = "password", min_length = 6, max_length = 72)]
    pub password: String,
    pub image: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
}

impl CreateUserRequest {
    /// Converts the request DTO into a NewUser model for database insertion.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            name: self.name,
            email: self.email,
            password: self.password,
            image: self.image,
            bio: self.bio,
            is_premium: self.is_premium,
        }
    }
}

/// Request body for updating a user.
///
/// The target row is keyed by `id` in the body. Nullable columns accept an
/// explicit `null` to clear the stored value.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub id: Uuid,
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    #[schema(format = "email")]
    pub email: Option<String>,
    #[validate(length(min = 6, max = 72, message = "Password must be between 6 and 72 characters"))]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub bio: Option<Option<String>>,
    pub is_premium: Option<bool>,
}

impl UpdateUserRequest {
    /// Converts the request DTO into an UpdateUser changeset.
    pub fn into_update_user(self) -> UpdateUser {
        UpdateUser {
            name: self.name,
            email: self.email,
            password: self.password,
            image: self.image,
            bio: self.bio,
            is_premium: self.is_premium,
        }
    }
}

/// Request body for `PATCH /usuario/contrasena`.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub id: Uuid,
    #[validate(length(min = 1, message = "Current password cannot be empty"))]
    #[schema(format = "password")]
    pub current_password: String,
    #[validate(length(min = 6, max = 72, message = "Password must be between 6 and 72 characters"))]
    #[schema(format = "password", min_length = 6, max_length = 72)]
    pub new_password: String,
}

/// Request body for `PATCH /usuario/token`.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RenewTokenRequest {
    pub id: Uuid,
}

/// Request body for role assignment and removal.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleRequest {
    pub user_id: Uuid,
    pub role_id: Uuid,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for user data (excludes the password hash).
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub is_premium: bool,
    pub roles: Vec<RoleResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl UserResponse {
    pub fn from_user_with_roles(user: User, roles: Vec<Role>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            image: user.image,
            bio: user.bio,
            is_premium: user.is_premium,
            roles: roles.into_iter().map(RoleResponse::from).collect(),
            created_at: format_timestamp(user.created_at),
            updated_at: format_timestamp(user.updated_at),
        }
    }
}

impl From<(User, Vec<Role>)> for UserResponse {
    fn from((user, roles): (User, Vec<Role>)) -> Self {
        Self::from_user_with_roles(user, roles)
    }
}

/// Compact user object embedded in progress responses.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserBrief {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for UserBrief {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Response for `DELETE /usuario/{id}` when the row existed.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedUserResponse {
    pub message: String,
    pub data: UserBrief,
}

/// Response for token issuance and renewal.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub message: String,
    #[schema(example = "eyJ0eXAiOiJKV1QiLCJhbGc...")]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_user_request_valid() {
        let request: CreateUserRequest = serde_json::from_str(
            r#"{"name": "Ana", "email": "ana@example.com", "password": "secret123"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert!(!request.is_premium);
    }

    #[tokio::test]
    async fn test_create_user_missing_password_reports_path() {
        use axum::body::Body;
        use axum::extract::{FromRequest, Request};
        use axum::http::{Method, header};

        use crate::error::AppError;
        use crate::utils::validate::ValidatedJson;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/usuario")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Ana","email":"ana@example.com"}"#))
            .unwrap();

        let result = ValidatedJson::<CreateUserRequest>::from_request(request, &()).await;

        match result.unwrap_err() {
            AppError::Validation { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].path, vec!["password".to_string()]);
                assert!(errors[0].message.contains("required"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_user_request_invalid_email() {
        let request: CreateUserRequest = serde_json::from_str(
            r#"{"name": "Ana", "email": "not-an-email", "password": "secret123"}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_user_request_null_clears_bio() {
        let request: UpdateUserRequest = serde_json::from_str(
            r#"{"id": "7c0d3e66-9ad4-4a10-a2e8-cd35c4cf2ea5", "bio": null}"#,
        )
        .unwrap();
        let update = request.into_update_user();
        assert_eq!(update.bio, Some(None));
        assert_eq!(update.name, None);
    }

    #[test]
    fn test_user_response_omits_password() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "hash".to_string(),
            image: None,
            bio: None,
            is_premium: false,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let body = serde_json::to_value(UserResponse::from_user_with_roles(user, vec![])).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["isPremium"], serde_json::json!(false));
    }
}
