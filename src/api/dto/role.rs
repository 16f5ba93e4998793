//! Role-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::format_timestamp;
use crate::models::{NewRole, Role, UpdateRole, User};

fn default_is_active() -> bool {
    true
}

/// Request body for creating a new role.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    #[schema(min_length = 2, max_length = 50)]
    pub name: String,
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,
    /// Comma-separated permission names.
    #[schema(example = "read,write")]
    pub permissions: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

impl CreateRoleRequest {
    pub fn into_new_role(self) -> NewRole {
        NewRole {
            name: self.name,
            description: self.description,
            permissions: self.permissions,
            is_active: self.is_active,
        }
    }
}

/// Request body for updating a role, keyed by `id`.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    pub id: Uuid,
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,
    pub permissions: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateRoleRequest {
    pub fn into_update_role(self) -> UpdateRole {
        UpdateRole {
            name: self.name,
            description: self.description,
            permissions: self.permissions,
            is_active: self.is_active,
        }
    }
}

/// Query string for `GET /roles/permisos`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PermissionsQuery {
    /// Comma-separated permission names, all of which must be present.
    pub permissions: String,
}

impl PermissionsQuery {
    pub fn permission_list(&self) -> Vec<&str> {
        self.permissions
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

/// Response body for role data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub permissions: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
            permissions: role.permissions,
            is_active: role.is_active,
            created_at: format_timestamp(role.created_at),
            updated_at: format_timestamp(role.updated_at),
        }
    }
}

/// Flat user row returned by `GET /roles/usuarios/{roleId}`.
///
/// Carries the queried role inline instead of a nested `roles` array.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserWithRoleResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role_id: Uuid,
    pub role_name: String,
}

impl UserWithRoleResponse {
    pub fn from_user_and_role(user: User, role: &Role) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role_id: role.id,
            role_name: role.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_role_defaults_active() {
        let request: CreateRoleRequest = serde_json::from_str(
            r#"{"name": "docente", "description": "Teaching staff", "permissions": "read"}"#,
        )
        .unwrap();
        assert!(request.is_active);
    }

    #[test]
    fn test_permissions_query_splits_and_trims() {
        let query = PermissionsQuery {
            permissions: "read, write ,".to_string(),
        };
        assert_eq!(query.permission_list(), vec!["read", "write"]);
    }

    #[test]
    fn test_user_with_role_is_flat() {
        let role = Role {
            id: Uuid::new_v4(),
            name: "admin".to_string(),
            description: "Administrators".to_string(),
            permissions: "read,write".to_string(),
            is_active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
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

        let body =
            serde_json::to_value(UserWithRoleResponse::from_user_and_role(user, &role)).unwrap();
        assert_eq!(body["roleId"], serde_json::json!(role.id));
        assert_eq!(body["roleName"], "admin");
        assert!(body.get("roles").is_none());
        assert!(body.get("password").is_none());
    }
}
