use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::models::User;

/// Role model for reading from database
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub permissions: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Splits the comma-separated permissions column into trimmed entries.
    pub fn permission_list(&self) -> Vec<&str> {
        self.permissions
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// True when the role carries every permission in `wanted`.
    pub fn has_permissions(&self, wanted: &[&str]) -> bool {
        let owned = self.permission_list();
        wanted.iter().all(|p| owned.contains(p))
    }
}

/// NewRole model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::roles)]
pub struct NewRole {
    pub name: String,
    pub description: String,
    pub permissions: String,
    pub is_active: bool,
}

/// UpdateRole model for partial updates
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::roles)]
pub struct UpdateRole {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<String>,
    pub is_active: Option<bool>,
}

/// Join row linking a user to a role, keyed by the composite (user_id, role_id).
#[derive(Debug, Queryable, Selectable, Identifiable, Associations, Clone)]
#[diesel(table_name = crate::schema::user_roles)]
#[diesel(primary_key(user_id, role_id))]
#[diesel(belongs_to(User))]
#[diesel(belongs_to(Role))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRole {
    pub user_id: Uuid,
    pub role_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Insertable join row for role assignment.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::user_roles)]
pub struct NewUserRole {
    pub user_id: Uuid,
    pub role_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn role_with(permissions: &str) -> Role {
        Role {
            id: Uuid::new_v4(),
            name: "admin".to_string(),
            description: "Administrator".to_string(),
            permissions: permissions.to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_permission_list_trims_and_skips_empty() {
        let role = role_with("read, write ,,delete");
        assert_eq!(role.permission_list(), vec!["read", "write", "delete"]);
    }

    #[test]
    fn test_has_permissions_requires_all() {
        let role = role_with("read,write,delete");
        assert!(role.has_permissions(&["read", "write"]));
        assert!(!role.has_permissions(&["read", "admin"]));
    }

    #[test]
    fn test_has_permissions_empty_request() {
        let role = role_with("read");
        assert!(role.has_permissions(&[]));
    }
}
