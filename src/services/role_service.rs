//! Role service for business logic operations.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{NewRole, Role, UpdateRole, User};
use crate::repositories::{RoleRepository, UserRepository};

/// Role service for handling role-related business logic.
#[derive(Clone)]
pub struct RoleService {
    repo: RoleRepository,
    users: UserRepository,
}

impl RoleService {
    pub fn new(repo: RoleRepository, users: UserRepository) -> Self {
        Self { repo, users }
    }

    pub async fn create_role(&self, new_role: NewRole) -> AppResult<Role> {
        self.repo.create(new_role).await
    }

    pub async fn get_role(&self, id: Uuid) -> AppResult<Role> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("role", "id", id))
    }

    pub async fn get_role_by_name(&self, name: &str) -> AppResult<Role> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("role", "name", name))
    }

    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.repo.list_all().await
    }

    pub async fn list_active_roles(&self) -> AppResult<Vec<Role>> {
        self.repo.list_active().await
    }

    /// Lists roles holding every one of the given permissions.
    pub async fn list_roles_with_permissions(&self, required: &[&str]) -> AppResult<Vec<Role>> {
        let roles = self.repo.list_all().await?;
        Ok(roles
            .into_iter()
            .filter(|role| role.has_permissions(required))
            .collect())
    }

    pub async fn update_role(&self, id: Uuid, update_data: UpdateRole) -> AppResult<Role> {
        self.get_role(id).await?;
        self.repo.update(id, update_data).await
    }

    pub async fn delete_role(&self, id: Uuid) -> AppResult<Role> {
        let role = self.get_role(id).await?;
        self.repo.delete(id).await?;
        Ok(role)
    }

    /// Lists the users currently assigned to a role, returning the role too
    /// so callers can echo it per user.
    pub async fn users_with_role(&self, id: Uuid) -> AppResult<(Role, Vec<User>)> {
        let role = self.get_role(id).await?;
        let users = self.users.users_with_role(id).await?;
        Ok((role, users))
    }
}
