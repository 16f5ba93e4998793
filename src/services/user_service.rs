//! User service for business logic operations.
//!
//! Provides a higher-level API for user operations, encapsulating
//! business rules (email normalization, password hashing, role
//! assignment) and coordinating with the repository layer.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, NewUserRole, Role, UpdateUser, User};
use crate::repositories::{RoleRepository, UserRepository};
use crate::utils::password::{hash_password, verify_password};

/// A user together with their assigned roles.
pub type UserWithRoles = (User, Vec<Role>);

/// User service for handling user-related business logic.
///
/// This service wraps the `UserRepository` and provides business-level
/// operations. Since repositories use `Arc` internally via the
/// connection pool, cloning is cheap.
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
    roles: RoleRepository,
}

impl UserService {
    /// Creates a new UserService with the given repositories.
    pub fn new(repo: UserRepository, roles: RoleRepository) -> Self {
        Self { repo, roles }
    }

    /// Creates a new user.
    ///
    /// The email is normalized to lowercase and the password is hashed
    /// before storage.
    ///
    /// # Returns
    /// The created user with generated id and timestamps
    pub async fn create_user(&self, mut new_user: NewUser) -> AppResult<UserWithRoles> {
        new_user.email = new_user.email.to_lowercase();
        new_user.password = hash_password(&new_user.password)?;

        let user = self.repo.create(new_user).await?;
        // A freshly created user has no role assignments yet.
        Ok((user, Vec::new()))
    }

    /// Gets a user by their ID.
    ///
    /// # Returns
    /// The user and their roles if found, or `NotFound` error
    pub async fn get_user(&self, id: Uuid) -> AppResult<UserWithRoles> {
        let user = self.repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found("user", "id", id)
        })?;
        let roles = self.repo.roles_for(&user).await?;
        Ok((user, roles))
    }

    /// Gets a user by their email address.
    ///
    /// The lookup is case-insensitive since stored emails are lowercase.
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<UserWithRoles> {
        let normalized = email.to_lowercase();
        let user = self
            .repo
            .find_by_email(&normalized)
            .await?
            .ok_or_else(|| AppError::not_found("user", "email", &normalized))?;
        let roles = self.repo.roles_for(&user).await?;
        Ok((user, roles))
    }

    /// Lists all users with their roles.
    pub async fn list_users(&self) -> AppResult<Vec<UserWithRoles>> {
        let users = self.repo.list_all().await?;
        let roles = self.repo.roles_for_all(&users).await?;
        Ok(users.into_iter().zip(roles).collect())
    }

    /// Lists all premium users with their roles.
    pub async fn list_premium_users(&self) -> AppResult<Vec<UserWithRoles>> {
        let users = self.repo.list_premium().await?;
        let roles = self.repo.roles_for_all(&users).await?;
        Ok(users.into_iter().zip(roles).collect())
    }

    /// Updates a user's data.
    ///
    /// Email updates are normalized to lowercase and password updates
    /// are hashed, mirroring `create_user`.
    pub async fn update_user(&self, id: Uuid, mut update_data: UpdateUser) -> AppResult<UserWithRoles> {
        // Verify user exists first
        self.get_user(id).await?;

        if let Some(email) = update_data.email.take() {
            update_data.email = Some(email.to_lowercase());
        }
        if let Some(password) = update_data.password.take() {
            update_data.password = Some(hash_password(&password)?);
        }

        let user = self.repo.update(id, update_data).await?;
        let roles = self.repo.roles_for(&user).await?;
        Ok((user, roles))
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// The deleted user if it existed, `None` otherwise
    pub async fn delete_user(&self, id: Uuid) -> AppResult<Option<User>> {
        let Some(user) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        self.repo.delete(id).await?;
        Ok(Some(user))
    }

    /// Changes a user's password after verifying the current one.
    pub async fn change_password(
        &self,
        id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let (user, _) = self.get_user(id).await?;

        if !verify_password(current_password, &user.password)? {
            return Err(AppError::unauthorized("Contraseña actual incorrecta"));
        }

        let update = UpdateUser {
            password: Some(hash_password(new_password)?),
            ..Default::default()
        };
        self.repo.update(id, update).await?;
        Ok(())
    }

    /// Verifies credentials for login.
    ///
    /// # Returns
    /// The authenticated user, or `Unauthorized` if the email is unknown
    /// or the password does not match
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let normalized = email.to_lowercase();
        let user = self
            .repo
            .find_by_email(&normalized)
            .await?
            .ok_or_else(|| AppError::unauthorized("Credenciales inválidas"))?;

        if !verify_password(password, &user.password)? {
            return Err(AppError::unauthorized("Credenciales inválidas"));
        }

        Ok(user)
    }

    /// Assigns a role to a user.
    pub async fn assign_role(&self, user_id: Uuid, role_id: Uuid) -> AppResult<()> {
        self.get_user(user_id).await?;
        self.roles
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| AppError::not_found("role", "id", role_id))?;

        if self.repo.find_user_role(user_id, role_id).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "user_role".to_string(),
                field: "role_id".to_string(),
                value: role_id.to_string(),
            });
        }

        self.repo
            .assign_role(NewUserRole { user_id, role_id })
            .await?;
        Ok(())
    }

    /// Removes a role from a user.
    pub async fn remove_role(&self, user_id: Uuid, role_id: Uuid) -> AppResult<()> {
        let affected = self.repo.remove_role(user_id, role_id).await?;
        if affected == 0 {
            return Err(AppError::not_found("user_role", "role_id", role_id));
        }
        Ok(())
    }
}
