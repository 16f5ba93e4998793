//! User repository for async database operations.
//!
//! Provides CRUD operations for the users table and the user_roles join
//! table using diesel_async.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewUser, NewUserRole, Role, UpdateUser, User, UserRole};

/// User repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). No need for `Arc<UserRepository>`.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new user in the database.
    ///
    /// # Arguments
    /// * `new_user` - The user data to insert
    ///
    /// # Returns
    /// The created user with generated id and timestamps
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(users)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a user by their ID.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .filter(id.eq(user_id))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Finds a user by their email address.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn find_by_email(&self, user_email: &str) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .filter(email.eq(user_email))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists all users in the database.
    pub async fn list_all(&self) -> Result<Vec<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .select(User::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists all premium users.
    pub async fn list_premium(&self) -> Result<Vec<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .filter(is_premium.eq(true))
            .select(User::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Updates a user's data.
    ///
    /// # Arguments
    /// * `user_id` - The user's ID
    /// * `update_data` - The fields to update (None fields are ignored)
    ///
    /// # Returns
    /// The updated user
    pub async fn update(&self, user_id: Uuid, update_data: UpdateUser) -> Result<User, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(users.filter(id.eq(user_id)))
            .set((&update_data, updated_at.eq(diesel::dsl::now)))
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a user from the database.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, user_id: Uuid) -> Result<usize, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(users.filter(id.eq(user_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Loads the roles assigned to a single user.
    pub async fn roles_for(&self, user: &User) -> Result<Vec<Role>, AppError> {
        use crate::schema::roles;
        let mut conn = self.pool.get().await?;

        UserRole::belonging_to(user)
            .inner_join(roles::table)
            .select(Role::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Loads the roles assigned to each user in `users`, in the same order.
    pub async fn roles_for_all(&self, users: &[User]) -> Result<Vec<Vec<Role>>, AppError> {
        use crate::schema::roles;
        let mut conn = self.pool.get().await?;

        let rows: Vec<(UserRole, Role)> = UserRole::belonging_to(users)
            .inner_join(roles::table)
            .select((UserRole::as_select(), Role::as_select()))
            .load(&mut conn)
            .await?;

        Ok(rows
            .grouped_by(users)
            .into_iter()
            .map(|pairs| pairs.into_iter().map(|(_, role)| role).collect())
            .collect())
    }

    /// Finds an existing user-role assignment.
    pub async fn find_user_role(
        &self,
        uid: Uuid,
        rid: Uuid,
    ) -> Result<Option<UserRole>, AppError> {
        use crate::schema::user_roles::dsl::*;
        let mut conn = self.pool.get().await?;

        user_roles
            .filter(user_id.eq(uid))
            .filter(role_id.eq(rid))
            .select(UserRole::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Assigns a role to a user.
    pub async fn assign_role(&self, assignment: NewUserRole) -> Result<UserRole, AppError> {
        use crate::schema::user_roles::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(user_roles)
            .values(&assignment)
            .returning(UserRole::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Removes a role from a user.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn remove_role(&self, uid: Uuid, rid: Uuid) -> Result<usize, AppError> {
        use crate::schema::user_roles::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(user_roles.filter(user_id.eq(uid)).filter(role_id.eq(rid)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists all users holding the given role.
    pub async fn users_with_role(&self, rid: Uuid) -> Result<Vec<User>, AppError> {
        use crate::schema::{user_roles, users};
        let mut conn = self.pool.get().await?;

        user_roles::table
            .filter(user_roles::role_id.eq(rid))
            .inner_join(users::table)
            .select(User::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
