//! Role repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewRole, Role, UpdateRole};

#[derive(Clone)]
pub struct RoleRepository {
    pool: AsyncDbPool,
}

impl RoleRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_role: NewRole) -> Result<Role, AppError> {
        use crate::schema::roles::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(roles)
            .values(&new_role)
            .returning(Role::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, role_id: Uuid) -> Result<Option<Role>, AppError> {
        use crate::schema::roles::dsl::*;
        let mut conn = self.pool.get().await?;

        roles
            .filter(id.eq(role_id))
            .select(Role::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn find_by_name(&self, role_name: &str) -> Result<Option<Role>, AppError> {
        use crate::schema::roles::dsl::*;
        let mut conn = self.pool.get().await?;

        roles
            .filter(name.eq(role_name))
            .select(Role::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> Result<Vec<Role>, AppError> {
        use crate::schema::roles::dsl::*;
        let mut conn = self.pool.get().await?;

        roles
            .select(Role::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_active(&self) -> Result<Vec<Role>, AppError> {
        use crate::schema::roles::dsl::*;
        let mut conn = self.pool.get().await?;

        roles
            .filter(is_active.eq(true))
            .select(Role::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(&self, role_id: Uuid, update_data: UpdateRole) -> Result<Role, AppError> {
        use crate::schema::roles::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(roles.filter(id.eq(role_id)))
            .set((&update_data, updated_at.eq(diesel::dsl::now)))
            .returning(Role::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, role_id: Uuid) -> Result<usize, AppError> {
        use crate::schema::roles::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(roles.filter(id.eq(role_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
