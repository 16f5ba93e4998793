//! Progress repository for async database operations.
//!
//! Progress rows are returned together with the owning user and subtopic
//! so responses can embed both.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewProgress, Progress, ProgressType, Subtopic, UpdateProgress, User};

/// A progress record joined with its user and subtopic.
pub type ProgressDetail = (Progress, User, Subtopic);

#[derive(Clone)]
pub struct ProgressRepository {
    pool: AsyncDbPool,
}

impl ProgressRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_progress: NewProgress) -> Result<Progress, AppError> {
        use crate::schema::progress_records::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(progress_records)
            .values(&new_progress)
            .returning(Progress::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, progress_id: Uuid) -> Result<Option<ProgressDetail>, AppError> {
        use crate::schema::{progress_records, subtopics, users};
        let mut conn = self.pool.get().await?;

        progress_records::table
            .filter(progress_records::id.eq(progress_id))
            .inner_join(users::table)
            .inner_join(subtopics::table)
            .select((
                Progress::as_select(),
                User::as_select(),
                Subtopic::as_select(),
            ))
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> Result<Vec<ProgressDetail>, AppError> {
        use crate::schema::{progress_records, subtopics, users};
        let mut conn = self.pool.get().await?;

        progress_records::table
            .inner_join(users::table)
            .inner_join(subtopics::table)
            .select((
                Progress::as_select(),
                User::as_select(),
                Subtopic::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_user(&self, uid: Uuid) -> Result<Vec<ProgressDetail>, AppError> {
        use crate::schema::{progress_records, subtopics, users};
        let mut conn = self.pool.get().await?;

        progress_records::table
            .filter(progress_records::user_id.eq(uid))
            .inner_join(users::table)
            .inner_join(subtopics::table)
            .select((
                Progress::as_select(),
                User::as_select(),
                Subtopic::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_subtopic(&self, sid: Uuid) -> Result<Vec<ProgressDetail>, AppError> {
        use crate::schema::{progress_records, subtopics, users};
        let mut conn = self.pool.get().await?;

        progress_records::table
            .filter(progress_records::subtopic_id.eq(sid))
            .inner_join(users::table)
            .inner_join(subtopics::table)
            .select((
                Progress::as_select(),
                User::as_select(),
                Subtopic::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_type(&self, kind: ProgressType) -> Result<Vec<ProgressDetail>, AppError> {
        use crate::schema::{progress_records, subtopics, users};
        let mut conn = self.pool.get().await?;

        progress_records::table
            .filter(progress_records::progress_type.eq(kind))
            .inner_join(users::table)
            .inner_join(subtopics::table)
            .select((
                Progress::as_select(),
                User::as_select(),
                Subtopic::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists records with a set completion timestamp.
    pub async fn list_completed(&self) -> Result<Vec<ProgressDetail>, AppError> {
        use crate::schema::{progress_records, subtopics, users};
        let mut conn = self.pool.get().await?;

        progress_records::table
            .filter(progress_records::completed_at.is_not_null())
            .inner_join(users::table)
            .inner_join(subtopics::table)
            .select((
                Progress::as_select(),
                User::as_select(),
                Subtopic::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(
        &self,
        progress_id: Uuid,
        update_data: UpdateProgress,
    ) -> Result<Progress, AppError> {
        use crate::schema::progress_records::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(progress_records.filter(id.eq(progress_id)))
            .set((&update_data, updated_at.eq(diesel::dsl::now)))
            .returning(Progress::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, progress_id: Uuid) -> Result<usize, AppError> {
        use crate::schema::progress_records::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(progress_records.filter(id.eq(progress_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
