//! AI feedback repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{AiFeedback, NewAiFeedback, UpdateAiFeedback};

#[derive(Clone)]
pub struct AiFeedbackRepository {
    pool: AsyncDbPool,
}

impl AiFeedbackRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_feedback: NewAiFeedback) -> Result<AiFeedback, AppError> {
        use crate::schema::ai_feedbacks::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(ai_feedbacks)
            .values(&new_feedback)
            .returning(AiFeedback::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, feedback_id: Uuid) -> Result<Option<AiFeedback>, AppError> {
        use crate::schema::ai_feedbacks::dsl::*;
        let mut conn = self.pool.get().await?;

        ai_feedbacks
            .filter(id.eq(feedback_id))
            .select(AiFeedback::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> Result<Vec<AiFeedback>, AppError> {
        use crate::schema::ai_feedbacks::dsl::*;
        let mut conn = self.pool.get().await?;

        ai_feedbacks
            .select(AiFeedback::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_subtopic(&self, sid: Uuid) -> Result<Vec<AiFeedback>, AppError> {
        use crate::schema::ai_feedbacks::dsl::*;
        let mut conn = self.pool.get().await?;

        ai_feedbacks
            .filter(subtopic_id.eq(sid))
            .select(AiFeedback::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_step(&self, step: i32) -> Result<Vec<AiFeedback>, AppError> {
        use crate::schema::ai_feedbacks::dsl::*;
        let mut conn = self.pool.get().await?;

        ai_feedbacks
            .filter(step_number.eq(step))
            .select(AiFeedback::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists feedback entries whose status is complete.
    pub async fn list_completed(&self) -> Result<Vec<AiFeedback>, AppError> {
        use crate::schema::ai_feedbacks::dsl::*;
        let mut conn = self.pool.get().await?;

        ai_feedbacks
            .filter(status.eq(true))
            .select(AiFeedback::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(
        &self,
        feedback_id: Uuid,
        update_data: UpdateAiFeedback,
    ) -> Result<AiFeedback, AppError> {
        use crate::schema::ai_feedbacks::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(ai_feedbacks.filter(id.eq(feedback_id)))
            .set((&update_data, updated_at.eq(diesel::dsl::now)))
            .returning(AiFeedback::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, feedback_id: Uuid) -> Result<usize, AppError> {
        use crate::schema::ai_feedbacks::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(ai_feedbacks.filter(id.eq(feedback_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
