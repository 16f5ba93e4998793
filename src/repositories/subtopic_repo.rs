//! Subtopic repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewSubtopic, Progress, Subject, Subtopic, UpdateSubtopic};

#[derive(Clone)]
pub struct SubtopicRepository {
    pool: AsyncDbPool,
}

impl SubtopicRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_subtopic: NewSubtopic) -> Result<Subtopic, AppError> {
        use crate::schema::subtopics::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(subtopics)
            .values(&new_subtopic)
            .returning(Subtopic::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a subtopic together with its parent subject.
    pub async fn find_by_id(
        &self,
        subtopic_id: Uuid,
    ) -> Result<Option<(Subtopic, Subject)>, AppError> {
        use crate::schema::{subjects, subtopics};
        let mut conn = self.pool.get().await?;

        subtopics::table
            .filter(subtopics::id.eq(subtopic_id))
            .inner_join(subjects::table)
            .select((Subtopic::as_select(), Subject::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn find_by_name(
        &self,
        subtopic_name: &str,
    ) -> Result<Option<(Subtopic, Subject)>, AppError> {
        use crate::schema::{subjects, subtopics};
        let mut conn = self.pool.get().await?;

        subtopics::table
            .filter(subtopics::name.eq(subtopic_name))
            .inner_join(subjects::table)
            .select((Subtopic::as_select(), Subject::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> Result<Vec<(Subtopic, Subject)>, AppError> {
        use crate::schema::{subjects, subtopics};
        let mut conn = self.pool.get().await?;

        subtopics::table
            .inner_join(subjects::table)
            .select((Subtopic::as_select(), Subject::as_select()))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_subject(
        &self,
        sid: Uuid,
    ) -> Result<Vec<(Subtopic, Subject)>, AppError> {
        use crate::schema::{subjects, subtopics};
        let mut conn = self.pool.get().await?;

        subtopics::table
            .filter(subtopics::subject_id.eq(sid))
            .inner_join(subjects::table)
            .select((Subtopic::as_select(), Subject::as_select()))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists every subtopic together with its progress records.
    pub async fn list_with_progress(&self) -> Result<Vec<(Subtopic, Vec<Progress>)>, AppError> {
        use crate::schema::subtopics::dsl::*;
        let mut conn = self.pool.get().await?;

        let all_subtopics: Vec<Subtopic> = subtopics
            .select(Subtopic::as_select())
            .load(&mut conn)
            .await?;

        let progress_rows: Vec<Progress> = Progress::belonging_to(&all_subtopics)
            .select(Progress::as_select())
            .load(&mut conn)
            .await?;

        Ok(progress_rows
            .grouped_by(&all_subtopics)
            .into_iter()
            .zip(all_subtopics)
            .map(|(records, subtopic)| (subtopic, records))
            .collect())
    }

    pub async fn update(
        &self,
        subtopic_id: Uuid,
        update_data: UpdateSubtopic,
    ) -> Result<Subtopic, AppError> {
        use crate::schema::subtopics::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(subtopics.filter(id.eq(subtopic_id)))
            .set((&update_data, updated_at.eq(diesel::dsl::now)))
            .returning(Subtopic::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, subtopic_id: Uuid) -> Result<usize, AppError> {
        use crate::schema::subtopics::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(subtopics.filter(id.eq(subtopic_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
