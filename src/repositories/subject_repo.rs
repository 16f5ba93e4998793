//! Subject repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewSubject, Subject, Subtopic, UpdateSubject};

#[derive(Clone)]
pub struct SubjectRepository {
    pool: AsyncDbPool,
}

impl SubjectRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_subject: NewSubject) -> Result<Subject, AppError> {
        use crate::schema::subjects::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(subjects)
            .values(&new_subject)
            .returning(Subject::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, subject_id: Uuid) -> Result<Option<Subject>, AppError> {
        use crate::schema::subjects::dsl::*;
        let mut conn = self.pool.get().await?;

        subjects
            .filter(id.eq(subject_id))
            .select(Subject::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn find_by_name(&self, subject_name: &str) -> Result<Option<Subject>, AppError> {
        use crate::schema::subjects::dsl::*;
        let mut conn = self.pool.get().await?;

        subjects
            .filter(name.eq(subject_name))
            .select(Subject::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> Result<Vec<Subject>, AppError> {
        use crate::schema::subjects::dsl::*;
        let mut conn = self.pool.get().await?;

        subjects
            .select(Subject::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists every subject together with its subtopics.
    pub async fn list_with_subtopics(&self) -> Result<Vec<(Subject, Vec<Subtopic>)>, AppError> {
        use crate::schema::subjects::dsl::*;
        let mut conn = self.pool.get().await?;

        let all_subjects: Vec<Subject> = subjects
            .select(Subject::as_select())
            .load(&mut conn)
            .await?;

        let subtopic_rows: Vec<Subtopic> = Subtopic::belonging_to(&all_subjects)
            .select(Subtopic::as_select())
            .load(&mut conn)
            .await?;

        Ok(subtopic_rows
            .grouped_by(&all_subjects)
            .into_iter()
            .zip(all_subjects)
            .map(|(topics, subject)| (subject, topics))
            .collect())
    }

    pub async fn update(
        &self,
        subject_id: Uuid,
        update_data: UpdateSubject,
    ) -> Result<Subject, AppError> {
        use crate::schema::subjects::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(subjects.filter(id.eq(subject_id)))
            .set((&update_data, updated_at.eq(diesel::dsl::now)))
            .returning(Subject::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, subject_id: Uuid) -> Result<usize, AppError> {
        use crate::schema::subjects::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(subjects.filter(id.eq(subject_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
