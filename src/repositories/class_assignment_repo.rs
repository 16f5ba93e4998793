//! Class assignment repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{ClassAssignment, NewClassAssignment, UpdateClassAssignment};

#[derive(Clone)]
pub struct ClassAssignmentRepository {
    pool: AsyncDbPool,
}

impl ClassAssignmentRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        new_assignment: NewClassAssignment,
    ) -> Result<ClassAssignment, AppError> {
        use crate::schema::class_assignments::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(class_assignments)
            .values(&new_assignment)
            .returning(ClassAssignment::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(
        &self,
        assignment_id: Uuid,
    ) -> Result<Option<ClassAssignment>, AppError> {
        use crate::schema::class_assignments::dsl::*;
        let mut conn = self.pool.get().await?;

        class_assignments
            .filter(id.eq(assignment_id))
            .select(ClassAssignment::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> Result<Vec<ClassAssignment>, AppError> {
        use crate::schema::class_assignments::dsl::*;
        let mut conn = self.pool.get().await?;

        class_assignments
            .select(ClassAssignment::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_teacher(&self, tid: Uuid) -> Result<Vec<ClassAssignment>, AppError> {
        use crate::schema::class_assignments::dsl::*;
        let mut conn = self.pool.get().await?;

        class_assignments
            .filter(teacher_id.eq(tid))
            .select(ClassAssignment::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_grade(&self, gid: Uuid) -> Result<Vec<ClassAssignment>, AppError> {
        use crate::schema::class_assignments::dsl::*;
        let mut conn = self.pool.get().await?;

        class_assignments
            .filter(grade_id.eq(gid))
            .select(ClassAssignment::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_subject(&self, sid: Uuid) -> Result<Vec<ClassAssignment>, AppError> {
        use crate::schema::class_assignments::dsl::*;
        let mut conn = self.pool.get().await?;

        class_assignments
            .filter(subject_id.eq(sid))
            .select(ClassAssignment::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(
        &self,
        assignment_id: Uuid,
        update_data: UpdateClassAssignment,
    ) -> Result<ClassAssignment, AppError> {
        use crate::schema::class_assignments::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(class_assignments.filter(id.eq(assignment_id)))
            .set((&update_data, updated_at.eq(diesel::dsl::now)))
            .returning(ClassAssignment::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, assignment_id: Uuid) -> Result<usize, AppError> {
        use crate::schema::class_assignments::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(class_assignments.filter(id.eq(assignment_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
