//! Class assignment service for business logic operations.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{ClassAssignment, NewClassAssignment, UpdateClassAssignment};
use crate::repositories::ClassAssignmentRepository;

#[derive(Clone)]
pub struct ClassAssignmentService {
    repo: ClassAssignmentRepository,
}

impl ClassAssignmentService {
    pub fn new(repo: ClassAssignmentRepository) -> Self {
        Self { repo }
    }

    pub async fn create_assignment(
        &self,
        new_assignment: NewClassAssignment,
    ) -> AppResult<ClassAssignment> {
        self.repo.create(new_assignment).await
    }

    pub async fn get_assignment(&self, id: Uuid) -> AppResult<ClassAssignment> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("class_assignment", "id", id))
    }

    pub async fn list_assignments(&self) -> AppResult<Vec<ClassAssignment>> {
        self.repo.list_all().await
    }

    pub async fn list_by_teacher(&self, teacher_id: Uuid) -> AppResult<Vec<ClassAssignment>> {
        self.repo.list_by_teacher(teacher_id).await
    }

    pub async fn list_by_grade(&self, grade_id: Uuid) -> AppResult<Vec<ClassAssignment>> {
        self.repo.list_by_grade(grade_id).await
    }

    pub async fn list_by_subject(&self, subject_id: Uuid) -> AppResult<Vec<ClassAssignment>> {
        self.repo.list_by_subject(subject_id).await
    }

    pub async fn update_assignment(
        &self,
        id: Uuid,
        update_data: UpdateClassAssignment,
    ) -> AppResult<ClassAssignment> {
        self.get_assignment(id).await?;
        self.repo.update(id, update_data).await
    }

    pub async fn delete_assignment(&self, id: Uuid) -> AppResult<ClassAssignment> {
        let assignment = self.get_assignment(id).await?;
        self.repo.delete(id).await?;
        Ok(assignment)
    }
}
