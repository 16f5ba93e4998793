//! Subject service for business logic operations.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{NewSubject, Subject, Subtopic, UpdateSubject};
use crate::repositories::SubjectRepository;

/// Subject service for handling subject-related business logic.
#[derive(Clone)]
pub struct SubjectService {
    repo: SubjectRepository,
}

impl SubjectService {
    pub fn new(repo: SubjectRepository) -> Self {
        Self { repo }
    }

    pub async fn create_subject(&self, new_subject: NewSubject) -> AppResult<Subject> {
        self.repo.create(new_subject).await
    }

    pub async fn get_subject(&self, id: Uuid) -> AppResult<Subject> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("subject", "id", id))
    }

    pub async fn get_subject_by_name(&self, name: &str) -> AppResult<Subject> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("subject", "name", name))
    }

    pub async fn list_subjects(&self) -> AppResult<Vec<Subject>> {
        self.repo.list_all().await
    }

    pub async fn list_subjects_with_subtopics(
        &self,
    ) -> AppResult<Vec<(Subject, Vec<Subtopic>)>> {
        self.repo.list_with_subtopics().await
    }

    pub async fn update_subject(&self, id: Uuid, update_data: UpdateSubject) -> AppResult<Subject> {
        self.get_subject(id).await?;
        self.repo.update(id, update_data).await
    }

    pub async fn delete_subject(&self, id: Uuid) -> AppResult<Subject> {
        let subject = self.get_subject(id).await?;
        self.repo.delete(id).await?;
        Ok(subject)
    }
}
