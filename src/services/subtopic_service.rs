//! Subtopic service for business logic operations.
//!
//! Subtopics are always read together with their parent subject so
//! responses can embed it.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{NewSubtopic, Progress, Subject, Subtopic, UpdateSubtopic};
use crate::repositories::{SubjectRepository, SubtopicRepository};

/// A subtopic together with its parent subject.
pub type SubtopicWithSubject = (Subtopic, Subject);

#[derive(Clone)]
pub struct SubtopicService {
    repo: SubtopicRepository,
    subjects: SubjectRepository,
}

impl SubtopicService {
    pub fn new(repo: SubtopicRepository, subjects: SubjectRepository) -> Self {
        Self { repo, subjects }
    }

    /// Creates a subtopic after verifying the parent subject exists.
    pub async fn create_subtopic(
        &self,
        new_subtopic: NewSubtopic,
    ) -> AppResult<SubtopicWithSubject> {
        let subject = self
            .subjects
            .find_by_id(new_subtopic.subject_id)
            .await?
            .ok_or_else(|| AppError::not_found("subject", "id", new_subtopic.subject_id))?;

        let subtopic = self.repo.create(new_subtopic).await?;
        Ok((subtopic, subject))
    }

    pub async fn get_subtopic(&self, id: Uuid) -> AppResult<SubtopicWithSubject> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("subtopic", "id", id))
    }

    pub async fn get_subtopic_by_name(&self, name: &str) -> AppResult<SubtopicWithSubject> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("subtopic", "name", name))
    }

    pub async fn list_subtopics(&self) -> AppResult<Vec<SubtopicWithSubject>> {
        self.repo.list_all().await
    }

    pub async fn list_by_subject(&self, subject_id: Uuid) -> AppResult<Vec<SubtopicWithSubject>> {
        self.subjects
            .find_by_id(subject_id)
            .await?
            .ok_or_else(|| AppError::not_found("subject", "id", subject_id))?;
        self.repo.list_by_subject(subject_id).await
    }

    pub async fn list_with_progress(&self) -> AppResult<Vec<(Subtopic, Vec<Progress>)>> {
        self.repo.list_with_progress().await
    }

    pub async fn update_subtopic(
        &self,
        id: Uuid,
        update_data: UpdateSubtopic,
    ) -> AppResult<SubtopicWithSubject> {
        self.get_subtopic(id).await?;
        self.repo.update(id, update_data).await?;
        self.get_subtopic(id).await
    }

    pub async fn delete_subtopic(&self, id: Uuid) -> AppResult<SubtopicWithSubject> {
        let found = self.get_subtopic(id).await?;
        self.repo.delete(id).await?;
        Ok(found)
    }
}
