//! AI feedback service for business logic operations.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{AiFeedback, NewAiFeedback, UpdateAiFeedback};
use crate::repositories::AiFeedbackRepository;

#[derive(Clone)]
pub struct AiFeedbackService {
    repo: AiFeedbackRepository,
}

impl AiFeedbackService {
    pub fn new(repo: AiFeedbackRepository) -> Self {
        Self { repo }
    }

    pub async fn create_feedback(&self, new_feedback: NewAiFeedback) -> AppResult<AiFeedback> {
        self.repo.create(new_feedback).await
    }

    pub async fn get_feedback(&self, id: Uuid) -> AppResult<AiFeedback> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("ai_feedback", "id", id))
    }

    pub async fn list_feedback(&self) -> AppResult<Vec<AiFeedback>> {
        self.repo.list_all().await
    }

    pub async fn list_by_subtopic(&self, subtopic_id: Uuid) -> AppResult<Vec<AiFeedback>> {
        self.repo.list_by_subtopic(subtopic_id).await
    }

    pub async fn list_by_step(&self, step: i32) -> AppResult<Vec<AiFeedback>> {
        self.repo.list_by_step(step).await
    }

    pub async fn list_completed(&self) -> AppResult<Vec<AiFeedback>> {
        self.repo.list_completed().await
    }

    pub async fn update_feedback(
        &self,
        id: Uuid,
        update_data: UpdateAiFeedback,
    ) -> AppResult<AiFeedback> {
        self.get_feedback(id).await?;
        self.repo.update(id, update_data).await
    }

    pub async fn delete_feedback(&self, id: Uuid) -> AppResult<AiFeedback> {
        let feedback = self.get_feedback(id).await?;
        self.repo.delete(id).await?;
        Ok(feedback)
    }
}
