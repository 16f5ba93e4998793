//! Progress service for business logic operations.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{NewProgress, Progress, ProgressType, UpdateProgress};
use crate::repositories::{ProgressDetail, ProgressRepository};

#[derive(Clone)]
pub struct ProgressService {
    repo: ProgressRepository,
}

impl ProgressService {
    pub fn new(repo: ProgressRepository) -> Self {
        Self { repo }
    }

    pub async fn create_progress(&self, new_progress: NewProgress) -> AppResult<ProgressDetail> {
        let created = self.repo.create(new_progress).await?;
        self.get_progress(created.id).await
    }

    pub async fn get_progress(&self, id: Uuid) -> AppResult<ProgressDetail> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("progress", "id", id))
    }

    pub async fn list_progress(&self) -> AppResult<Vec<ProgressDetail>> {
        self.repo.list_all().await
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<ProgressDetail>> {
        self.repo.list_by_user(user_id).await
    }

    pub async fn list_by_subtopic(&self, subtopic_id: Uuid) -> AppResult<Vec<ProgressDetail>> {
        self.repo.list_by_subtopic(subtopic_id).await
    }

    pub async fn list_by_type(&self, kind: ProgressType) -> AppResult<Vec<ProgressDetail>> {
        self.repo.list_by_type(kind).await
    }

    pub async fn list_completed(&self) -> AppResult<Vec<ProgressDetail>> {
        self.repo.list_completed().await
    }

    pub async fn update_progress(
        &self,
        id: Uuid,
        update_data: UpdateProgress,
    ) -> AppResult<ProgressDetail> {
        self.get_progress(id).await?;
        let updated: Progress = self.repo.update(id, update_data).await?;
        self.get_progress(updated.id).await
    }

    pub async fn delete_progress(&self, id: Uuid) -> AppResult<ProgressDetail> {
        let found = self.get_progress(id).await?;
        self.repo.delete(id).await?;
        Ok(found)
    }
}
