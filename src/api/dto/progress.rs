//! Progress DTOs for API requests and responses.
//!
//! Progress responses embed brief user and subtopic objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::subtopic::SubtopicBrief;
use crate::api::dto::user::UserBrief;
use crate::api::dto::{double_option, format_timestamp};
use crate::models::{NewProgress, Progress, ProgressType, UpdateProgress};
use crate::repositories::ProgressDetail;

/// Request body for creating a new progress record.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgressRequest {
    pub user_id: Uuid,
    pub subtopic_id: Uuid,
    pub progress_type: ProgressType,
    #[validate(range(min = 0.0, max = 100.0, message = "Percentage must be between 0 and 100"))]
    #[schema(minimum = 0.0, maximum = 100.0)]
    pub percentage: f64,
    pub completed_at: Option<DateTime<Utc>>,
}

impl CreateProgressRequest {
    pub fn into_new_progress(self) -> NewProgress {
        NewProgress {
            user_id: self.user_id,
            subtopic_id: self.subtopic_id,
            progress_type: self.progress_type,
            percentage: self.percentage,
            completed_at: self.completed_at,
        }
    }
}

/// Request body for updating a progress record, keyed by `id`.
///
/// `completedAt` accepts an explicit `null` to mark the record as not
/// completed again.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub subtopic_id: Option<Uuid>,
    pub progress_type: Option<ProgressType>,
    #[validate(range(min = 0.0, max = 100.0, message = "Percentage must be between 0 and 100"))]
    pub percentage: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>, format = "date-time")]
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

impl UpdateProgressRequest {
    pub fn into_update_progress(self) -> UpdateProgress {
        UpdateProgress {
            user_id: self.user_id,
            subtopic_id: self.subtopic_id,
            progress_type: self.progress_type,
            percentage: self.percentage,
            completed_at: self.completed_at,
        }
    }
}

/// Response body for progress data with embedded user and subtopic.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub subtopic_id: Uuid,
    pub progress_type: ProgressType,
    pub percentage: f64,
    pub completed_at: Option<String>,
    pub user: UserBrief,
    pub subtopic: SubtopicBrief,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProgressDetail> for ProgressResponse {
    fn from((progress, user, subtopic): ProgressDetail) -> Self {
        Self {
            id: progress.id,
            user_id: progress.user_id,
            subtopic_id: progress.subtopic_id,
            progress_type: progress.progress_type,
            percentage: progress.percentage,
            completed_at: progress.completed_at.map(format_timestamp),
            user: UserBrief::from(user),
            subtopic: SubtopicBrief::from(subtopic),
            created_at: format_timestamp(progress.created_at),
            updated_at: format_timestamp(progress.updated_at),
        }
    }
}

/// Compact progress object embedded in subtopic responses.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBrief {
    pub id: Uuid,
    pub user_id: Uuid,
    pub progress_type: ProgressType,
    pub percentage: f64,
    pub completed_at: Option<String>,
}

impl From<Progress> for ProgressBrief {
    fn from(progress: Progress) -> Self {
        Self {
            id: progress.id,
            user_id: progress.user_id,
            progress_type: progress.progress_type,
            percentage: progress.percentage,
            completed_at: progress.completed_at.map(format_timestamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_out_of_range_fails() {
        let request: CreateProgressRequest = serde_json::from_str(
            r#"{
                "userId": "7c0d3e66-9ad4-4a10-a2e8-cd35c4cf2ea5",
                "subtopicId": "b2c6f1de-13a1-44a1-b1a5-0b8a6a5a9d01",
                "progressType": "learning",
                "percentage": 120.0
            }"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_completed_at_null_clears() {
        let request: UpdateProgressRequest = serde_json::from_str(
            r#"{"id": "7c0d3e66-9ad4-4a10-a2e8-cd35c4cf2ea5", "completedAt": null}"#,
        )
        .unwrap();
        assert_eq!(request.into_update_progress().completed_at, Some(None));
    }
}
