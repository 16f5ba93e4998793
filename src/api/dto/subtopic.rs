//! Subtopic-related DTOs for API requests and responses.
//!
//! Subtopic responses always embed the parent subject.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::progress::ProgressBrief;
use crate::api::dto::subject::SubjectResponse;
use crate::api::dto::{double_option, format_timestamp};
use crate::models::{NewSubtopic, Progress, Subject, Subtopic, UpdateSubtopic};

/// Request body for creating a new subtopic.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubtopicRequest {
    pub subject_id: Uuid,
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    #[schema(min_length = 2, max_length = 100)]
    pub name: String,
    pub description: Option<String>,
}

impl CreateSubtopicRequest {
    pub fn into_new_subtopic(self) -> NewSubtopic {
        NewSubtopic {
            subject_id: self.subject_id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Request body for updating a subtopic, keyed by `id`.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubtopicRequest {
    pub id: Uuid,
    pub subject_id: Option<Uuid>,
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

impl UpdateSubtopicRequest {
    pub fn into_update_subtopic(self) -> UpdateSubtopic {
        UpdateSubtopic {
            subject_id: self.subject_id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Response body for subtopic data with the parent subject embedded.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubtopicResponse {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub subject: SubjectResponse,
    pub created_at: String,
    pub updated_at: String,
}

impl From<(Subtopic, Subject)> for SubtopicResponse {
    fn from((subtopic, subject): (Subtopic, Subject)) -> Self {
        Self {
            id: subtopic.id,
            subject_id: subtopic.subject_id,
            name: subtopic.name,
            description: subtopic.description,
            subject: SubjectResponse::from(subject),
            created_at: format_timestamp(subtopic.created_at),
            updated_at: format_timestamp(subtopic.updated_at),
        }
    }
}

/// Compact subtopic object embedded in other responses.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubtopicBrief {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub name: String,
}

impl From<Subtopic> for SubtopicBrief {
    fn from(subtopic: Subtopic) -> Self {
        Self {
            id: subtopic.id,
            subject_id: subtopic.subject_id,
            name: subtopic.name,
        }
    }
}

/// Subtopic with its progress records, for `GET /api-v1/subtopics/con-progress`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubtopicWithProgressResponse {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub progress: Vec<ProgressBrief>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<(Subtopic, Vec<Progress>)> for SubtopicWithProgressResponse {
    fn from((subtopic, records): (Subtopic, Vec<Progress>)) -> Self {
        Self {
            id: subtopic.id,
            subject_id: subtopic.subject_id,
            name: subtopic.name,
            description: subtopic.description,
            progress: records.into_iter().map(ProgressBrief::from).collect(),
            created_at: format_timestamp(subtopic.created_at),
            updated_at: format_timestamp(subtopic.updated_at),
        }
    }
}
