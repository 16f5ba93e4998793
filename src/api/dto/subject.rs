//! Subject-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::subtopic::SubtopicBrief;
use crate::api::dto::{double_option, format_timestamp};
use crate::models::{NewSubject, Subject, Subtopic, UpdateSubject};

/// Request body for creating a new subject.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubjectRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    #[schema(min_length = 2, max_length = 100)]
    pub name: String,
    pub description: Option<String>,
}

impl CreateSubjectRequest {
    pub fn into_new_subject(self) -> NewSubject {
        NewSubject {
            name: self.name,
            description: self.description,
        }
    }
}

/// Request body for updating a subject, keyed by `id`.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubjectRequest {
    pub id: Uuid,
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

impl UpdateSubjectRequest {
    pub fn into_update_subject(self) -> UpdateSubject {
        UpdateSubject {
            name: self.name,
            description: self.description,
        }
    }
}

/// Response body for subject data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Subject> for SubjectResponse {
    fn from(subject: Subject) -> Self {
        Self {
            id: subject.id,
            name: subject.name,
            description: subject.description,
            created_at: format_timestamp(subject.created_at),
            updated_at: format_timestamp(subject.updated_at),
        }
    }
}

/// Subject with its subtopics, for `GET /api-v1/subjects/con-subtopics`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectWithSubtopicsResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub subtopics: Vec<SubtopicBrief>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<(Subject, Vec<Subtopic>)> for SubjectWithSubtopicsResponse {
    fn from((subject, subtopics): (Subject, Vec<Subtopic>)) -> Self {
        Self {
            id: subject.id,
            name: subject.name,
            description: subject.description,
            subtopics: subtopics.into_iter().map(SubtopicBrief::from).collect(),
            created_at: format_timestamp(subject.created_at),
            updated_at: format_timestamp(subject.updated_at),
        }
    }
}
