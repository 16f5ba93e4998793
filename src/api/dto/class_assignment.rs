//! Class assignment DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::format_timestamp;
use crate::models::{ClassAssignment, NewClassAssignment, UpdateClassAssignment};

/// Request body for creating a new class assignment.
///
/// `gradeId` is an opaque identifier; the grade catalogue lives outside
/// this service.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassAssignmentRequest {
    pub grade_id: Uuid,
    pub subject_id: Uuid,
    pub teacher_id: Uuid,
}

impl CreateClassAssignmentRequest {
    pub fn into_new_assignment(self) -> NewClassAssignment {
        NewClassAssignment {
            grade_id: self.grade_id,
            subject_id: self.subject_id,
            teacher_id: self.teacher_id,
        }
    }
}

/// Request body for updating a class assignment, keyed by `id`.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassAssignmentRequest {
    pub id: Uuid,
    pub grade_id: Option<Uuid>,
    pub subject_id: Option<Uuid>,
    pub teacher_id: Option<Uuid>,
}

impl UpdateClassAssignmentRequest {
    pub fn into_update_assignment(self) -> UpdateClassAssignment {
        UpdateClassAssignment {
            grade_id: self.grade_id,
            subject_id: self.subject_id,
            teacher_id: self.teacher_id,
        }
    }
}

/// Response body for class assignment data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassAssignmentResponse {
    pub id: Uuid,
    pub grade_id: Uuid,
    pub subject_id: Uuid,
    pub teacher_id: Uuid,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ClassAssignment> for ClassAssignmentResponse {
    fn from(assignment: ClassAssignment) -> Self {
        Self {
            id: assignment.id,
            grade_id: assignment.grade_id,
            subject_id: assignment.subject_id,
            teacher_id: assignment.teacher_id,
            created_at: format_timestamp(assignment.created_at),
            updated_at: format_timestamp(assignment.updated_at),
        }
    }
}
