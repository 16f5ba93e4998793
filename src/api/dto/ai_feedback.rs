//! AI feedback DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::{double_option, format_timestamp};
use crate::models::{AiFeedback, NewAiFeedback, UpdateAiFeedback};

/// Request body for creating a new AI feedback step.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAiFeedbackRequest {
    pub subtopic_id: Uuid,
    #[validate(range(min = 1, message = "timeMinutes must be at least 1"))]
    #[schema(minimum = 1)]
    pub time_minutes: i32,
    #[validate(range(min = 1, message = "stepNumber must be at least 1"))]
    #[schema(minimum = 1)]
    pub step_number: i32,
    #[validate(length(min = 1, max = 255, message = "stepName cannot be empty"))]
    pub step_name: String,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
    pub student_activity: Option<String>,
    #[validate(length(min = 1, max = 255, message = "timeAllocation cannot be empty"))]
    pub time_allocation: String,
    pub materials_needed: Option<String>,
    pub success_indicator: Option<String>,
    #[serde(default)]
    pub status: bool,
}

impl CreateAiFeedbackRequest {
    pub fn into_new_feedback(self) -> NewAiFeedback {
        NewAiFeedback {
            subtopic_id: self.subtopic_id,
            time_minutes: self.time_minutes,
            step_number: self.step_number,
            step_name: self.step_name,
            content: self.content,
            student_activity: self.student_activity,
            time_allocation: self.time_allocation,
            materials_needed: self.materials_needed,
            success_indicator: self.success_indicator,
            status: self.status,
        }
    }
}

/// Request body for updating an AI feedback step, keyed by `id`.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAiFeedbackRequest {
    pub id: Uuid,
    pub subtopic_id: Option<Uuid>,
    #[validate(range(min = 1, message = "timeMinutes must be at least 1"))]
    pub time_minutes: Option<i32>,
    #[validate(range(min = 1, message = "stepNumber must be at least 1"))]
    pub step_number: Option<i32>,
    #[validate(length(min = 1, max = 255, message = "stepName cannot be empty"))]
    pub step_name: Option<String>,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub student_activity: Option<Option<String>>,
    #[validate(length(min = 1, max = 255, message = "timeAllocation cannot be empty"))]
    pub time_allocation: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub materials_needed: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub success_indicator: Option<Option<String>>,
    pub status: Option<bool>,
}

impl UpdateAiFeedbackRequest {
    pub fn into_update_feedback(self) -> UpdateAiFeedback {
        UpdateAiFeedback {
            subtopic_id: self.subtopic_id,
            time_minutes: self.time_minutes,
            step_number: self.step_number,
            step_name: self.step_name,
            content: self.content,
            student_activity: self.student_activity,
            time_allocation: self.time_allocation,
            materials_needed: self.materials_needed,
            success_indicator: self.success_indicator,
            status: self.status,
        }
    }
}

/// Response body for AI feedback data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiFeedbackResponse {
    pub id: Uuid,
    pub subtopic_id: Uuid,
    pub time_minutes: i32,
    pub step_number: i32,
    pub step_name: String,
    pub content: String,
    pub student_activity: Option<String>,
    pub time_allocation: String,
    pub materials_needed: Option<String>,
    pub success_indicator: Option<String>,
    pub status: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AiFeedback> for AiFeedbackResponse {
    fn from(feedback: AiFeedback) -> Self {
        Self {
            id: feedback.id,
            subtopic_id: feedback.subtopic_id,
            time_minutes: feedback.time_minutes,
            step_number: feedback.step_number,
            step_name: feedback.step_name,
            content: feedback.content,
            student_activity: feedback.student_activity,
            time_allocation: feedback.time_allocation,
            materials_needed: feedback.materials_needed,
            success_indicator: feedback.success_indicator,
            status: feedback.status,
            created_at: format_timestamp(feedback.created_at),
            updated_at: format_timestamp(feedback.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_feedback_rejects_zero_minutes() {
        let request: CreateAiFeedbackRequest = serde_json::from_str(
            r#"{
                "subtopicId": "7c0d3e66-9ad4-4a10-a2e8-cd35c4cf2ea5",
                "timeMinutes": 0,
                "stepNumber": 1,
                "stepName": "Warm up",
                "content": "Review fractions",
                "timeAllocation": "10 min"
            }"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
        assert!(!request.status);
    }
}
