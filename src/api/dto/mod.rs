//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain. Wire field names are camelCase,
//! matching the original API surface.

mod ai_feedback;
mod auth;
mod class_assignment;
mod error;
mod health;
mod progress;
mod role;
mod schedule;
mod subject;
mod subtopic;
mod user;

pub use ai_feedback::{AiFeedbackResponse, CreateAiFeedbackRequest, UpdateAiFeedbackRequest};
pub use auth::{LoginRequest, LoginResponse};
pub use class_assignment::{
    ClassAssignmentResponse, CreateClassAssignmentRequest, UpdateClassAssignmentRequest,
};
pub use error::{MessageResponse, ValidationErrorResponse};
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use progress::{CreateProgressRequest, ProgressResponse, UpdateProgressRequest};
pub use role::{
    CreateRoleRequest, PermissionsQuery, RoleResponse, UpdateRoleRequest, UserWithRoleResponse,
};
pub use schedule::{CreateScheduleRequest, ScheduleResponse, UpdateScheduleRequest};
pub use subject::{
    CreateSubjectRequest, SubjectResponse, SubjectWithSubtopicsResponse, UpdateSubjectRequest,
};
pub use subtopic::{
    CreateSubtopicRequest, SubtopicBrief, SubtopicResponse, SubtopicWithProgressResponse,
    UpdateSubtopicRequest,
};
pub use user::{
    AssignRoleRequest, ChangePasswordRequest, CreateUserRequest, DeletedUserResponse,
    RenewTokenRequest, TokenResponse, UpdateUserRequest, UserBrief, UserResponse,
};

use serde::{Deserialize, Deserializer};

/// Deserializer for double-`Option` fields.
///
/// An absent field stays `None` (via `#[serde(default)]`); a present field,
/// including an explicit JSON `null`, becomes `Some(inner)` so updates can
/// distinguish "leave untouched" from "clear the column".
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Timestamp format used across all responses.
pub(crate) fn format_timestamp(ts: chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "double_option")]
        bio: Option<Option<String>>,
    }

    #[test]
    fn test_double_option_absent() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.bio, None);
    }

    #[test]
    fn test_double_option_null() {
        let probe: Probe = serde_json::from_str(r#"{"bio": null}"#).unwrap();
        assert_eq!(probe.bio, Some(None));
    }

    #[test]
    fn test_double_option_value() {
        let probe: Probe = serde_json::from_str(r#"{"bio": "hello"}"#).unwrap();
        assert_eq!(probe.bio, Some(Some("hello".to_string())));
    }
}
