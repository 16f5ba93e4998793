use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const USER_TAG: &str = "Usuarios";
pub const ROLE_TAG: &str = "Roles";
pub const AUTH_TAG: &str = "Auth";
pub const HEALTH_TAG: &str = "Health";
pub const SUBJECT_TAG: &str = "Subjects";
pub const SUBTOPIC_TAG: &str = "Subtopics";
pub const CLASS_ASSIGNMENT_TAG: &str = "Class Assignments";
pub const SCHEDULE_TAG: &str = "Schedules";
pub const PROGRESS_TAG: &str = "Progress";
pub const AI_FEEDBACK_TAG: &str = "AI Feedback";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aula",
        description = "An api server for classroom planning and student progress",
    ),
    modifiers(&SecurityAddon),
    components(
        schemas(
            crate::api::dto::MessageResponse,
            crate::api::dto::ValidationErrorResponse,
        )
    ),
    tags(
        (name = USER_TAG, description = "User management endpoints"),
        (name = ROLE_TAG, description = "Role and permission endpoints"),
        (name = AUTH_TAG, description = "Authentication endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = SUBJECT_TAG, description = "Subject catalog endpoints"),
        (name = SUBTOPIC_TAG, description = "Subtopic catalog endpoints"),
        (name = CLASS_ASSIGNMENT_TAG, description = "Teacher, grade and subject assignment endpoints"),
        (name = SCHEDULE_TAG, description = "Weekly schedule endpoints"),
        (name = PROGRESS_TAG, description = "Student progress tracking endpoints"),
        (name = AI_FEEDBACK_TAG, description = "AI generated lesson step endpoints"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer Token Authentication"))
                        .build(),
                ),
            )
        }
    }
}
