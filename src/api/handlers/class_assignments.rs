//! Class assignment CRUD request handlers, mounted at `/api-v1/class-assignments`.

use axum::extract::{Path, State};
use axum::response::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::CLASS_ASSIGNMENT_TAG;
use crate::api::dto::{
    ClassAssignmentResponse, CreateClassAssignmentRequest, MessageResponse,
    UpdateClassAssignmentRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates class-assignment routes.
///
/// # Routes
/// - `GET /` / `POST /` / `PUT /` - List, create, update
/// - `GET /teacher/{teacherId}` - Assignments of a teacher
/// - `GET /grade/{gradeId}` - Assignments of a grade
/// - `GET /subject/{subjectId}` - Assignments of a subject
/// - `GET /{id}` / `DELETE /{id}` - Get or delete by ID
pub fn class_assignment_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_assignments, create_assignment, update_assignment))
        .routes(routes!(list_assignments_by_teacher))
        .routes(routes!(list_assignments_by_grade))
        .routes(routes!(list_assignments_by_subject))
        .routes(routes!(get_assignment, delete_assignment))
}

/// GET /api-v1/class-assignments - List all assignments
#[utoipa::path(
    get,
    path = "/",
    tag = CLASS_ASSIGNMENT_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "List of class assignments", body = Vec<ClassAssignmentResponse>)
    )
)]
async fn list_assignments(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ClassAssignmentResponse>>> {
    let assignments = state.services.class_assignments.list_assignments().await?;
    Ok(Json(
        assignments
            .into_iter()
            .map(ClassAssignmentResponse::from)
            .collect(),
    ))
}

/// GET /api-v1/class-assignments/teacher/{teacherId} - Assignments of a teacher
#[utoipa::path(
    get,
    path = "/teacher/{teacherId}",
    tag = CLASS_ASSIGNMENT_TAG,
    security(("bearerAuth" = [])),
    params(("teacherId" = uuid::Uuid, Path, description = "Teacher user ID")),
    responses(
        (status = 200, description = "Assignments of the teacher", body = Vec<ClassAssignmentResponse>)
    )
)]
async fn list_assignments_by_teacher(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(teacher_id): Path<uuid::Uuid>,
) -> AppResult<Json<Vec<ClassAssignmentResponse>>> {
    let assignments = state
        .services
        .class_assignments
        .list_by_teacher(teacher_id)
        .await?;
    Ok(Json(
        assignments
            .into_iter()
            .map(ClassAssignmentResponse::from)
            .collect(),
    ))
}

/// GET /api-v1/class-assignments/grade/{gradeId} - Assignments of a grade
#[utoipa::path(
    get,
    path = "/grade/{gradeId}",
    tag = CLASS_ASSIGNMENT_TAG,
    security(("bearerAuth" = [])),
    params(("gradeId" = uuid::Uuid, Path, description = "Grade ID")),
    responses(
        (status = 200, description = "Assignments of the grade", body = Vec<ClassAssignmentResponse>)
    )
)]
async fn list_assignments_by_grade(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(grade_id): Path<uuid::Uuid>,
) -> AppResult<Json<Vec<ClassAssignmentResponse>>> {
    let assignments = state
        .services
        .class_assignments
        .list_by_grade(grade_id)
        .await?;
    Ok(Json(
        assignments
            .into_iter()
            .map(ClassAssignmentResponse::from)
            .collect(),
    ))
}

/// GET /api-v1/class-assignments/subject/{subjectId} - Assignments of a subject
#[utoipa::path(
    get,
    path = "/subject/{subjectId}",
    tag = CLASS_ASSIGNMENT_TAG,
    security(("bearerAuth" = [])),
    params(("subjectId" = uuid::Uuid, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Assignments of the subject", body = Vec<ClassAssignmentResponse>)
    )
)]
async fn list_assignments_by_subject(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(subject_id): Path<uuid::Uuid>,
) -> AppResult<Json<Vec<ClassAssignmentResponse>>> {
    let assignments = state
        .services
        .class_assignments
        .list_by_subject(subject_id)
        .await?;
    Ok(Json(
        assignments
            .into_iter()
            .map(ClassAssignmentResponse::from)
            .collect(),
    ))
}

/// GET /api-v1/class-assignments/{id} - Get assignment by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = CLASS_ASSIGNMENT_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Assignment found", body = ClassAssignmentResponse),
        (status = 404, description = "Assignment not found", body = MessageResponse)
    )
)]
async fn get_assignment(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<ClassAssignmentResponse>> {
    let assignment = state.services.class_assignments.get_assignment(id).await?;
    Ok(Json(ClassAssignmentResponse::from(assignment)))
}

/// POST /api-v1/class-assignments - Create new assignment
#[utoipa::path(
    post,
    path = "/",
    tag = CLASS_ASSIGNMENT_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateClassAssignmentRequest,
    responses(
        (status = 200, description = "Assignment created", body = ClassAssignmentResponse),
        (status = 400, description = "Unknown subject or teacher reference")
    )
)]
async fn create_assignment(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateClassAssignmentRequest>,
) -> AppResult<Json<ClassAssignmentResponse>> {
    let assignment = state
        .services
        .class_assignments
        .create_assignment(payload.into_new_assignment())
        .await?;
    Ok(Json(ClassAssignmentResponse::from(assignment)))
}

/// PUT /api-v1/class-assignments - Update assignment
#[utoipa::path(
    put,
    path = "/",
    tag = CLASS_ASSIGNMENT_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateClassAssignmentRequest,
    responses(
        (status = 200, description = "Assignment updated", body = ClassAssignmentResponse),
        (status = 404, description = "Assignment not found", body = MessageResponse)
    )
)]
async fn update_assignment(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateClassAssignmentRequest>,
) -> AppResult<Json<ClassAssignmentResponse>> {
    let id = payload.id;
    let assignment = state
        .services
        .class_assignments
        .update_assignment(id, payload.into_update_assignment())
        .await?;
    Ok(Json(ClassAssignmentResponse::from(assignment)))
}

/// DELETE /api-v1/class-assignments/{id} - Delete assignment
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = CLASS_ASSIGNMENT_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Assignment deleted", body = MessageResponse),
        (status = 404, description = "Assignment not found", body = MessageResponse)
    )
)]
async fn delete_assignment(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.class_assignments.delete_assignment(id).await?;
    Ok(Json(MessageResponse::new("Asignación eliminada con éxito")))
}
