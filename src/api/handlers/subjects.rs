//! Subject CRUD request handlers, mounted at `/api-v1/subjects`.

use axum::extract::{Path, State};
use axum::response::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::SUBJECT_TAG;
use crate::api::dto::{
    CreateSubjectRequest, MessageResponse, SubjectResponse, SubjectWithSubtopicsResponse,
    UpdateSubjectRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates subject-related routes.
///
/// # Routes
/// - `GET /` / `POST /` / `PUT /` - List, create, update
/// - `GET /nombre/{name}` - Get subject by name
/// - `GET /con-subtopics` - Subjects with their subtopics
/// - `GET /{id}` / `DELETE /{id}` - Get or delete by ID
pub fn subject_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_subjects, create_subject, update_subject))
        .routes(routes!(get_subject_by_name))
        .routes(routes!(list_subjects_with_subtopics))
        .routes(routes!(get_subject, delete_subject))
}

/// GET /api-v1/subjects - List all subjects
#[utoipa::path(
    get,
    path = "/",
    tag = SUBJECT_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "List of subjects", body = Vec<SubjectResponse>)
    )
)]
async fn list_subjects(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SubjectResponse>>> {
    let subjects = state.services.subjects.list_subjects().await?;
    Ok(Json(
        subjects.into_iter().map(SubjectResponse::from).collect(),
    ))
}

/// GET /api-v1/subjects/con-subtopics - Subjects with their subtopics
#[utoipa::path(
    get,
    path = "/con-subtopics",
    tag = SUBJECT_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Subjects with subtopics", body = Vec<SubjectWithSubtopicsResponse>)
    )
)]
async fn list_subjects_with_subtopics(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SubjectWithSubtopicsResponse>>> {
    let subjects = state.services.subjects.list_subjects_with_subtopics().await?;
    Ok(Json(
        subjects
            .into_iter()
            .map(SubjectWithSubtopicsResponse::from)
            .collect(),
    ))
}

/// GET /api-v1/subjects/nombre/{name} - Get subject by name
#[utoipa::path(
    get,
    path = "/nombre/{name}",
    tag = SUBJECT_TAG,
    security(("bearerAuth" = [])),
    params(("name" = String, Path, description = "Subject name")),
    responses(
        (status = 200, description = "Subject found", body = SubjectResponse),
        (status = 404, description = "Subject not found", body = MessageResponse)
    )
)]
async fn get_subject_by_name(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<SubjectResponse>> {
    let subject = state.services.subjects.get_subject_by_name(&name).await?;
    Ok(Json(SubjectResponse::from(subject)))
}

/// GET /api-v1/subjects/{id} - Get subject by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = SUBJECT_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject found", body = SubjectResponse),
        (status = 404, description = "Subject not found", body = MessageResponse)
    )
)]
async fn get_subject(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<SubjectResponse>> {
    let subject = state.services.subjects.get_subject(id).await?;
    Ok(Json(SubjectResponse::from(subject)))
}

/// POST /api-v1/subjects - Create new subject
#[utoipa::path(
    post,
    path = "/",
    tag = SUBJECT_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateSubjectRequest,
    responses(
        (status = 200, description = "Subject created", body = SubjectResponse)
    )
)]
async fn create_subject(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSubjectRequest>,
) -> AppResult<Json<SubjectResponse>> {
    let subject = state
        .services
        .subjects
        .create_subject(payload.into_new_subject())
        .await?;
    Ok(Json(SubjectResponse::from(subject)))
}

/// PUT /api-v1/subjects - Update subject
#[utoipa::path(
    put,
    path = "/",
    tag = SUBJECT_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateSubjectRequest,
    responses(
        (status = 200, description = "Subject updated", body = SubjectResponse),
        (status = 404, description = "Subject not found", body = MessageResponse)
    )
)]
async fn update_subject(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateSubjectRequest>,
) -> AppResult<Json<SubjectResponse>> {
    let id = payload.id;
    let subject = state
        .services
        .subjects
        .update_subject(id, payload.into_update_subject())
        .await?;
    Ok(Json(SubjectResponse::from(subject)))
}

/// DELETE /api-v1/subjects/{id} - Delete subject
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = SUBJECT_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject deleted", body = MessageResponse),
        (status = 404, description = "Subject not found", body = MessageResponse)
    )
)]
async fn delete_subject(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.subjects.delete_subject(id).await?;
    Ok(Json(MessageResponse::new("Materia eliminada con éxito")))
}
