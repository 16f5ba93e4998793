//! Subtopic CRUD request handlers, mounted at `/api-v1/subtopics`.
//!
//! Responses always embed the parent subject.

use axum::extract::{Path, State};
use axum::response::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::SUBTOPIC_TAG;
use crate::api::dto::{
    CreateSubtopicRequest, MessageResponse, SubtopicResponse, SubtopicWithProgressResponse,
    UpdateSubtopicRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates subtopic-related routes.
///
/// # Routes
/// - `GET /` / `POST /` / `PUT /` - List, create, update
/// - `GET /nombre/{name}` - Get subtopic by name
/// - `GET /subject/{subjectId}` - Subtopics of a subject
/// - `GET /con-progress` - Subtopics with their progress records
/// - `GET /{id}` / `DELETE /{id}` - Get or delete by ID
pub fn subtopic_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_subtopics, create_subtopic, update_subtopic))
        .routes(routes!(get_subtopic_by_name))
        .routes(routes!(list_subtopics_by_subject))
        .routes(routes!(list_subtopics_with_progress))
        .routes(routes!(get_subtopic, delete_subtopic))
}

/// GET /api-v1/subtopics - List all subtopics
#[utoipa::path(
    get,
    path = "/",
    tag = SUBTOPIC_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "List of subtopics with subjects", body = Vec<SubtopicResponse>)
    )
)]
async fn list_subtopics(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SubtopicResponse>>> {
    let subtopics = state.services.subtopics.list_subtopics().await?;
    Ok(Json(
        subtopics.into_iter().map(SubtopicResponse::from).collect(),
    ))
}

/// GET /api-v1/subtopics/subject/{subjectId} - Subtopics of a subject
#[utoipa::path(
    get,
    path = "/subject/{subjectId}",
    tag = SUBTOPIC_TAG,
    security(("bearerAuth" = [])),
    params(("subjectId" = uuid::Uuid, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subtopics of the subject", body = Vec<SubtopicResponse>),
        (status = 404, description = "Subject not found", body = MessageResponse)
    )
)]
async fn list_subtopics_by_subject(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(subject_id): Path<uuid::Uuid>,
) -> AppResult<Json<Vec<SubtopicResponse>>> {
    let subtopics = state.services.subtopics.list_by_subject(subject_id).await?;
    Ok(Json(
        subtopics.into_iter().map(SubtopicResponse::from).collect(),
    ))
}

/// GET /api-v1/subtopics/con-progress - Subtopics with their progress
#[utoipa::path(
    get,
    path = "/con-progress",
    tag = SUBTOPIC_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Subtopics with progress records", body = Vec<SubtopicWithProgressResponse>)
    )
)]
async fn list_subtopics_with_progress(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SubtopicWithProgressResponse>>> {
    let subtopics = state.services.subtopics.list_with_progress().await?;
    Ok(Json(
        subtopics
            .into_iter()
            .map(SubtopicWithProgressResponse::from)
            .collect(),
    ))
}

/// GET /api-v1/subtopics/nombre/{name} - Get subtopic by name
#[utoipa::path(
    get,
    path = "/nombre/{name}",
    tag = SUBTOPIC_TAG,
    security(("bearerAuth" = [])),
    params(("name" = String, Path, description = "Subtopic name")),
    responses(
        (status = 200, description = "Subtopic found", body = SubtopicResponse),
        (status = 404, description = "Subtopic not found", body = MessageResponse)
    )
)]
async fn get_subtopic_by_name(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<SubtopicResponse>> {
    let subtopic = state.services.subtopics.get_subtopic_by_name(&name).await?;
    Ok(Json(SubtopicResponse::from(subtopic)))
}

/// GET /api-v1/subtopics/{id} - Get subtopic by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = SUBTOPIC_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Subtopic ID")),
    responses(
        (status = 200, description = "Subtopic found", body = SubtopicResponse),
        (status = 404, description = "Subtopic not found", body = MessageResponse)
    )
)]
async fn get_subtopic(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<SubtopicResponse>> {
    let subtopic = state.services.subtopics.get_subtopic(id).await?;
    Ok(Json(SubtopicResponse::from(subtopic)))
}

/// POST /api-v1/subtopics - Create new subtopic
#[utoipa::path(
    post,
    path = "/",
    tag = SUBTOPIC_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateSubtopicRequest,
    responses(
        (status = 200, description = "Subtopic created", body = SubtopicResponse),
        (status = 404, description = "Parent subject not found", body = MessageResponse)
    )
)]
async fn create_subtopic(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSubtopicRequest>,
) -> AppResult<Json<SubtopicResponse>> {
    let subtopic = state
        .services
        .subtopics
        .create_subtopic(payload.into_new_subtopic())
        .await?;
    Ok(Json(SubtopicResponse::from(subtopic)))
}

/// PUT /api-v1/subtopics - Update subtopic
#[utoipa::path(
    put,
    path = "/",
    tag = SUBTOPIC_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateSubtopicRequest,
    responses(
        (status = 200, description = "Subtopic updated", body = SubtopicResponse),
        (status = 404, description = "Subtopic not found", body = MessageResponse)
    )
)]
async fn update_subtopic(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateSubtopicRequest>,
) -> AppResult<Json<SubtopicResponse>> {
    let id = payload.id;
    let subtopic = state
        .services
        .subtopics
        .update_subtopic(id, payload.into_update_subtopic())
        .await?;
    Ok(Json(SubtopicResponse::from(subtopic)))
}

/// DELETE /api-v1/subtopics/{id} - Delete subtopic
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = SUBTOPIC_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Subtopic ID")),
    responses(
        (status = 200, description = "Subtopic deleted", body = MessageResponse),
        (status = 404, description = "Subtopic not found", body = MessageResponse)
    )
)]
async fn delete_subtopic(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.subtopics.delete_subtopic(id).await?;
    Ok(Json(MessageResponse::new("Subtema eliminado con éxito")))
}
