//! Progress CRUD request handlers, mounted at `/api-v1/progress`.
//!
//! Responses always embed brief user and subtopic objects.

use axum::extract::{Path, State};
use axum::response::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::PROGRESS_TAG;
use crate::api::dto::{
    CreateProgressRequest, MessageResponse, ProgressResponse, UpdateProgressRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::models::ProgressType;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates progress-related routes.
///
/// # Routes
/// - `GET /` / `POST /` / `PUT /` - List, create, update
/// - `GET /usuario/{userId}` - Progress of a user
/// - `GET /subtopic/{subtopicId}` - Progress on a subtopic
/// - `GET /tipo/{progressType}` - Progress of a given type
/// - `GET /completado` - Completed progress records
/// - `GET /{id}` / `DELETE /{id}` - Get or delete by ID
pub fn progress_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_progress, create_progress, update_progress))
        .routes(routes!(list_progress_by_user))
        .routes(routes!(list_progress_by_subtopic))
        .routes(routes!(list_progress_by_type))
        .routes(routes!(list_completed_progress))
        .routes(routes!(get_progress, delete_progress))
}

/// GET /api-v1/progress - List all progress records
#[utoipa::path(
    get,
    path = "/",
    tag = PROGRESS_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "List of progress records", body = Vec<ProgressResponse>)
    )
)]
async fn list_progress(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProgressResponse>>> {
    let records = state.services.progress.list_progress().await?;
    Ok(Json(
        records.into_iter().map(ProgressResponse::from).collect(),
    ))
}

/// GET /api-v1/progress/usuario/{userId} - Progress of a user
#[utoipa::path(
    get,
    path = "/usuario/{userId}",
    tag = PROGRESS_TAG,
    security(("bearerAuth" = [])),
    params(("userId" = uuid::Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Progress of the user", body = Vec<ProgressResponse>)
    )
)]
async fn list_progress_by_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<uuid::Uuid>,
) -> AppResult<Json<Vec<ProgressResponse>>> {
    let records = state.services.progress.list_by_user(user_id).await?;
    Ok(Json(
        records.into_iter().map(ProgressResponse::from).collect(),
    ))
}

/// GET /api-v1/progress/subtopic/{subtopicId} - Progress on a subtopic
#[utoipa::path(
    get,
    path = "/subtopic/{subtopicId}",
    tag = PROGRESS_TAG,
    security(("bearerAuth" = [])),
    params(("subtopicId" = uuid::Uuid, Path, description = "Subtopic ID")),
    responses(
        (status = 200, description = "Progress on the subtopic", body = Vec<ProgressResponse>)
    )
)]
async fn list_progress_by_subtopic(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(subtopic_id): Path<uuid::Uuid>,
) -> AppResult<Json<Vec<ProgressResponse>>> {
    let records = state.services.progress.list_by_subtopic(subtopic_id).await?;
    Ok(Json(
        records.into_iter().map(ProgressResponse::from).collect(),
    ))
}

/// GET /api-v1/progress/tipo/{progressType} - Progress of a given type
///
/// The path segment must be `learning`, `teaching` or `mastery`.
#[utoipa::path(
    get,
    path = "/tipo/{progressType}",
    tag = PROGRESS_TAG,
    security(("bearerAuth" = [])),
    params(("progressType" = ProgressType, Path, description = "Progress type")),
    responses(
        (status = 200, description = "Progress of the type", body = Vec<ProgressResponse>),
        (status = 400, description = "Unknown progress type")
    )
)]
async fn list_progress_by_type(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(progress_type): Path<ProgressType>,
) -> AppResult<Json<Vec<ProgressResponse>>> {
    let records = state.services.progress.list_by_type(progress_type).await?;
    Ok(Json(
        records.into_iter().map(ProgressResponse::from).collect(),
    ))
}

/// GET /api-v1/progress/completado - Completed progress records
#[utoipa::path(
    get,
    path = "/completado",
    tag = PROGRESS_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Completed progress records", body = Vec<ProgressResponse>)
    )
)]
async fn list_completed_progress(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProgressResponse>>> {
    let records = state.services.progress.list_completed().await?;
    Ok(Json(
        records.into_iter().map(ProgressResponse::from).collect(),
    ))
}

/// GET /api-v1/progress/{id} - Get progress record by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = PROGRESS_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Progress ID")),
    responses(
        (status = 200, description = "Progress found", body = ProgressResponse),
        (status = 404, description = "Progress not found", body = MessageResponse)
    )
)]
async fn get_progress(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<ProgressResponse>> {
    let record = state.services.progress.get_progress(id).await?;
    Ok(Json(ProgressResponse::from(record)))
}

/// POST /api-v1/progress - Create new progress record
#[utoipa::path(
    post,
    path = "/",
    tag = PROGRESS_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateProgressRequest,
    responses(
        (status = 200, description = "Progress created", body = ProgressResponse),
        (status = 400, description = "Validation failure or unknown reference")
    )
)]
async fn create_progress(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProgressRequest>,
) -> AppResult<Json<ProgressResponse>> {
    let record = state
        .services
        .progress
        .create_progress(payload.into_new_progress())
        .await?;
    Ok(Json(ProgressResponse::from(record)))
}

/// PUT /api-v1/progress - Update progress record
#[utoipa::path(
    put,
    path = "/",
    tag = PROGRESS_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateProgressRequest,
    responses(
        (status = 200, description = "Progress updated", body = ProgressResponse),
        (status = 404, description = "Progress not found", body = MessageResponse)
    )
)]
async fn update_progress(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateProgressRequest>,
) -> AppResult<Json<ProgressResponse>> {
    let id = payload.id;
    let record = state
        .services
        .progress
        .update_progress(id, payload.into_update_progress())
        .await?;
    Ok(Json(ProgressResponse::from(record)))
}

/// DELETE /api-v1/progress/{id} - Delete progress record
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = PROGRESS_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Progress ID")),
    responses(
        (status = 200, description = "Progress deleted", body = MessageResponse),
        (status = 404, description = "Progress not found", body = MessageResponse)
    )
)]
async fn delete_progress(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.progress.delete_progress(id).await?;
    Ok(Json(MessageResponse::new("Progreso eliminado con éxito")))
}
