//! AI feedback CRUD request handlers, mounted at `/api-v1/ai-feedback`.

use axum::extract::{Path, State};
use axum::response::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AI_FEEDBACK_TAG;
use crate::api::dto::{
    AiFeedbackResponse, CreateAiFeedbackRequest, MessageResponse, UpdateAiFeedbackRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates AI feedback routes.
///
/// # Routes
/// - `GET /` / `POST /` / `PUT /` - List, create, update
/// - `GET /subtopic/{subtopicId}` - Feedback steps of a subtopic
/// - `GET /step/{stepNumber}` - Feedback with a given step number
/// - `GET /completos` - Completed feedback steps
/// - `GET /{id}` / `DELETE /{id}` - Get or delete by ID
pub fn ai_feedback_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_feedback, create_feedback, update_feedback))
        .routes(routes!(list_feedback_by_subtopic))
        .routes(routes!(list_feedback_by_step))
        .routes(routes!(list_completed_feedback))
        .routes(routes!(get_feedback, delete_feedback))
}

/// GET /api-v1/ai-feedback - List all feedback steps
#[utoipa::path(
    get,
    path = "/",
    tag = AI_FEEDBACK_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "List of feedback steps", body = Vec<AiFeedbackResponse>)
    )
)]
async fn list_feedback(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AiFeedbackResponse>>> {
    let feedback = state.services.ai_feedback.list_feedback().await?;
    Ok(Json(
        feedback.into_iter().map(AiFeedbackResponse::from).collect(),
    ))
}

/// GET /api-v1/ai-feedback/subtopic/{subtopicId} - Feedback of a subtopic
#[utoipa::path(
    get,
    path = "/subtopic/{subtopicId}",
    tag = AI_FEEDBACK_TAG,
    security(("bearerAuth" = [])),
    params(("subtopicId" = uuid::Uuid, Path, description = "Subtopic ID")),
    responses(
        (status = 200, description = "Feedback steps of the subtopic", body = Vec<AiFeedbackResponse>)
    )
)]
async fn list_feedback_by_subtopic(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(subtopic_id): Path<uuid::Uuid>,
) -> AppResult<Json<Vec<AiFeedbackResponse>>> {
    let feedback = state
        .services
        .ai_feedback
        .list_by_subtopic(subtopic_id)
        .await?;
    Ok(Json(
        feedback.into_iter().map(AiFeedbackResponse::from).collect(),
    ))
}

/// GET /api-v1/ai-feedback/step/{stepNumber} - Feedback with a step number
#[utoipa::path(
    get,
    path = "/step/{stepNumber}",
    tag = AI_FEEDBACK_TAG,
    security(("bearerAuth" = [])),
    params(("stepNumber" = i32, Path, description = "Step number")),
    responses(
        (status = 200, description = "Feedback steps with the number", body = Vec<AiFeedbackResponse>)
    )
)]
async fn list_feedback_by_step(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(step_number): Path<i32>,
) -> AppResult<Json<Vec<AiFeedbackResponse>>> {
    let feedback = state.services.ai_feedback.list_by_step(step_number).await?;
    Ok(Json(
        feedback.into_iter().map(AiFeedbackResponse::from).collect(),
    ))
}

/// GET /api-v1/ai-feedback/completos - Completed feedback steps
#[utoipa::path(
    get,
    path = "/completos",
    tag = AI_FEEDBACK_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Completed feedback steps", body = Vec<AiFeedbackResponse>)
    )
)]
async fn list_completed_feedback(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AiFeedbackResponse>>> {
    let feedback = state.services.ai_feedback.list_completed().await?;
    Ok(Json(
        feedback.into_iter().map(AiFeedbackResponse::from).collect(),
    ))
}

/// GET /api-v1/ai-feedback/{id} - Get feedback step by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = AI_FEEDBACK_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Feedback ID")),
    responses(
        (status = 200, description = "Feedback found", body = AiFeedbackResponse),
        (status = 404, description = "Feedback not found", body = MessageResponse)
    )
)]
async fn get_feedback(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<AiFeedbackResponse>> {
    let feedback = state.services.ai_feedback.get_feedback(id).await?;
    Ok(Json(AiFeedbackResponse::from(feedback)))
}

/// POST /api-v1/ai-feedback - Create new feedback step
#[utoipa::path(
    post,
    path = "/",
    tag = AI_FEEDBACK_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateAiFeedbackRequest,
    responses(
        (status = 200, description = "Feedback created", body = AiFeedbackResponse),
        (status = 400, description = "Validation failure or unknown subtopic")
    )
)]
async fn create_feedback(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAiFeedbackRequest>,
) -> AppResult<Json<AiFeedbackResponse>> {
    let feedback = state
        .services
        .ai_feedback
        .create_feedback(payload.into_new_feedback())
        .await?;
    Ok(Json(AiFeedbackResponse::from(feedback)))
}

/// PUT /api-v1/ai-feedback - Update feedback step
#[utoipa::path(
    put,
    path = "/",
    tag = AI_FEEDBACK_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateAiFeedbackRequest,
    responses(
        (status = 200, description = "Feedback updated", body = AiFeedbackResponse),
        (status = 404, description = "Feedback not found", body = MessageResponse)
    )
)]
async fn update_feedback(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateAiFeedbackRequest>,
) -> AppResult<Json<AiFeedbackResponse>> {
    let id = payload.id;
    let feedback = state
        .services
        .ai_feedback
        .update_feedback(id, payload.into_update_feedback())
        .await?;
    Ok(Json(AiFeedbackResponse::from(feedback)))
}

/// DELETE /api-v1/ai-feedback/{id} - Delete feedback step
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = AI_FEEDBACK_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Feedback ID")),
    responses(
        (status = 200, description = "Feedback deleted", body = MessageResponse),
        (status = 404, description = "Feedback not found", body = MessageResponse)
    )
)]
async fn delete_feedback(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.ai_feedback.delete_feedback(id).await?;
    Ok(Json(MessageResponse::new(
        "Retroalimentación eliminada con éxito",
    )))
}
