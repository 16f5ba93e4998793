//! Schedule CRUD request handlers, mounted at `/api-v1/schedules`.

use axum::extract::{Path, State};
use axum::response::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::SCHEDULE_TAG;
use crate::api::dto::{
    CreateScheduleRequest, MessageResponse, ScheduleResponse, UpdateScheduleRequest,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::models::Weekday;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates schedule-related routes.
///
/// # Routes
/// - `GET /` / `POST /` / `PUT /` - List, create, update
/// - `GET /assignment/{assignmentId}` - Slots of an assignment
/// - `GET /day/{dayOfWeek}` - Slots on a weekday
/// - `GET /quarter/{quarter}` - Slots in a quarter
/// - `GET /{id}` / `DELETE /{id}` - Get or delete by ID
pub fn schedule_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_schedules, create_schedule, update_schedule))
        .routes(routes!(list_schedules_by_assignment))
        .routes(routes!(list_schedules_by_day))
        .routes(routes!(list_schedules_by_quarter))
        .routes(routes!(get_schedule, delete_schedule))
}

/// GET /api-v1/schedules - List all schedules
#[utoipa::path(
    get,
    path = "/",
    tag = SCHEDULE_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "List of schedules", body = Vec<ScheduleResponse>)
    )
)]
async fn list_schedules(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ScheduleResponse>>> {
    let schedules = state.services.schedules.list_schedules().await?;
    Ok(Json(
        schedules.into_iter().map(ScheduleResponse::from).collect(),
    ))
}

/// GET /api-v1/schedules/assignment/{assignmentId} - Slots of an assignment
#[utoipa::path(
    get,
    path = "/assignment/{assignmentId}",
    tag = SCHEDULE_TAG,
    security(("bearerAuth" = [])),
    params(("assignmentId" = uuid::Uuid, Path, description = "Class assignment ID")),
    responses(
        (status = 200, description = "Slots of the assignment", body = Vec<ScheduleResponse>),
        (status = 404, description = "Assignment not found", body = MessageResponse)
    )
)]
async fn list_schedules_by_assignment(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(assignment_id): Path<uuid::Uuid>,
) -> AppResult<Json<Vec<ScheduleResponse>>> {
    let schedules = state
        .services
        .schedules
        .list_by_assignment(assignment_id)
        .await?;
    Ok(Json(
        schedules.into_iter().map(ScheduleResponse::from).collect(),
    ))
}

/// GET /api-v1/schedules/day/{dayOfWeek} - Slots on a weekday
///
/// The path segment must be a lowercase English day name.
#[utoipa::path(
    get,
    path = "/day/{dayOfWeek}",
    tag = SCHEDULE_TAG,
    security(("bearerAuth" = [])),
    params(("dayOfWeek" = Weekday, Path, description = "Day of the week (lowercase)")),
    responses(
        (status = 200, description = "Slots on the day", body = Vec<ScheduleResponse>),
        (status = 400, description = "Unknown day name")
    )
)]
async fn list_schedules_by_day(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(day): Path<Weekday>,
) -> AppResult<Json<Vec<ScheduleResponse>>> {
    let schedules = state.services.schedules.list_by_day(day).await?;
    Ok(Json(
        schedules.into_iter().map(ScheduleResponse::from).collect(),
    ))
}

/// GET /api-v1/schedules/quarter/{quarter} - Slots in a quarter
#[utoipa::path(
    get,
    path = "/quarter/{quarter}",
    tag = SCHEDULE_TAG,
    security(("bearerAuth" = [])),
    params(("quarter" = String, Path, description = "Quarter label")),
    responses(
        (status = 200, description = "Slots in the quarter", body = Vec<ScheduleResponse>)
    )
)]
async fn list_schedules_by_quarter(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(quarter): Path<String>,
) -> AppResult<Json<Vec<ScheduleResponse>>> {
    let schedules = state.services.schedules.list_by_quarter(&quarter).await?;
    Ok(Json(
        schedules.into_iter().map(ScheduleResponse::from).collect(),
    ))
}

/// GET /api-v1/schedules/{id} - Get schedule by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = SCHEDULE_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Schedule found", body = ScheduleResponse),
        (status = 404, description = "Schedule not found", body = MessageResponse)
    )
)]
async fn get_schedule(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<ScheduleResponse>> {
    let schedule = state.services.schedules.get_schedule(id).await?;
    Ok(Json(ScheduleResponse::from(schedule)))
}

/// POST /api-v1/schedules - Create new schedule
#[utoipa::path(
    post,
    path = "/",
    tag = SCHEDULE_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateScheduleRequest,
    responses(
        (status = 200, description = "Schedule created", body = ScheduleResponse),
        (status = 404, description = "Assignment not found", body = MessageResponse)
    )
)]
async fn create_schedule(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateScheduleRequest>,
) -> AppResult<Json<ScheduleResponse>> {
    let schedule = state
        .services
        .schedules
        .create_schedule(payload.into_new_schedule())
        .await?;
    Ok(Json(ScheduleResponse::from(schedule)))
}

/// PUT /api-v1/schedules - Update schedule
#[utoipa::path(
    put,
    path = "/",
    tag = SCHEDULE_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateScheduleRequest,
    responses(
        (status = 200, description = "Schedule updated", body = ScheduleResponse),
        (status = 404, description = "Schedule not found", body = MessageResponse)
    )
)]
async fn update_schedule(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateScheduleRequest>,
) -> AppResult<Json<ScheduleResponse>> {
    let id = payload.id;
    let schedule = state
        .services
        .schedules
        .update_schedule(id, payload.into_update_schedule())
        .await?;
    Ok(Json(ScheduleResponse::from(schedule)))
}

/// DELETE /api-v1/schedules/{id} - Delete schedule
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = SCHEDULE_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Schedule deleted", body = MessageResponse),
        (status = 404, description = "Schedule not found", body = MessageResponse)
    )
)]
async fn delete_schedule(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.schedules.delete_schedule(id).await?;
    Ok(Json(MessageResponse::new("Horario eliminado con éxito")))
}
