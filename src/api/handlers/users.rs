//! User CRUD and role-assignment request handlers, mounted at `/usuario`.
//!
//! `POST /` is the only unauthenticated operation; registration must work
//! before a token exists. Success messages follow the original Spanish API
//! surface.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::USER_TAG;
use crate::api::dto::{
    AssignRoleRequest, ChangePasswordRequest, CreateUserRequest, DeletedUserResponse,
    MessageResponse, RenewTokenRequest, TokenResponse, UpdateUserRequest, UserBrief, UserResponse,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::jwt::generate_token;
use crate::utils::validate::ValidatedJson;

/// Creates user-related routes.
///
/// # Routes
/// - `GET /` - List all users with their roles
/// - `POST /` - Create a new user (public)
/// - `PUT /` - Update a user, keyed by `id` in the body
/// - `GET /premium` - List premium users
/// - `GET /email/{email}` - Get user by email
/// - `PATCH /contrasena` - Change password
/// - `PATCH /token` - Renew bearer token
/// - `POST /asignar-rol` - Assign a role
/// - `DELETE /remover-rol` - Remove a role
/// - `GET /{id}` / `DELETE /{id}` - Get or delete by ID
pub fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_users, create_user, update_user))
        .routes(routes!(list_premium_users))
        .routes(routes!(get_user_by_email))
        .routes(routes!(change_password))
        .routes(routes!(renew_token))
        .routes(routes!(assign_role))
        .routes(routes!(remove_role))
        .routes(routes!(get_user, delete_user))
}

/// GET /usuario - List all users
#[utoipa::path(
    get,
    path = "/",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "List of users with roles", body = Vec<UserResponse>),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    )
)]
async fn list_users(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.services.users.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /usuario/premium - List premium users
#[utoipa::path(
    get,
    path = "/premium",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "List of premium users", body = Vec<UserResponse>)
    )
)]
async fn list_premium_users(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.services.users.list_premium_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /usuario/email/{email} - Get user by email
#[utoipa::path(
    get,
    path = "/email/{email}",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    params(("email" = String, Path, description = "Email address")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = MessageResponse)
    )
)]
async fn get_user_by_email(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state.services.users.get_user_by_email(&email).await?;
    Ok(Json(UserResponse::from(user)))
}

/// GET /usuario/{id} - Get user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = MessageResponse)
    )
)]
async fn get_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = state.services.users.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /usuario - Create new user
///
/// Public endpoint. Returns 200 with the created user, matching the
/// original contract.
#[utoipa::path(
    post,
    path = "/",
    tag = USER_TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Email already registered", body = MessageResponse)
    )
)]
async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .services
        .users
        .create_user(payload.into_new_user())
        .await?;
    Ok(Json(UserResponse::from(user)))
}

/// PUT /usuario - Update user
///
/// Sparse update keyed by `id` in the body; absent fields are untouched
/// and an explicit `null` clears nullable columns.
#[utoipa::path(
    put,
    path = "/",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found", body = MessageResponse)
    )
)]
async fn update_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let id = payload.id;
    let user = state
        .services
        .users
        .update_user(id, payload.into_update_user())
        .await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /usuario/{id} - Delete user
///
/// Always answers 200: a missing id yields a descriptive message instead
/// of an error, per the original contract.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deletion outcome", body = DeletedUserResponse)
    )
)]
async fn delete_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Response> {
    match state.services.users.delete_user(id).await? {
        Some(user) => Ok(Json(DeletedUserResponse {
            message: "Usuario eliminado".to_string(),
            data: UserBrief::from(user),
        })
        .into_response()),
        None => Ok(Json(MessageResponse::new(format!(
            "Error: el usuario con id {} no existe",
            id
        )))
        .into_response()),
    }
}

/// PATCH /usuario/contrasena - Change password
#[utoipa::path(
    patch,
    path = "/contrasena",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 401, description = "Current password incorrect", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse)
    )
)]
async fn change_password(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .users
        .change_password(payload.id, &payload.current_password, &payload.new_password)
        .await?;
    Ok(Json(MessageResponse::new("Contraseña actualizada con éxito")))
}

/// PATCH /usuario/token - Renew bearer token
#[utoipa::path(
    patch,
    path = "/token",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    request_body = RenewTokenRequest,
    responses(
        (status = 200, description = "Token renewed", body = TokenResponse),
        (status = 404, description = "User not found", body = MessageResponse)
    )
)]
async fn renew_token(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RenewTokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let (user, _) = state.services.users.get_user(payload.id).await?;

    let token = generate_token(
        user.id,
        user.email,
        user.name,
        &state.jwt_config.secret,
        state.jwt_config.token_expiration,
    )?;

    Ok(Json(TokenResponse {
        message: "Token renovado con éxito".to_string(),
        token,
    }))
}

/// POST /usuario/asignar-rol - Assign a role to a user
#[utoipa::path(
    post,
    path = "/asignar-rol",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    request_body = AssignRoleRequest,
    responses(
        (status = 200, description = "Role assigned", body = MessageResponse),
        (status = 404, description = "User or role not found", body = MessageResponse),
        (status = 409, description = "Role already assigned", body = MessageResponse)
    )
)]
async fn assign_role(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AssignRoleRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .users
        .assign_role(payload.user_id, payload.role_id)
        .await?;
    Ok(Json(MessageResponse::new("Rol asignado con éxito")))
}

/// DELETE /usuario/remover-rol - Remove a role from a user
#[utoipa::path(
    delete,
    path = "/remover-rol",
    tag = USER_TAG,
    security(("bearerAuth" = [])),
    request_body = AssignRoleRequest,
    responses(
        (status = 200, description = "Role removed", body = MessageResponse),
        (status = 404, description = "Assignment not found", body = MessageResponse)
    )
)]
async fn remove_role(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AssignRoleRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .users
        .remove_role(payload.user_id, payload.role_id)
        .await?;
    Ok(Json(MessageResponse::new("Rol removido con éxito")))
}
