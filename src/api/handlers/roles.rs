//! Role CRUD request handlers, mounted at `/roles`.

use axum::extract::{Path, Query, State};
use axum::response::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::ROLE_TAG;
use crate::api::dto::{
    CreateRoleRequest, MessageResponse, PermissionsQuery, RoleResponse, UpdateRoleRequest,
    UserWithRoleResponse,
};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates role-related routes.
///
/// # Routes
/// - `GET /` / `POST /` / `PUT /` - List, create, update
/// - `GET /activos` - Only active roles
/// - `GET /permisos?permissions=a,b` - Roles holding every permission
/// - `GET /nombre/{name}` - Get role by name
/// - `GET /usuarios/{roleId}` - Users assigned to a role
/// - `GET /{id}` / `DELETE /{id}` - Get or delete by ID
pub fn role_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_roles, create_role, update_role))
        .routes(routes!(list_active_roles))
        .routes(routes!(list_roles_by_permissions))
        .routes(routes!(get_role_by_name))
        .routes(routes!(list_users_with_role))
        .routes(routes!(get_role, delete_role))
}

/// GET /roles - List all roles
#[utoipa::path(
    get,
    path = "/",
    tag = ROLE_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "List of roles", body = Vec<RoleResponse>)
    )
)]
async fn list_roles(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RoleResponse>>> {
    let roles = state.services.roles.list_roles().await?;
    Ok(Json(roles.into_iter().map(RoleResponse::from).collect()))
}

/// GET /roles/activos - List active roles
#[utoipa::path(
    get,
    path = "/activos",
    tag = ROLE_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Active roles", body = Vec<RoleResponse>)
    )
)]
async fn list_active_roles(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RoleResponse>>> {
    let roles = state.services.roles.list_active_roles().await?;
    Ok(Json(roles.into_iter().map(RoleResponse::from).collect()))
}

/// GET /roles/permisos - Roles holding every requested permission
#[utoipa::path(
    get,
    path = "/permisos",
    tag = ROLE_TAG,
    security(("bearerAuth" = [])),
    params(PermissionsQuery),
    responses(
        (status = 200, description = "Matching roles", body = Vec<RoleResponse>)
    )
)]
async fn list_roles_by_permissions(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<PermissionsQuery>,
) -> AppResult<Json<Vec<RoleResponse>>> {
    let wanted = query.permission_list();
    let roles = state
        .services
        .roles
        .list_roles_with_permissions(&wanted)
        .await?;
    Ok(Json(roles.into_iter().map(RoleResponse::from).collect()))
}

/// GET /roles/nombre/{name} - Get role by name
#[utoipa::path(
    get,
    path = "/nombre/{name}",
    tag = ROLE_TAG,
    security(("bearerAuth" = [])),
    params(("name" = String, Path, description = "Role name")),
    responses(
        (status = 200, description = "Role found", body = RoleResponse),
        (status = 404, description = "Role not found", body = MessageResponse)
    )
)]
async fn get_role_by_name(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<RoleResponse>> {
    let role = state.services.roles.get_role_by_name(&name).await?;
    Ok(Json(RoleResponse::from(role)))
}

/// GET /roles/usuarios/{roleId} - Users assigned to a role
///
/// Each row is flat: the queried role travels as `roleId`/`roleName`.
#[utoipa::path(
    get,
    path = "/usuarios/{roleId}",
    tag = ROLE_TAG,
    security(("bearerAuth" = [])),
    params(("roleId" = uuid::Uuid, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Users holding the role", body = Vec<UserWithRoleResponse>),
        (status = 404, description = "Role not found", body = MessageResponse)
    )
)]
async fn list_users_with_role(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(role_id): Path<uuid::Uuid>,
) -> AppResult<Json<Vec<UserWithRoleResponse>>> {
    let (role, users) = state.services.roles.users_with_role(role_id).await?;
    Ok(Json(
        users
            .into_iter()
            .map(|user| UserWithRoleResponse::from_user_and_role(user, &role))
            .collect(),
    ))
}

/// GET /roles/{id} - Get role by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = ROLE_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role found", body = RoleResponse),
        (status = 404, description = "Role not found", body = MessageResponse)
    )
)]
async fn get_role(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<RoleResponse>> {
    let role = state.services.roles.get_role(id).await?;
    Ok(Json(RoleResponse::from(role)))
}

/// POST /roles - Create new role
#[utoipa::path(
    post,
    path = "/",
    tag = ROLE_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateRoleRequest,
    responses(
        (status = 200, description = "Role created", body = RoleResponse),
        (status = 409, description = "Role name already exists", body = MessageResponse)
    )
)]
async fn create_role(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRoleRequest>,
) -> AppResult<Json<RoleResponse>> {
    let role = state
        .services
        .roles
        .create_role(payload.into_new_role())
        .await?;
    Ok(Json(RoleResponse::from(role)))
}

/// PUT /roles - Update role
#[utoipa::path(
    put,
    path = "/",
    tag = ROLE_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = RoleResponse),
        (status = 404, description = "Role not found", body = MessageResponse)
    )
)]
async fn update_role(
    _auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateRoleRequest>,
) -> AppResult<Json<RoleResponse>> {
    let id = payload.id;
    let role = state
        .services
        .roles
        .update_role(id, payload.into_update_role())
        .await?;
    Ok(Json(RoleResponse::from(role)))
}

/// DELETE /roles/{id} - Delete role
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = ROLE_TAG,
    security(("bearerAuth" = [])),
    params(("id" = uuid::Uuid, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role deleted", body = MessageResponse),
        (status = 404, description = "Role not found", body = MessageResponse)
    )
)]
async fn delete_role(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.roles.delete_role(id).await?;
    Ok(Json(MessageResponse::new("Rol eliminado con éxito")))
}
