//! Authentication handlers.

use axum::extract::State;
use axum::response::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AUTH_TAG;
use crate::api::dto::{LoginRequest, LoginResponse, UserResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::jwt::generate_token;
use crate::utils::validate::ValidatedJson;

/// Creates the authentication routes
///
/// # Routes
/// - `POST /login` - Authenticate and receive a bearer token
pub fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(login))
}

/// POST /auth/login - Authenticate user
///
/// Verifies email and password and returns the user with a signed token.
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = state
        .services
        .users
        .authenticate(&payload.email, &payload.password)
        .await?;

    let token = generate_token(
        user.id,
        user.email.clone(),
        user.name.clone(),
        &state.jwt_config.secret,
        state.jwt_config.token_expiration,
    )?;

    let (user, roles) = state.services.users.get_user(user.id).await?;

    Ok(Json(LoginResponse {
        user: UserResponse::from_user_with_roles(user, roles),
        token,
    }))
}
