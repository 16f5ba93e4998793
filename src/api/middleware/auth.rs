//! Bearer-token authentication extractor.
//!
//! Protected handlers take an [`AuthUser`] argument; extraction fails with
//! 401 when the Authorization header is missing, malformed, or carries an
//! invalid or expired token.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::error::AppError;
use crate::utils::jwt::validate_token;

/// Authenticated user identity taken from the bearer token claims.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    JwtConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jwt_config = JwtConfig::from_ref(state);

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized("Invalid authorization header format. Expected: Bearer <token>")
        })?;

        let claims = validate_token(token, &jwt_config.secret)?;
        let user_id = claims.user_id()?;

        Ok(AuthUser {
            user_id,
            email: claims.email,
            name: claims.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::generate_token;
    use axum::http::Request;

    const SECRET: &str = "test_secret_key_at_least_32_characters_long";

    #[derive(Clone)]
    struct TestState {
        jwt: JwtConfig,
    }

    impl FromRef<TestState> for JwtConfig {
        fn from_ref(state: &TestState) -> JwtConfig {
            state.jwt.clone()
        }
    }

    fn test_state() -> TestState {
        TestState {
            jwt: JwtConfig {
                secret: SECRET.to_string(),
                token_expiration: 1,
            },
        }
    }

    fn parts_with_header(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/usuario");
        if let Some(v) = value {
            builder = builder.header(header::AUTHORIZATION, v);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn test_extracts_user_from_valid_token() {
        let user_id = Uuid::new_v4();
        let token = generate_token(
            user_id,
            "ana@example.com".to_string(),
            "Ana".to_string(),
            SECRET,
            1,
        )
        .unwrap();

        let mut parts = parts_with_header(Some(&format!("Bearer {}", token)));
        let auth_user = AuthUser::from_request_parts(&mut parts, &test_state())
            .await
            .unwrap();

        assert_eq!(auth_user.user_id, user_id);
        assert_eq!(auth_user.email, "ana@example.com");
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let mut parts = parts_with_header(None);
        let result = AuthUser::from_request_parts(&mut parts, &test_state()).await;
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_unauthorized() {
        let mut parts = parts_with_header(Some("Basic dXNlcjpwYXNz"));
        let result = AuthUser::from_request_parts(&mut parts, &test_state()).await;
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let mut parts = parts_with_header(Some("Bearer not-a-jwt"));
        let result = AuthUser::from_request_parts(&mut parts, &test_state()).await;
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }
}
