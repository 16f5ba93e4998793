//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
///
/// # Routes
/// - `/usuario` and `/roles` - User and role management
/// - `/auth` - Login
/// - `/api-v1/*` - Academic domain endpoint groups
/// - `/health`, `/health/ready`, `/health/live` - Probes
/// - `/docs` - Swagger UI backed by `/api-docs/openapi.json`
pub fn create_router(state: AppState) -> Router {
    let academic_routes = OpenApiRouter::new()
        .nest("/subjects", handlers::subjects::subject_routes())
        .nest("/subtopics", handlers::subtopics::subtopic_routes())
        .nest(
            "/class-assignments",
            handlers::class_assignments::class_assignment_routes(),
        )
        .nest("/schedules", handlers::schedules::schedule_routes())
        .nest("/progress", handlers::progress::progress_routes())
        .nest("/ai-feedback", handlers::ai_feedback::ai_feedback_routes());

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/usuario", handlers::users::user_routes())
        .nest("/roles", handlers::roles::role_routes())
        .nest("/auth", handlers::auth::auth_routes())
        .nest("/api-v1", academic_routes)
        .merge(handlers::health::health_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
