//! Middleware components for request processing.
//!
//! This module contains middleware for logging, request ID tracking,
//! error response mapping, and bearer-token authentication.

mod auth;
mod error_handler;
mod logging;
mod request_id;

pub use auth::AuthUser;
pub use logging::logging_middleware;
pub use request_id::{RequestId, request_id_middleware};
