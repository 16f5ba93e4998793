//! HTTP request handlers for API endpoints.
//!
//! This module contains all request handlers organized by resource type.

pub mod ai_feedback;
pub mod auth;
pub mod class_assignments;
pub mod health;
pub mod progress;
pub mod roles;
pub mod schedules;
pub mod subjects;
pub mod subtopics;
pub mod users;
