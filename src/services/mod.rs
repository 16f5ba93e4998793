//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod ai_feedback_service;
mod class_assignment_service;
mod progress_service;
mod role_service;
mod schedule_service;
mod subject_service;
mod subtopic_service;
mod user_service;

pub use ai_feedback_service::AiFeedbackService;
pub use class_assignment_service::ClassAssignmentService;
pub use progress_service::ProgressService;
pub use role_service::RoleService;
pub use schedule_service::ScheduleService;
pub use subject_service::SubjectService;
pub use subtopic_service::{SubtopicService, SubtopicWithSubject};
pub use user_service::{UserService, UserWithRoles};

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub roles: RoleService,
    pub subjects: SubjectService,
    pub subtopics: SubtopicService,
    pub class_assignments: ClassAssignmentService,
    pub schedules: ScheduleService,
    pub progress: ProgressService,
    pub ai_feedback: AiFeedbackService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            users: UserService::new(repos.users.clone(), repos.roles.clone()),
            roles: RoleService::new(repos.roles, repos.users),
            subjects: SubjectService::new(repos.subjects.clone()),
            subtopics: SubtopicService::new(repos.subtopics, repos.subjects),
            class_assignments: ClassAssignmentService::new(repos.class_assignments.clone()),
            schedules: ScheduleService::new(repos.schedules, repos.class_assignments),
            progress: ProgressService::new(repos.progress),
            ai_feedback: AiFeedbackService::new(repos.ai_feedback),
        }
    }
}
