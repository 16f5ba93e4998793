//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities.

mod ai_feedback_repo;
mod class_assignment_repo;
mod progress_repo;
mod role_repo;
mod schedule_repo;
mod subject_repo;
mod subtopic_repo;
mod user_repo;

pub use ai_feedback_repo::AiFeedbackRepository;
pub use class_assignment_repo::ClassAssignmentRepository;
pub use progress_repo::{ProgressDetail, ProgressRepository};
pub use role_repo::RoleRepository;
pub use schedule_repo::ScheduleRepository;
pub use subject_repo::SubjectRepository;
pub use subtopic_repo::SubtopicRepository;
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub roles: RoleRepository,
    pub subjects: SubjectRepository,
    pub subtopics: SubtopicRepository,
    pub class_assignments: ClassAssignmentRepository,
    pub schedules: ScheduleRepository,
    pub progress: ProgressRepository,
    pub ai_feedback: AiFeedbackRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            roles: RoleRepository::new(pool.clone()),
            subjects: SubjectRepository::new(pool.clone()),
            subtopics: SubtopicRepository::new(pool.clone()),
            class_assignments: ClassAssignmentRepository::new(pool.clone()),
            schedules: ScheduleRepository::new(pool.clone()),
            progress: ProgressRepository::new(pool.clone()),
            ai_feedback: AiFeedbackRepository::new(pool),
        }
    }
}
