//! Schedule service for business logic operations.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{NewSchedule, Schedule, UpdateSchedule, Weekday};
use crate::repositories::{ClassAssignmentRepository, ScheduleRepository};

#[derive(Clone)]
pub struct ScheduleService {
    repo: ScheduleRepository,
    assignments: ClassAssignmentRepository,
}

impl ScheduleService {
    pub fn new(repo: ScheduleRepository, assignments: ClassAssignmentRepository) -> Self {
        Self { repo, assignments }
    }

    /// Creates a schedule after verifying the assignment exists.
    pub async fn create_schedule(&self, new_schedule: NewSchedule) -> AppResult<Schedule> {
        self.assignments
            .find_by_id(new_schedule.assignment_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("class_assignment", "id", new_schedule.assignment_id)
            })?;
        self.repo.create(new_schedule).await
    }

    pub async fn get_schedule(&self, id: Uuid) -> AppResult<Schedule> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("schedule", "id", id))
    }

    pub async fn list_schedules(&self) -> AppResult<Vec<Schedule>> {
        self.repo.list_all().await
    }

    pub async fn list_by_assignment(&self, assignment_id: Uuid) -> AppResult<Vec<Schedule>> {
        self.assignments
            .find_by_id(assignment_id)
            .await?
            .ok_or_else(|| AppError::not_found("class_assignment", "id", assignment_id))?;
        self.repo.list_by_assignment(assignment_id).await
    }

    pub async fn list_by_day(&self, day: Weekday) -> AppResult<Vec<Schedule>> {
        self.repo.list_by_day(day).await
    }

    pub async fn list_by_quarter(&self, quarter: &str) -> AppResult<Vec<Schedule>> {
        self.repo.list_by_quarter(quarter).await
    }

    pub async fn update_schedule(
        &self,
        id: Uuid,
        update_data: UpdateSchedule,
    ) -> AppResult<Schedule> {
        self.get_schedule(id).await?;
        self.repo.update(id, update_data).await
    }

    pub async fn delete_schedule(&self, id: Uuid) -> AppResult<Schedule> {
        let schedule = self.get_schedule(id).await?;
        self.repo.delete(id).await?;
        Ok(schedule)
    }
}
