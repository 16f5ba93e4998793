//! Schedule repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewSchedule, Schedule, UpdateSchedule, Weekday};

#[derive(Clone)]
pub struct ScheduleRepository {
    pool: AsyncDbPool,
}

impl ScheduleRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_schedule: NewSchedule) -> Result<Schedule, AppError> {
        use crate::schema::schedules::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(schedules)
            .values(&new_schedule)
            .returning(Schedule::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, schedule_id: Uuid) -> Result<Option<Schedule>, AppError> {
        use crate::schema::schedules::dsl::*;
        let mut conn = self.pool.get().await?;

        schedules
            .filter(id.eq(schedule_id))
            .select(Schedule::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> Result<Vec<Schedule>, AppError> {
        use crate::schema::schedules::dsl::*;
        let mut conn = self.pool.get().await?;

        schedules
            .select(Schedule::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_assignment(&self, aid: Uuid) -> Result<Vec<Schedule>, AppError> {
        use crate::schema::schedules::dsl::*;
        let mut conn = self.pool.get().await?;

        schedules
            .filter(assignment_id.eq(aid))
            .select(Schedule::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_day(&self, day: Weekday) -> Result<Vec<Schedule>, AppError> {
        use crate::schema::schedules::dsl::*;
        let mut conn = self.pool.get().await?;

        schedules
            .filter(day_of_week.eq(day))
            .select(Schedule::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_by_quarter(&self, quarter_name: &str) -> Result<Vec<Schedule>, AppError> {
        use crate::schema::schedules::dsl::*;
        let mut conn = self.pool.get().await?;

        schedules
            .filter(quarter.eq(quarter_name))
            .select(Schedule::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(
        &self,
        schedule_id: Uuid,
        update_data: UpdateSchedule,
    ) -> Result<Schedule, AppError> {
        use crate::schema::schedules::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(schedules.filter(id.eq(schedule_id)))
            .set((&update_data, updated_at.eq(diesel::dsl::now)))
            .returning(Schedule::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, schedule_id: Uuid) -> Result<usize, AppError> {
        use crate::schema::schedules::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(schedules.filter(id.eq(schedule_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
