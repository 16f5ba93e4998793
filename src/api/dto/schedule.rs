//! Schedule DTOs for API requests and responses.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::format_timestamp;
use crate::models::{NewSchedule, Schedule, UpdateSchedule, Weekday};

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap());

/// Request body for creating a new schedule slot.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub assignment_id: Uuid,
    pub day_of_week: Weekday,
    #[validate(regex(path = *TIME_RE, message = "Time must use the HH:MM format"))]
    #[schema(example = "08:30")]
    pub start_time: String,
    #[validate(regex(path = *TIME_RE, message = "Time must use the HH:MM format"))]
    #[schema(example = "09:15")]
    pub end_time: String,
    #[validate(length(min = 1, max = 50, message = "Quarter must be between 1 and 50 characters"))]
    #[schema(example = "Q1")]
    pub quarter: String,
}

impl CreateScheduleRequest {
    pub fn into_new_schedule(self) -> NewSchedule {
        NewSchedule {
            assignment_id: self.assignment_id,
            day_of_week: self.day_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
            quarter: self.quarter,
        }
    }
}

/// Request body for updating a schedule, keyed by `id`.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    pub id: Uuid,
    pub assignment_id: Option<Uuid>,
    pub day_of_week: Option<Weekday>,
    #[validate(regex(path = *TIME_RE, message = "Time must use the HH:MM format"))]
    pub start_time: Option<String>,
    #[validate(regex(path = *TIME_RE, message = "Time must use the HH:MM format"))]
    pub end_time: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Quarter must be between 1 and 50 characters"))]
    pub quarter: Option<String>,
}

impl UpdateScheduleRequest {
    pub fn into_update_schedule(self) -> UpdateSchedule {
        UpdateSchedule {
            assignment_id: self.assignment_id,
            day_of_week: self.day_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
            quarter: self.quarter,
        }
    }
}

/// Response body for schedule data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub day_of_week: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub quarter: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Schedule> for ScheduleResponse {
    fn from(schedule: Schedule) -> Self {
        Self {
            id: schedule.id,
            assignment_id: schedule.assignment_id,
            day_of_week: schedule.day_of_week,
            start_time: schedule.start_time,
            end_time: schedule.end_time,
            quarter: schedule.quarter,
            created_at: format_timestamp(schedule.created_at),
            updated_at: format_timestamp(schedule.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: &str, end: &str) -> CreateScheduleRequest {
        CreateScheduleRequest {
            assignment_id: Uuid::new_v4(),
            day_of_week: Weekday::Monday,
            start_time: start.to_string(),
            end_time: end.to_string(),
            quarter: "Q1".to_string(),
        }
    }

    #[test]
    fn test_valid_times_pass() {
        assert!(request("08:30", "09:15").validate().is_ok());
        assert!(request("00:00", "23:59").validate().is_ok());
    }

    #[test]
    fn test_invalid_times_fail() {
        assert!(request("8:30", "09:15").validate().is_err());
        assert!(request("08:30", "24:00").validate().is_err());
        assert!(request("08:30", "09:60").validate().is_err());
    }
}
