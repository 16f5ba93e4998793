use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::models::Subtopic;

/// AiFeedback model for reading from database.
///
/// `status` marks whether the feedback step is complete.
#[derive(Debug, Queryable, Selectable, Identifiable, Associations, Clone)]
#[diesel(table_name = crate::schema::ai_feedbacks)]
#[diesel(belongs_to(Subtopic))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AiFeedback {
    pub id: Uuid,
    pub subtopic_id: Uuid,
    pub time_minutes: i32,
    pub step_number: i32,
    pub step_name: String,
    pub content: String,
    pub student_activity: Option<String>,
    pub time_allocation: String,
    pub materials_needed: Option<String>,
    pub success_indicator: Option<String>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// NewAiFeedback model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::ai_feedbacks)]
pub struct NewAiFeedback {
    pub subtopic_id: Uuid,
    pub time_minutes: i32,
    pub step_number: i32,
    pub step_name: String,
    pub content: String,
    pub student_activity: Option<String>,
    pub time_allocation: String,
    pub materials_needed: Option<String>,
    pub success_indicator: Option<String>,
    pub status: bool,
}

/// UpdateAiFeedback model for partial updates.
///
/// Nullable columns use double-`Option`: the outer layer distinguishes
/// "field absent" from "set to NULL".
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::ai_feedbacks)]
pub struct UpdateAiFeedback {
    pub subtopic_id: Option<Uuid>,
    pub time_minutes: Option<i32>,
    pub step_number: Option<i32>,
    pub step_name: Option<String>,
    pub content: Option<String>,
    pub student_activity: Option<Option<String>>,
    pub time_allocation: Option<String>,
    pub materials_needed: Option<Option<String>>,
    pub success_indicator: Option<Option<String>>,
    pub status: Option<bool>,
}
