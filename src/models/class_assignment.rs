use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// ClassAssignment model for reading from database.
///
/// `grade_id` is an opaque identifier: the grade catalogue lives outside
/// this service, so it carries no foreign key.
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::class_assignments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ClassAssignment {
    pub id: Uuid,
    pub grade_id: Uuid,
    pub subject_id: Uuid,
    pub teacher_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// NewClassAssignment model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::class_assignments)]
pub struct NewClassAssignment {
    pub grade_id: Uuid,
    pub subject_id: Uuid,
    pub teacher_id: Uuid,
}

/// UpdateClassAssignment model for partial updates
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::class_assignments)]
pub struct UpdateClassAssignment {
    pub grade_id: Option<Uuid>,
    pub subject_id: Option<Uuid>,
    pub teacher_id: Option<Uuid>,
}
