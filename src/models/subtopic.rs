use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::models::Subject;

/// Subtopic model for reading from database
#[derive(Debug, Queryable, Selectable, Identifiable, Associations, Clone)]
#[diesel(table_name = crate::schema::subtopics)]
#[diesel(belongs_to(Subject))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Subtopic {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// NewSubtopic model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::subtopics)]
pub struct NewSubtopic {
    pub subject_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// UpdateSubtopic model for partial updates
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::subtopics)]
pub struct UpdateSubtopic {
    pub subject_id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}
