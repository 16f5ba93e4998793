use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Subject model for reading from database
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::subjects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// NewSubject model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::subjects)]
pub struct NewSubject {
    pub name: String,
    pub description: Option<String>,
}

/// UpdateSubject model for partial updates
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::subjects)]
pub struct UpdateSubject {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}
