use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// User model for reading from database
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// NewUser model for inserting new records
/// Derives Insertable for INSERT operations
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub is_premium: bool,
}

/// UpdateUser model for partial updates
/// Derives AsChangeset for UPDATE operations with optional fields.
/// `image` and `bio` use double-Option so an explicit null clears the column
/// while an absent field leaves it untouched.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::users)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub image: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub is_premium: Option<bool>,
}
