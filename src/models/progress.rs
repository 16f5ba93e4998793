use std::io::Write;

use chrono::{DateTime, Utc};
use diesel::AsExpression;
use diesel::FromSqlRow;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Subtopic, User};

/// Kind of progress a user is making on a subtopic.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
    AsExpression,
    FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum ProgressType {
    Learning,
    Teaching,
    Mastery,
}

impl ProgressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressType::Learning => "learning",
            ProgressType::Teaching => "teaching",
            ProgressType::Mastery => "mastery",
        }
    }
}

impl diesel::query_builder::QueryId for ProgressType {
    type QueryId = ProgressType;
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl ToSql<Text, Pg> for ProgressType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Text, Pg> for ProgressType {
    fn from_sql(
        bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "learning" => Ok(ProgressType::Learning),
            "teaching" => Ok(ProgressType::Teaching),
            "mastery" => Ok(ProgressType::Mastery),
            _ => Err(format!("Unrecognized progress_type: {}", s).into()),
        }
    }
}

/// Progress model for reading from database.
///
/// A record is considered completed once `completed_at` is set.
#[derive(Debug, Queryable, Selectable, Identifiable, Associations, Clone)]
#[diesel(table_name = crate::schema::progress_records)]
#[diesel(belongs_to(User))]
#[diesel(belongs_to(Subtopic))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Progress {
    pub id: Uuid,
    pub user_id: Uuid,
    pub subtopic_id: Uuid,
    pub progress_type: ProgressType,
    pub percentage: f64,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// NewProgress model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::progress_records)]
pub struct NewProgress {
    pub user_id: Uuid,
    pub subtopic_id: Uuid,
    pub progress_type: ProgressType,
    pub percentage: f64,
    pub completed_at: Option<DateTime<Utc>>,
}

/// UpdateProgress model for partial updates
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::progress_records)]
pub struct UpdateProgress {
    pub user_id: Option<Uuid>,
    pub subtopic_id: Option<Uuid>,
    pub progress_type: Option<ProgressType>,
    pub percentage: Option<f64>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_type_serialization() {
        let json = serde_json::to_string(&ProgressType::Mastery).unwrap();
        assert_eq!(json, "\"mastery\"");
    }

    #[test]
    fn test_progress_type_deserialization() {
        let kind: ProgressType = serde_json::from_str("\"learning\"").unwrap();
        assert_eq!(kind, ProgressType::Learning);
    }

    #[test]
    fn test_progress_type_rejects_unknown() {
        assert!(serde_json::from_str::<ProgressType>("\"guessing\"").is_err());
    }
}
