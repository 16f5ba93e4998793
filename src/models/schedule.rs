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

/// Day of the week a schedule slot falls on.
///
/// Stored as lowercase text in the database and serialized the same way
/// on the wire.
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
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl diesel::query_builder::QueryId for Weekday {
    type QueryId = Weekday;
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl ToSql<Text, Pg> for Weekday {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Text, Pg> for Weekday {
    fn from_sql(
        bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            "sunday" => Ok(Weekday::Sunday),
            _ => Err(format!("Unrecognized day_of_week: {}", s).into()),
        }
    }
}

/// Schedule model for reading from database
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::schedules)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Schedule {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub day_of_week: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub quarter: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// NewSchedule model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::schedules)]
pub struct NewSchedule {
    pub assignment_id: Uuid,
    pub day_of_week: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub quarter: String,
}

/// UpdateSchedule model for partial updates
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::schedules)]
pub struct UpdateSchedule {
    pub assignment_id: Option<Uuid>,
    pub day_of_week: Option<Weekday>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub quarter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_serialization() {
        let json = serde_json::to_string(&Weekday::Wednesday).unwrap();
        assert_eq!(json, "\"wednesday\"");
    }

    #[test]
    fn test_weekday_deserialization() {
        let day: Weekday = serde_json::from_str("\"friday\"").unwrap();
        assert_eq!(day, Weekday::Friday);
    }

    #[test]
    fn test_weekday_rejects_unknown() {
        let result = serde_json::from_str::<Weekday>("\"someday\"");
        assert!(result.is_err());
    }
}
