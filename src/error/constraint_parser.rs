use std::sync::OnceLock;

use regex::Regex;

/// Parses PostgreSQL constraint violation messages into structured pieces.
pub struct ConstraintParser;

/// Compiled regex patterns, built once and cached.
struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // "Key (field)=(value)" in DETAIL lines
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").unwrap(),
            // column names in quotes
            column_name: Regex::new(r#"column "([^"]+)""#).unwrap(),
            // table names in quotes
            table_name: Regex::new(r#"table "([^"]+)""#).unwrap(),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Extracts (entity, field, value) from a unique violation.
    ///
    /// Prefers the constraint name (e.g. `users_email_key`), falling back to
    /// the `Key (field)=(value)` DETAIL line.
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_constraint_name(constraint) {
                if let Some(value) = Self::extract_value_from_message(message) {
                    return Some((entity, field, value));
                }
                return Some((entity, field, "duplicate_value".to_string()));
            }
        }

        if let Some((field, value)) = Self::extract_key_value_from_message(message) {
            let entity =
                Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
            return Some((entity, field, value));
        }

        None
    }

    /// Extracts (entity, field) from a not-null violation.
    pub fn parse_not_null_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(field) = Self::extract_column_from_message(message) {
            let entity = Self::extract_table_from_message(message)
                .or_else(|| {
                    constraint_name.and_then(|c| Self::parse_constraint_name(c).map(|(e, _)| e))
                })
                .unwrap_or_else(|| "resource".to_string());
            return Some((entity, field));
        }

        None
    }

    /// Extracts (entity, field, referenced_value) from a foreign key violation.
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_foreign_key_constraint_name(constraint) {
                if let Some(value) = Self::extract_value_from_message(message) {
                    return Some((entity, field, value));
                }
                return Some((entity, field, "invalid_reference".to_string()));
            }
        }

        if let Some((field, value)) = Self::extract_key_value_from_message(message) {
            let entity =
                Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
            return Some((entity, field, value));
        }

        None
    }

    /// Extracts (entity, field) from a check violation.
    pub fn parse_check_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_constraint_name(constraint) {
                return Some((entity, field));
            }
        }

        if let Some(field) = Self::extract_column_from_message(message) {
            let entity =
                Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
            return Some((entity, field));
        }

        None
    }

    /// Splits constraint names like `users_email_key` into ("users", "email").
    pub fn parse_constraint_name(constraint_name: &str) -> Option<(String, String)> {
        let parts: Vec<&str> = constraint_name.split('_').collect();
        if parts.len() >= 3 {
            let entity = parts[0].to_string();
            let field = parts[1].to_string();
            return Some((entity, field));
        }
        None
    }

    /// Splits fkey names like `subtopics_subject_id_fkey` into
    /// ("subtopics", "subject_id").
    pub fn parse_foreign_key_constraint_name(constraint_name: &str) -> Option<(String, String)> {
        if let Some(without_suffix) = constraint_name.strip_suffix("_fkey") {
            let parts: Vec<&str> = without_suffix.split('_').collect();
            if parts.len() >= 2 {
                let entity = parts[0].to_string();
                // multi-part field names like "subject_id"
                let field = parts[1..].join("_");
                return Some((entity, field));
            }
        }
        None
    }

    pub fn extract_column_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        Self::patterns().key_value.captures(message).and_then(|caps| {
            let field = caps.get(1)?.as_str().to_string();
            let value = caps.get(2)?.as_str().to_string();
            Some((field, value))
        })
    }

    pub fn extract_value_from_message(message: &str) -> Option<String> {
        if let Some((_, value)) = Self::extract_key_value_from_message(message) {
            return Some(value);
        }

        // Fallback for messages without a DETAIL line: first quoted token.
        if let Some(start) = message.find('"') {
            if let Some(end) = message[start + 1..].find('"') {
                return Some(message[start + 1..start + 1 + end].to_string());
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unique_violation_with_constraint_name() {
        let message = "duplicate key value violates unique constraint \"users_email_key\"\nDETAIL: Key (email)=(ana@example.com) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, Some("users_email_key"));
        assert_eq!(
            result,
            Some((
                "users".to_string(),
                "email".to_string(),
                "ana@example.com".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_without_constraint_name() {
        let message = "duplicate key value violates unique constraint\nDETAIL: Key (name)=(Matemáticas) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, None);
        assert_eq!(
            result,
            Some((
                "resource".to_string(),
                "name".to_string(),
                "Matemáticas".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_not_null_violation() {
        let message = "null value in column \"email\" violates not-null constraint";
        let result = ConstraintParser::parse_not_null_violation(message, None);
        assert_eq!(result, Some(("resource".to_string(), "email".to_string())));
    }

    #[test]
    fn test_parse_foreign_key_violation() {
        let message = "insert or update on table \"subtopics\" violates foreign key constraint \"subtopics_subject_id_fkey\"\nDETAIL: Key (subject_id)=(3f6c0a7e) is not present in table \"subjects\".";
        let result =
            ConstraintParser::parse_foreign_key_violation(message, Some("subtopics_subject_id_fkey"));
        assert_eq!(
            result,
            Some((
                "subtopics".to_string(),
                "subject_id".to_string(),
                "3f6c0a7e".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_check_violation() {
        let message = "new row for relation \"progress_records\" violates check constraint \"progress_records_percentage_check\"";
        let result =
            ConstraintParser::parse_check_violation(message, Some("progress_records_percentage_check"));
        assert_eq!(
            result,
            Some(("progress".to_string(), "records".to_string()))
        );
    }

    #[test]
    fn test_parse_constraint_name() {
        let result = ConstraintParser::parse_constraint_name("users_email_key");
        assert_eq!(result, Some(("users".to_string(), "email".to_string())));

        let result = ConstraintParser::parse_constraint_name("invalid");
        assert_eq!(result, None);
    }

    #[test]
    fn test_parse_foreign_key_constraint_name() {
        let result =
            ConstraintParser::parse_foreign_key_constraint_name("schedules_assignment_id_fkey");
        assert_eq!(
            result,
            Some(("schedules".to_string(), "assignment_id".to_string()))
        );

        let result = ConstraintParser::parse_foreign_key_constraint_name("not_a_foreign_key");
        assert_eq!(result, None);
    }

    #[test]
    fn test_extract_key_value_from_message() {
        let message = "Key (user_id)=(123) is not present in table";
        let result = ConstraintParser::extract_key_value_from_message(message);
        assert_eq!(result, Some(("user_id".to_string(), "123".to_string())));
    }

    #[test]
    fn test_extract_value_fallback_to_quotes() {
        let message = "some error with \"quoted_value\" in it";
        let result = ConstraintParser::extract_value_from_message(message);
        assert_eq!(result, Some("quoted_value".to_string()));
    }

    #[test]
    fn test_graceful_parsing_failures() {
        let message = "completely unrelated error message";
        assert_eq!(ConstraintParser::parse_unique_violation(message, None), None);
        assert_eq!(ConstraintParser::parse_not_null_violation(message, None), None);
        assert_eq!(
            ConstraintParser::parse_foreign_key_violation(message, None),
            None
        );
        assert_eq!(ConstraintParser::parse_check_violation(message, None), None);
    }
}
