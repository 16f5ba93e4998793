//! Errors raised while loading and validating settings.

use thiserror::Error;

/// Failure modes of the configuration layer.
///
/// `Validation` carries the dotted settings key (e.g. `jwt.secret`) so the
/// operator knows which entry to fix.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Environment variable error: {0}")]
    EnvVar(String),

    /// `AULA_CONFIG_DIR` and `AULA_CONFIG_FILE` set at the same time.
    #[error("Conflicting configuration sources: {0}")]
    ExclusiveSources(String),

    #[error("Configuration error: {0}")]
    Source(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_names_the_field() {
        let error = ConfigError::Validation {
            field: "jwt.secret".to_string(),
            message: "must be at least 32 characters".to_string(),
        };
        let text = error.to_string();
        assert!(text.contains("jwt.secret"));
        assert!(text.contains("32 characters"));
    }

    #[test]
    fn test_config_crate_errors_convert() {
        let source = config::ConfigError::NotFound("server.port".to_string());
        let error = ConfigError::from(source);
        assert!(matches!(error, ConfigError::Source(_)));
    }
}
