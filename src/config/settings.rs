//! Configuration settings structures
//!
//! Defines all configuration structures that can be loaded from TOML files
//! and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "aula-api".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_keep_alive_timeout() -> u64 {
    75
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/app.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_jwt_secret() -> String {
    String::new()
}

fn default_token_expiration() -> i64 {
    24 // hours
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive_timeout")]
    pub keep_alive_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            keep_alive_timeout: default_keep_alive_timeout(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// Diesel database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[serde(default)]
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Whether to automatically run pending migrations on startup
    #[serde(default)]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
            auto_migrate: false,
        }
    }
}

// ============================================================================
// JWT Configuration
// ============================================================================

/// JWT authentication configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Secret key for signing JWT tokens.
    /// Must be a strong random string in production, supplied via
    /// environment variable rather than committed configuration.
    #[serde(default = "default_jwt_secret")]
    pub secret: String,

    /// Token expiration time in hours
    #[serde(default = "default_token_expiration")]
    pub token_expiration: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: default_jwt_secret(),
            token_expiration: default_token_expiration(),
        }
    }
}

impl JwtConfig {
    /// Validates the JWT configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::Validation {
                field: "jwt.secret".to_string(),
                message: "JWT secret cannot be empty".to_string(),
            });
        }

        if self.secret.len() < 32 {
            return Err(ConfigError::Validation {
                field: "jwt.secret".to_string(),
                message: "JWT secret should be at least 32 characters for security".to_string(),
            });
        }

        if self.token_expiration <= 0 {
            return Err(ConfigError::Validation {
                field: "jwt.token_expiration".to_string(),
                message: "Token expiration must be positive".to_string(),
            });
        }

        Ok(())
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings into the runtime LoggerConfig used by the
    /// logger module.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console_config = ConsoleConfig::new(self.console.enabled, self.console.colored);
        let format =
            self.file
                .format
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::Validation {
                    field: "logger.file.format".to_string(),
                    message: e.to_string(),
                })?;
        let file_config = FileConfig::new(
            self.file.enabled,
            PathBuf::from(self.file.path),
            self.file.append,
            format,
        )
        .map_err(|e| ConfigError::Validation {
            field: "logger.file".to_string(),
            message: e.to_string(),
        })?;

        LoggerConfig::new(console_config, file_config, self.level).map_err(|e| {
            ConfigError::Validation {
                field: "logger".to_string(),
                message: e.to_string(),
            }
        })
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// JWT authentication configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

impl Settings {
    /// Validates settings that have constraints beyond deserialization.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt.validate()?;
        self.logger.clone().into_logger_config()?;

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Validation {
                field: "database".to_string(),
                message: "min_connections cannot exceed max_connections".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_config_defaults() {
        let config = ApplicationConfig::default();
        assert_eq!(config.name, "aula-api");
        assert_eq!(config.version, crate::pkg_version());
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.keep_alive_timeout, 75);
    }

    #[test]
    fn test_server_config_address() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.connection_timeout, 30);
        assert!(!config.auto_migrate);
    }

    #[test]
    fn test_jwt_config_defaults() {
        let config = JwtConfig::default();
        assert_eq!(config.secret, "");
        assert_eq!(config.token_expiration, 24);
    }

    #[test]
    fn test_jwt_config_validate_empty_secret() {
        let config = JwtConfig {
            secret: "".to_string(),
            token_expiration: 24,
        };
        let result = config.validate();
        assert!(result.is_err());
        if let Err(ConfigError::Validation { field, message }) = result {
            assert_eq!(field, "jwt.secret");
            assert!(message.contains("cannot be empty"));
        }
    }

    #[test]
    fn test_jwt_config_validate_short_secret() {
        let config = JwtConfig {
            secret: "short".to_string(),
            token_expiration: 24,
        };
        let result = config.validate();
        assert!(result.is_err());
        if let Err(ConfigError::Validation { field, message }) = result {
            assert_eq!(field, "jwt.secret");
            assert!(message.contains("at least 32 characters"));
        }
    }

    #[test]
    fn test_jwt_config_validate_negative_expiration() {
        let config = JwtConfig {
            secret: "a".repeat(32),
            token_expiration: -1,
        };
        let result = config.validate();
        assert!(result.is_err());
        if let Err(ConfigError::Validation { field, .. }) = result {
            assert_eq!(field, "jwt.token_expiration");
        }
    }

    #[test]
    fn test_jwt_config_validate_success() {
        let config = JwtConfig {
            secret: "a".repeat(32),
            token_expiration: 24,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logger_settings_defaults() {
        let settings = LoggerSettings::default();
        assert_eq!(settings.level, "info");
        assert!(settings.console.enabled);
        assert!(!settings.file.enabled);
    }

    #[test]
    fn test_logger_settings_into_logger_config() {
        let settings = LoggerSettings {
            level: "debug".to_string(),
            console: ConsoleSettings {
                enabled: true,
                colored: false,
            },
            file: FileSettings::default(),
        };
        let config = settings.into_logger_config().expect("Should convert");
        assert_eq!(config.level, "debug");
        assert!(config.console.enabled);
        assert!(!config.console.colored);
        assert!(!config.file.enabled);
    }

    #[test]
    fn test_logger_settings_invalid_format() {
        let settings = LoggerSettings {
            file: FileSettings {
                format: "invalid".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = settings.into_logger_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_validate_requires_jwt_secret() {
        let settings = Settings::default();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_validate_pool_sizing() {
        let settings = Settings {
            jwt: JwtConfig {
                secret: "a".repeat(32),
                token_expiration: 24,
            },
            database: DatabaseConfig {
                min_connections: 20,
                max_connections: 10,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = settings.validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_validate_success() {
        let settings = Settings {
            jwt: JwtConfig {
                secret: "a".repeat(32),
                token_expiration: 24,
            },
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }
}
