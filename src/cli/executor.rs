//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};

/// Execute a CLI command with the given settings.
///
/// Dispatches to the appropriate command handler based on the parsed
/// CLI arguments. For a non-dry-run serve command this returns Ok and
/// leaves the actual server startup to main.
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    validate_command_args(cli)?;

    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) if *dry_run => {
            ServeCommandHandler::new(settings).execute(true).await
        }
        Some(Commands::Serve { .. }) | None => Ok(()),
        Some(Commands::Migrate { dry_run, rollback }) => {
            MigrateCommandHandler::new(settings)
                .execute(*dry_run, *rollback)
                .await
        }
    }
}

/// Validate command arguments before execution
fn validate_command_args(cli: &Cli) -> AppResult<()> {
    if let Err(msg) = cli.validate() {
        return Err(AppError::BadRequest { message: msg });
    }

    if let Some(Commands::Migrate { rollback, .. }) = &cli.command
        && let Some(steps) = rollback
        && *steps > 50
    {
        eprintln!(
            "Warning: Rolling back {} migrations is a large operation. Consider using smaller steps.",
            steps
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::Cli;
    use crate::config::JwtConfig;
    use clap::Parser;

    fn create_valid_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/test".to_string();
        config.jwt = JwtConfig {
            secret: "a".repeat(32),
            token_expiration: 24,
        };
        config
    }

    #[tokio::test]
    async fn test_execute_serve_dry_run() {
        let cli = Cli::try_parse_from(["aula-api", "serve", "--dry-run"]).unwrap();
        let result = execute_command(&cli, create_valid_config()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_serve_normal() {
        let cli = Cli::try_parse_from(["aula-api", "serve"]).unwrap();
        let result = execute_command(&cli, create_valid_config()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_validate_conflicting_args() {
        let cli = Cli {
            command: Some(Commands::Migrate {
                dry_run: true,
                rollback: Some(5),
            }),
            config: None,
            env: None,
            verbose: false,
            quiet: false,
        };
        let result = validate_command_args(&cli);
        assert!(result.is_err());
    }
}
