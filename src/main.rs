use clap::Parser;

use aula_api::cli::{self, Cli, Commands};
use aula_api::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_and_merge_config(&cli)?;
    cli::init_logger_from_settings(&settings)?;

    cli::execute_command(&cli, settings.clone())
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    // The executor handles dry-run and migrate commands; a plain serve
    // (or no subcommand) falls through to server startup here.
    let should_serve = matches!(
        cli.command,
        Some(Commands::Serve { dry_run: false, .. }) | None
    );

    if should_serve {
        Server::new(settings).run().await?;
    }

    Ok(())
}
