// CLI module - server and maintenance commands

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::BootstrapSettings;

/// Bike Library CLI
#[derive(Parser, Debug)]
#[command(name = "bike-library")]
#[command(about = "Bike inventory REST API", long_about = None)]
pub struct Cli {
    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server
    Serve,

    /// Apply pending database migrations and exit
    Migrate,
}

/// Execute CLI command
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Bootstrap settings loaded from the environment
pub async fn execute_command(
    cli: Cli,
    settings: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_server(settings).await?,
        Commands::Migrate => migrate::run_migrations(settings).await?,
    }

    Ok(())
}
