use bike_library::cli::{Cli, execute_command};
use bike_library::config::{BootstrapSettings, init_logging};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();
    let settings = BootstrapSettings::from_env()?;
    tracing::debug!("Loaded bootstrap settings: {:?}", settings);

    execute_command(cli, &settings).await
}
