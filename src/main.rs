use clap::Parser as _;
use dotenvy::dotenv;
use tracing::{error, info};
use vitals_bootstrap::cli::{Cli, Commands, SetupCmd};
use vitals_bootstrap::setup::setup;
use vitals_bootstrap::utils::logging::init_logging;
use vitals_bootstrap::SetupResult;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();
    info!("Starting vitals bootstrap");
    let cli = Cli::parse();

    match &cli.command {
        Commands::Setup { setup_command } => {
            info!("Executing setup command with args: {:?}", setup_command);
            match run_setup(setup_command).await {
                Ok(_) => {
                    info!("Vitals database setup completed successfully");
                }
                Err(e) => {
                    error!(
                        error = %e,
                        error_chain = ?e,
                        "Failed to set up vitals database"
                    );
                    panic!("Failed to set up vitals database: {}", e);
                }
            }
        }
    }
}

/// run_setup - Provisions the vitals schema with the provided configuration
async fn run_setup(setup_cmd: &SetupCmd) -> SetupResult<()> {
    setup(setup_cmd).await
}
