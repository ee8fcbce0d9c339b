//! Binary crate for the `weather-server` service.

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use weather_server::{AppState, cli::Cli, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    server::init_tracing(config.server.debug);
    info!(?config, "Loaded configuration");

    // Refuse to start in a state where no request could be served.
    let faults = config.faults();
    if !faults.is_empty() {
        for fault in &faults {
            error!("{fault}");
        }
        std::process::exit(1);
    }

    let state = Arc::new(AppState::from_config(&config)?);

    if let Err(e) = server::serve(&config, state).await {
        error!("HTTP server exited: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
