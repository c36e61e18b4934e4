use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use postcode_lookup::config::{load_config, AppConfig};
use postcode_lookup::observability::init_tracing;
use postcode_lookup::{AppState, HttpServer};

/// Bilingual polling-station lookup front end.
#[derive(Debug, Parser)]
#[command(name = "postcode-lookup", version)]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    init_tracing(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        lookup_backend = %config.lookup.base_url,
        lookup_timeout_ms = config.lookup.timeout_ms,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let state = AppState::from_config(config)?;
    if state.error_sink.is_enabled() {
        tracing::info!("Error tracking sink enabled");
    }

    let server = HttpServer::new(state);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
