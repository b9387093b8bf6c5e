//! slirc - connect with a TOML config and log everything the server sends.

use slirc_client::{Client, ClientConfig, ClientError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "client.toml".to_string());

    let config = ClientConfig::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    info!(
        server = %config.server.host,
        port = config.server.port,
        nick = %config.identity.nickname,
        "Starting slirc"
    );

    let client = Client::connect(&config)?;

    loop {
        match client.receive() {
            Ok(message) => info!(message = %message, "Received"),
            Err(ClientError::ConnectionClosed) => break,
            Err(e) => return Err(e.into()),
        }
    }

    info!("Connection closed");
    Ok(())
}
