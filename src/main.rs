use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use livematch_api::config::{load_config, AppConfig};
use livematch_api::lifecycle::{Shutdown, StartupError};
use livematch_api::observability::{logging, metrics};
use livematch_api::HttpServer;

/// IPL match-data API server.
#[derive(Parser)]
#[command(name = "livematch-api", version, about)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long, env = "LIVEMATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Listen on this port instead of the configured one.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path).map_err(StartupError::from)?,
        None => AppConfig::default(),
    };
    if let Some(port) = cli.port {
        config.listener.bind_address = with_port(&config.listener.bind_address, port)?;
    }

    logging::init_logging(&config.observability)
        .map_err(|e| StartupError::Logging(e.to_string()))?;

    tracing::info!("livematch-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        default_season = %config.data.default_season,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse().map_err(|_| {
            StartupError::InvalidSetting {
                field: "observability.metrics_address",
                value: config.observability.metrics_address.clone(),
            }
        })?;
        metrics::init_metrics(addr).map_err(|e| StartupError::Metrics(e.to_string()))?;
    }

    let bind_address = config.listener.bind_address.clone();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: bind_address.clone(),
            source,
        })?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        health = %format!("http://{}/api/health", local_addr),
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Replace the port of a validated bind address.
fn with_port(bind_address: &str, port: u16) -> Result<String, StartupError> {
    let mut addr: SocketAddr = bind_address.parse().map_err(|_| StartupError::InvalidSetting {
        field: "listener.bind_address",
        value: bind_address.to_string(),
    })?;
    addr.set_port(port);
    Ok(addr.to_string())
}
