//! Sample server for the security header middleware.
//!
//! Loads configuration (TOML file, then `Security__Headers__*` environment
//! overrides), builds the header policy and serves `GET /api/probe`.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use security_headers::config::{load_config, AppConfig, HeadersConfig};
use security_headers::observability::{logging, metrics};
use security_headers::HttpServer;

#[derive(Debug, Parser)]
#[command(name = "security-headers", version, about)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "SECURITY_HEADERS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind address from the configuration file.
    #[arg(short, long, env = "SECURITY_HEADERS_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    config.security.headers.merge(HeadersConfig::from_env());
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?args.config,
        bind_address = %config.server.bind_address,
        "security-headers starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics endpoint");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
