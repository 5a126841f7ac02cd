//! vegd — Vegvisir daemon.
//!
//! Serves the location-advisory service over gRPC, sharing one read-only
//! feature store across every client session.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tonic::transport::Server;
use tracing::info;

use vegvisir::server::VegvisirService;
use vegvisir::server::config::Config;
use vegvisir::server::proto::vegvisir_server::VegvisirServer;

/// Vegvisir daemon — location advisory service.
#[derive(Parser)]
#[command(name = "vegd")]
#[command(version = vegvisir::PKG_VERSION)]
#[command(about = "Vegvisir location-advisory daemon")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    let addr: SocketAddr = config.server.address.parse().map_err(|e| {
        vegvisir::VegvisirError::Configuration(format!("Invalid address: {e}"))
    })?;

    let store = Arc::new(config.store());
    info!(
        version = vegvisir::PKG_VERSION,
        %addr,
        features = store.len(),
        "vegd starting"
    );

    let service = VegvisirService::new(store)
        .with_pace(Duration::from_millis(config.server.pace_ms));
    let server = VegvisirServer::new(service);

    Server::builder().add_service(server).serve(addr).await?;

    Ok(())
}
