//! Solana Action server for SOL transfers.
//!
//! # Usage
//!
//! ```bash
//! # Run with default config (config.toml in current directory)
//! cargo run -p solblink-server --release
//!
//! # Run with custom config path
//! CONFIG=/path/to/config.toml cargo run -p solblink-server
//!
//! # Configure logging level
//! RUST_LOG=debug cargo run -p solblink-server
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG` — Path to TOML configuration file (default: `config.toml`)
//! - `HOST` — Override bind address (default: `0.0.0.0`)
//! - `PORT` — Override port (default: `8080`)
//! - `RUST_LOG` — Log level filter (default: `info`)

mod util;

use std::net::SocketAddr;
use std::sync::Arc;

use solblink_server::config::ServerConfig;
use solblink_server::{AppState, app};
use solblink_svm::SolanaChainProvider;
use tracing_subscriber::EnvFilter;

use crate::util::SigDown;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("Action server failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::load()?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        network = %config.network,
        default_destination = %config.default_destination,
        default_amount = %config.default_amount,
        "Loaded configuration"
    );

    let provider = SolanaChainProvider::new(config.network, config.rpc_url());
    let state = Arc::new(AppState {
        provider: Arc::new(provider),
        defaults: config.transfer_defaults(),
        public_origin: config.public_origin(),
        action: config.action.clone(),
    });

    let router = app(state, &config.static_dir);

    let sig_down = SigDown::try_new()?;
    let token = sig_down.cancellation_token();

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Action server listening on http://{addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { token.cancelled().await })
        .await?;

    sig_down.recv().await;
    tracing::info!("Action server shut down gracefully");
    Ok(())
}
