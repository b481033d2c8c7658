//! Assistant stub server.
//!
//! A small HTTP service with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!  Client Request
//!  ──────▶ request id ──▶ trace ──▶ timeout ──▶ metrics ──▶ router
//!                                                             │
//!       ┌─────────────────────┬─────────────────────┬─────────┴──────────┐
//!       │ GET /, /static/*    │ POST /chat          │ POST /analyze-*    │ GET /search-*
//!       ▼                     ▼                     ▼                    ▼
//!  ┌──────────┐         ┌─────────────┐       ┌───────────────┐     ┌──────────┐
//!  │  assets  │         │ body intake │       │ upload intake │     │  search  │
//!  └──────────┘         └──────┬──────┘       └───────┬───────┘     └──────────┘
//!                              ▼                      │ ──▶ uploads/
//!                         ┌──────────┐          ┌─────▼─────┐
//!                         │   chat   │          │  analyze  │
//!                         └──────────┘          └───────────┘
//! ```

use std::path::PathBuf;

use assistant_server::config::{load_config, ServerConfig};
use assistant_server::lifecycle::{signals, Shutdown};
use assistant_server::observability::{logging, metrics};
use assistant_server::HttpServer;
use clap::Parser;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "assistant-server")]
#[command(about = "Echo chat, canned search and upload receipts over HTTP", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    logging::init_logging(&config.observability)?;

    tracing::info!("assistant-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.bind_address(),
        static_dir = ?config.assets.static_dir,
        upload_dir = ?config.assets.upload_dir,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(config.bind_address()).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("🚀 Server running at http://localhost:{}", local_addr.port());

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
