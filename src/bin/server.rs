//! FeatureBoard Server Binary
//!
//! Starts the HTTP server for FeatureBoard.

use std::sync::Arc;

use clap::Parser;
use featureboard::network::Server;
use featureboard::{Config, FeatureBoard};
use tracing_subscriber::{fmt, EnvFilter};

/// FeatureBoard Server
#[derive(Parser, Debug)]
#[command(name = "featureboard-server")]
#[command(about = "Kanban-style feature tracker with a REST API")]
#[command(version)]
struct Args {
    /// Data directory (holds features.json)
    #[arg(short, long, default_value = "./data")]
    data_dir: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    listen: String,

    /// Start with an empty board instead of the sample features
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,featureboard=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("FeatureBoard Server v{}", featureboard::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .listen_addr(&args.listen)
        .seed_on_first_run(!args.no_seed)
        .build();

    // Open board
    let board = match FeatureBoard::open(config.clone()) {
        Ok(b) => Arc::new(b),
        Err(e) => {
            tracing::error!("Failed to open board: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Open http://{} in your browser", config.listen_addr);

    // Start server (returns on Ctrl+C)
    let server = Server::new(config, board);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
