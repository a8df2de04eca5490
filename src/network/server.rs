//! HTTP Server
//!
//! Binds the listener and serves the router until shutdown.

use std::future::Future;
use std::sync::Arc;

use axum::routing::{get, put};
use axum::Router;
use tokio::net::TcpListener;

use crate::board::FeatureBoard;
use crate::config::Config;
use crate::error::{FeatureError, Result};

use super::handlers::{create_feature, delete_feature, index, list_features, update_feature};

/// Build the application router
pub fn router(board: Arc<FeatureBoard>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/features", get(list_features).post(create_feature))
        .route("/api/features/:id", put(update_feature).delete(delete_feature))
        .with_state(board)
}

/// HTTP server for FeatureBoard
pub struct Server {
    config: Config,
    board: Arc<FeatureBoard>,
}

impl Server {
    /// Create a new server with the given config and board
    pub fn new(config: Config, board: Arc<FeatureBoard>) -> Self {
        Self { config, board }
    }

    /// Serve on `config.listen_addr` until Ctrl+C
    pub async fn run(self) -> Result<()> {
        self.run_until(ctrl_c()).await
    }

    /// Serve on `config.listen_addr` until `shutdown` resolves
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(&self.config.listen_addr)
            .await
            .map_err(|e| {
                FeatureError::Network(format!("failed to bind {}: {}", self.config.listen_addr, e))
            })?;

        self.serve(listener, shutdown).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!("Listening on http://{}", addr);

        axum::serve(listener, router(self.board))
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server on {} stopped", addr);
        Ok(())
    }
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => {
            // Without a signal handler, keep serving until the process is killed
            tracing::warn!("Could not install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
