//! HTTP server.
//!
//! Serves `GET /analyze` plus the informational `/` and `/health` routes.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::analyzer::NewsSentimentAnalyzer;

/// HTTP server for the analyze endpoint.
pub struct ApiServer {
    analyzer: Arc<NewsSentimentAnalyzer>,
}

impl ApiServer {
    /// Create a new server.
    #[must_use]
    pub fn new(analyzer: NewsSentimentAnalyzer) -> Self {
        Self { analyzer: Arc::new(analyzer) }
    }

    /// Build the router without binding a socket.
    #[must_use]
    pub fn router(&self) -> axum::Router {
        routes::create_router(Arc::clone(&self.analyzer))
    }

    /// Bind to `addr` and serve until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run(self, addr: SocketAddr) -> anyhow::Result<()> {
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("HTTP server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for ApiServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiServer").finish_non_exhaustive()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
