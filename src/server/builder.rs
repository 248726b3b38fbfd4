//! ServerBuilder for fluent API to build the intake server

use super::handlers::AppState;
use super::router::build_intake_routes;
use crate::core::service::IntakeService;
use crate::core::store::SubmissionStore;
use anyhow::Result;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the intake HTTP server
///
/// The store is created once by the caller and owned by the router state for
/// the life of the process.
///
/// # Example
///
/// ```ignore
/// let store = MongoSubmissionStore::connect(&config).await?;
/// ServerBuilder::new()
///     .with_store(store)
///     .with_static_dir(&config.static_dir)
///     .serve(&config.bind_addr())
///     .await?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn SubmissionStore>>,
    static_dir: PathBuf,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            static_dir: PathBuf::from("static"),
        }
    }

    /// Set the submission store (required)
    pub fn with_store(self, store: impl SubmissionStore + 'static) -> Self {
        self.with_shared_store(Arc::new(store))
    }

    /// Set a store that is also held elsewhere
    pub fn with_shared_store(mut self, store: Arc<dyn SubmissionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Directory served for `/` and static assets
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Build the router
    pub fn build(self) -> Result<Router> {
        let store = self
            .store
            .ok_or_else(|| anyhow::anyhow!("SubmissionStore is required. Call .with_store()"))?;

        let state = AppState {
            service: IntakeService::new(store),
        };

        Ok(build_intake_routes(state, &self.static_dir))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for a shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
