#![allow(clippy::must_use_candidate)]

mod demo;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use errmap_axum::ErrorBoundary;
use errmap_config::Config;
use errmap_dispatch::ErrorDispatcher;
use tower_http::trace::TraceLayer;

pub use demo::parse_int_handler;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
    dispatcher: Arc<ErrorDispatcher>,
}

impl Server {
    /// Build the server from configuration
    pub fn new(config: &Config) -> Self {
        let listen_address = config.server.listen_address_or_default();
        let dispatcher = Arc::new(build_dispatcher(config));

        tracing::debug!(
            handlers = ?dispatcher.handler_names().collect::<Vec<_>>(),
            "error dispatcher ready"
        );

        let mut app = demo::router();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health));
        }

        // Error boundary wraps every route above, tracing wraps the boundary
        let app = ErrorBoundary::new(Arc::clone(&dispatcher))
            .wrap(app)
            .layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address,
            dispatcher,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the listen address from the command line
    #[must_use]
    pub const fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    #[must_use]
    pub const fn dispatcher(&self) -> &Arc<ErrorDispatcher> {
        &self.dispatcher
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Liveness probe, plain text
async fn health() -> &'static str {
    "ok"
}

/// Handler chain for the service
///
/// Application handlers come first so they win over the generic ones.
#[must_use]
pub fn build_dispatcher(config: &Config) -> ErrorDispatcher {
    ErrorDispatcher::builder()
        .handler(parse_int_handler())
        .handlers(errmap_axum::common_handlers())
        .fallback_message(config.errors.fallback_message())
        .build()
}
