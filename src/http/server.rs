//! HTTP server setup.
//!
//! # Responsibilities
//! - Create Axum Router with the probe handler
//! - Wire up middleware (tracing, timeout, security headers)
//! - Bind server to listener and shut down on Ctrl+C

use std::time::Duration;

use axum::{
    extract::{Query, Request},
    http::{header, HeaderValue},
    middleware::{self as axum_middleware, Next},
    response::Response,
    routing::get,
    Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::http::middleware::{RouterExt, SecurityHeadersLayer};

/// Sample HTTP server protected by the security header middleware.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a server whose policy comes from `config.security.headers`.
    pub fn new(config: AppConfig) -> Self {
        let layer = SecurityHeadersLayer::from_config(&config.security.headers);
        Self::with_layer(config, layer)
    }

    /// Create a server with an explicitly built policy layer.
    pub fn with_layer(config: AppConfig, layer: SecurityHeadersLayer) -> Self {
        let router = Self::build_router(&config, layer);
        Self { router, config }
    }

    fn build_router(config: &AppConfig, layer: SecurityHeadersLayer) -> Router {
        let routes = Router::new().route("/api/probe", get(probe_handler));
        Self::apply_layers(routes, config, layer)
    }

    /// The security layer sits outside the timeout so 408 responses carry
    /// the policy too.
    #[allow(deprecated)]
    fn apply_layers(routes: Router, config: &AppConfig, layer: SecurityHeadersLayer) -> Router {
        routes
            .layer(axum_middleware::from_fn(server_header))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .security_headers(layer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[derive(Debug, Deserialize)]
struct ProbeQuery {
    echo: Option<String>,
}

/// `GET /api/probe?echo=<text>` answers with the echo, or `Pong`.
async fn probe_handler(Query(query): Query<ProbeQuery>) -> String {
    query.echo.unwrap_or_else(|| "Pong".to_string())
}

/// Identify the server the way typical hosting stacks do, so a policy
/// configured with `Server = "Disabled"` has something to strip.
async fn server_header(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().append(
        header::SERVER,
        HeaderValue::from_static(env!("CARGO_PKG_NAME")),
    );
    response
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
