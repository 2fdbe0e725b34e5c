//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all redirect handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind the server to a listener and serve with graceful shutdown
//! - Adapt requests/outcomes between the transport and the engine

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::backend::ServiceInfo;
use crate::config::AppConfig;
use crate::http::{request, response};
use crate::observability::TelemetrySink;
use crate::redirect::RedirectEngine;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RedirectEngine>,
    pub info: Arc<ServiceInfo>,
}

/// HTTP server for the redirector.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let settings = config.redirect.to_settings();

        let info = Arc::new(ServiceInfo {
            environment: settings.environment.clone(),
            version: settings.version.clone(),
            target_url: settings.target_url.clone(),
        });
        let engine = Arc::new(RedirectEngine::new(settings, Arc::new(TelemetrySink)));

        let state = AppState { engine, info };
        let router = Self::build_router(&config, state);

        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(redirect_handler))
            .route("/", any(redirect_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Catch-all handler: snapshot the request, let the engine decide, and
/// write whatever outcome comes back.
async fn redirect_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
) -> Response {
    let snapshot = request::snapshot(&request, Some(addr));
    let outcome = state.engine.handle(&snapshot);
    response::respond(outcome, request.uri().path(), &state.info)
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
