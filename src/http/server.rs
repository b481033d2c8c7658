//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, metrics)
//! - Apply per-route body limits (bounded JSON, unbounded uploads)
//! - Serve on a bound listener until shutdown

use axum::{
    body::Body,
    extract::{DefaultBodyLimit, FromRef},
    http::Request,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::handlers::{
    analyze_image, analyze_pdf, chat, not_found, search_pdf, search_summary, search_versions,
};
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::intake::assets::{root_document, static_service};
use crate::intake::UploadDir;
use crate::lifecycle::shutdown;
use crate::observability::metrics;

/// Application state injected into handlers and extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl FromRef<AppState> for UploadDir {
    fn from_ref(state: &AppState) -> Self {
        UploadDir(state.config.assets.upload_dir.clone())
    }
}

/// HTTP server for the assistant endpoints.
pub struct HttpServer {
    router: Router,
    config: Arc<ServerConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// The upload directory is created here, before any request can need it.
    pub fn new(config: ServerConfig) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&config.assets.upload_dir)?;

        let config = Arc::new(config);
        let router = build_router(AppState {
            config: Arc::clone(&config),
        });
        Ok(Self { router, config })
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

fn make_span(request: &Request<Body>) -> tracing::Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id(request),
    )
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    let assets = &config.assets;

    Router::new()
        .route("/", root_document(&assets.index_file))
        .route(
            "/chat",
            post(chat).layer(DefaultBodyLimit::max(config.limits.json_body_bytes)),
        )
        .route("/search-pdf", get(search_pdf))
        .route("/search-summary", get(search_summary))
        .route("/search-versions", get(search_versions))
        .route(
            "/analyze-pdf",
            post(analyze_pdf).layer(DefaultBodyLimit::disable()),
        )
        .route(
            "/analyze-image",
            post(analyze_image).layer(DefaultBodyLimit::disable()),
        )
        .nest_service("/static", static_service(&assets.static_dir))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.timeouts.request_secs,
        )))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(make_span))
        .layer(set_request_id_layer())
}
