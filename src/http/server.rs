//! Application state, router assembly, and the serve loop.
//!
//! # Responsibilities
//! - Build the Axum router from the static route table
//! - Mount the static-asset passthroughs
//! - Wire the middleware pipeline in its fixed order
//! - Serve with graceful shutdown

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Extension, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use url::Url;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::handlers::pages;
use crate::http::middleware::{set_client_identity, set_locale};
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::i18n::Locale;
use crate::lookup::{HttpLookupBackend, LookupBackend};
use crate::observability::ErrorSink;
use crate::render::{BasicRenderer, Renderer, Template};
use crate::routing::{dispatch, ROUTES};
use crate::sandbox::SandboxTable;

/// Shared state injected into handlers. Everything here is built once
/// at startup and read-only afterwards, so it clones cheaply and needs
/// no locking across in-flight requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub backend: Arc<dyn LookupBackend>,
    pub sandbox: Arc<SandboxTable>,
    pub renderer: Arc<dyn Renderer>,
    pub error_sink: Arc<ErrorSink>,
}

impl AppState {
    /// Production wiring: HTTP backend client, built-in renderer,
    /// error sink from the environment.
    pub fn from_config(config: AppConfig) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(&config.lookup.base_url)?;
        Ok(Self {
            config: Arc::new(config),
            backend: Arc::new(HttpLookupBackend::new(base_url)),
            sandbox: Arc::new(SandboxTable::new()),
            renderer: Arc::new(BasicRenderer),
            error_sink: Arc::new(ErrorSink::from_env()),
        })
    }

    /// Surface an unexpected internal fault: forward it to the error
    /// sink and answer with the generic server-error page. This is the
    /// only fault class that is fatal to a request.
    pub fn internal_fault(&self, error: AppError) -> Response {
        tracing::error!(error = %error, "Unexpected internal fault");
        self.error_sink.capture(&error);
        error.into_response()
    }

    /// Render a page, converting a render failure into the generic
    /// server-error response via [`AppState::internal_fault`].
    pub fn render_page(
        &self,
        template: Template,
        locale: Locale,
        data: Value,
        status: StatusCode,
    ) -> Response {
        match self.renderer.render(template, locale, &data) {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => self.internal_fault(AppError::Render(e)),
        }
    }
}

/// Build the full router: the route table, asset mounts, fallback, and
/// the middleware pipeline (request ID → client identity → locale →
/// trace, outermost first).
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new();
    for entry in ROUTES {
        router = router.route(
            entry.path,
            dispatch::method_router(entry.kind).layer(Extension(entry)),
        );
    }

    router
        .nest_service("/themes", ServeDir::new(&state.config.static_assets.themes_dir))
        .nest_service("/static", ServeDir::new(&state.config.static_assets.static_dir))
        .fallback(pages::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
                .layer(axum::middleware::from_fn(set_client_identity))
                .layer(axum::middleware::from_fn(set_locale))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(state.config.listener.request_timeout()))
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
        )
        .with_state(state)
}

/// HTTP server for the lookup front end.
pub struct HttpServer {
    router: Router,
    config: Arc<AppConfig>,
}

impl HttpServer {
    pub fn new(state: AppState) -> Self {
        let config = state.config.clone();
        let router = build_router(state);
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            lookup_backend = %self.config.lookup.base_url,
            lookup_timeout_ms = self.config.lookup.timeout_ms,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
