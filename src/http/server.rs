//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, panic capture,
//!   CORS, security headers, metrics)
//! - Bind server to listener
//! - Graceful shutdown on signal or on request
//!
//! # Design Decisions
//! - Failures produced by middleware (timeout, unknown method) carry the
//!   same JSON error body as handler failures

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::http::handlers::{live, points, schedule, service, upcoming};
use crate::http::request::{propagate_request_id_layer, request_id_of, set_request_id_layer};
use crate::http::response::ApiError;
use crate::lifecycle::signals::shutdown_signal;
use crate::lifecycle::startup::{build_query, StartupError};
use crate::matches::{MatchQuery, MatchStore, Season, StaticStore};
use crate::observability::metrics;
use crate::security::{cors_layer, with_security_headers};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub query: Arc<MatchQuery>,
    /// Season served when a points-table request names none.
    pub default_season: Season,
}

/// HTTP server for the match API.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a server over the built-in match data.
    pub fn new(config: AppConfig) -> Result<Self, StartupError> {
        let store = StaticStore::builtin()?;
        Self::with_store(config, Arc::new(store))
    }

    /// Create a server over any match data provider.
    pub fn with_store(config: AppConfig, store: Arc<dyn MatchStore>) -> Result<Self, StartupError> {
        let (query, default_season) = build_query(&config, store)?;
        let state = AppState {
            query: Arc::new(query),
            default_season,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let api = Router::new()
            .nest("/api/match-schedule", schedule::router())
            .nest("/api/matches", schedule::router())
            .nest("/api/upcoming-matches", upcoming::router())
            .nest("/api/points-table", points::router())
            .nest("/api/live-match", live::router())
            .route("/api/health", get(service::health))
            .route("/", get(service::index))
            .method_not_allowed_fallback(service::method_not_allowed)
            .route_layer(middleware::from_fn(metrics::track_metrics))
            .fallback(service::not_found)
            .with_state(state);

        let api = with_error_envelopes(api, Duration::from_secs(config.timeouts.request_secs))
            .layer(cors_layer(&config.security));

        let api = if config.security.enable_headers {
            with_security_headers(api)
        } else {
            api
        };

        api.layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id_of(request),
            )
        }))
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer())
    }

    /// Run the server until a signal arrives or `shutdown` fires, then drain
    /// in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {},
                    _ = shutdown.recv() => tracing::info!("Shutdown requested"),
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving the service in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Bound request time and give every failure the JSON error body.
#[allow(deprecated)]
fn with_error_envelopes(router: Router, timeout: Duration) -> Router {
    router
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::map_response(envelope_bare_errors))
        .layer(CatchPanicLayer::custom(panic_response))
}

/// Replace an error response that has no body type with the envelope.
async fn envelope_bare_errors(response: Response) -> Response {
    let status = response.status();
    let is_error = status.is_client_error() || status.is_server_error();
    if !is_error || response.headers().contains_key(header::CONTENT_TYPE) {
        return response;
    }

    let error = if status == StatusCode::REQUEST_TIMEOUT {
        ApiError::Timeout
    } else {
        ApiError::Status(status)
    };
    error.into_response()
}

/// Turn a handler panic into the 500 envelope.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(detail).into_response()
}
