//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define API metrics (request count, latency)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `livematch_requests_total` (counter): requests by method, route, status
//! - `livematch_request_duration_seconds` (histogram): latency by method, route
//!
//! # Design Decisions
//! - Labels use the matched route template (`/api/matches/{id}`), never the
//!   raw path, so label cardinality stays bounded
//! - Without an installed recorder every call is a no-op

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REQUESTS_TOTAL: &str = "livematch_requests_total";
pub const REQUEST_DURATION: &str = "livematch_request_duration_seconds";

/// Route label for requests no route claimed.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Install the Prometheus recorder and its scrape listener on `addr`.
///
/// Must be called from inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one finished request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!(REQUESTS_TOTAL, &labels).increment(1);

    let labels = [("method", method.to_string()), ("route", route.to_string())];
    metrics::histogram!(REQUEST_DURATION, &labels).record(start.elapsed().as_secs_f64());
}

/// Count a request that fell through to the fallback.
///
/// The route layer never sees these, so only the counter is updated.
pub fn record_unmatched(method: &str, status: u16) {
    let labels = [
        ("method", method.to_string()),
        ("route", UNMATCHED_ROUTE.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!(REQUESTS_TOTAL, &labels).increment(1);
}

/// Route-layer middleware timing every matched request.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());

    let response = next.run(request).await;
    record_request(&method, &route, response.status().as_u16(), start);
    response
}
