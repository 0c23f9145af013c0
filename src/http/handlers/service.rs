//! Service routes: health check, API index and the 404/405 fallbacks.

use axum::http::{Method, Uri};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::http::response::{ApiError, ApiResponse};
use crate::observability::metrics;

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct IndexData {
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub points_table: &'static str,
    pub match_schedule: &'static str,
    pub matches: &'static str,
    pub upcoming_matches: &'static str,
    pub live_match: &'static str,
    pub health: &'static str,
}

pub async fn health() -> ApiResponse<HealthData> {
    ApiResponse::ok(
        HealthData {
            status: "OK",
            timestamp: Utc::now(),
        },
        "IPL Backend API is running",
    )
}

pub async fn index() -> ApiResponse<IndexData> {
    ApiResponse::ok(
        IndexData {
            version: env!("CARGO_PKG_VERSION"),
            endpoints: Endpoints {
                points_table: "/api/points-table",
                match_schedule: "/api/match-schedule",
                matches: "/api/matches",
                upcoming_matches: "/api/upcoming-matches",
                live_match: "/api/live-match",
                health: "/api/health",
            },
        },
        "Welcome to IPL Backend API",
    )
}

pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    metrics::record_unmatched(method.as_str(), 404);
    ApiError::RouteNotFound(uri.path().to_string())
}

/// The route exists but only answers GET/HEAD.
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method.to_string())
}
