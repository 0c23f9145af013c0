//! `/api/match-schedule` (also mounted as `/api/matches`).

use axum::{
    extract::State,
    routing::get,
    Router,
};
use serde::Serialize;

use crate::http::request::ApiPath;
use crate::http::response::{ApiError, ApiResponse};
use crate::http::server::AppState;
use crate::matches::types::{Match, MatchStatus};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(all_matches))
        .route("/live", get(live_match))
        .route("/upcoming", get(upcoming_matches))
        .route("/completed", get(completed_matches))
        .route("/status/{status}", get(matches_by_status))
        .route("/{id}", get(match_by_id))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleData {
    pub total_matches: usize,
    pub matches: Vec<Match>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingData {
    pub total_upcoming: usize,
    pub matches: Vec<Match>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedData {
    pub total_completed: usize,
    pub matches: Vec<Match>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusData {
    pub status: MatchStatus,
    pub total_matches: usize,
    pub matches: Vec<Match>,
}

async fn all_matches(State(state): State<AppState>) -> ApiResponse<ScheduleData> {
    let matches = state.query.all_matches();
    ApiResponse::ok(
        ScheduleData {
            total_matches: matches.len(),
            matches,
        },
        "Match schedule retrieved successfully",
    )
}

async fn live_match(State(state): State<AppState>) -> ApiResponse<Option<Match>> {
    match state.query.live_match() {
        Some(m) => ApiResponse::ok(Some(m), "Live match retrieved successfully"),
        None => ApiResponse::ok(None, "No live match currently"),
    }
}

async fn upcoming_matches(State(state): State<AppState>) -> ApiResponse<UpcomingData> {
    let matches = state.query.upcoming_matches();
    ApiResponse::ok(
        UpcomingData {
            total_upcoming: matches.len(),
            matches,
        },
        "Upcoming matches retrieved successfully",
    )
}

async fn completed_matches(State(state): State<AppState>) -> ApiResponse<CompletedData> {
    let matches = state.query.completed_matches();
    ApiResponse::ok(
        CompletedData {
            total_completed: matches.len(),
            matches,
        },
        "Completed matches retrieved successfully",
    )
}

async fn matches_by_status(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
) -> Result<ApiResponse<StatusData>, ApiError> {
    let status: MatchStatus = raw.parse().map_err(|_| ApiError::InvalidStatus(raw))?;
    let matches = state.query.matches_by_status(status).into_vec();

    Ok(ApiResponse::ok(
        StatusData {
            status,
            total_matches: matches.len(),
            matches,
        },
        format!("{} matches retrieved successfully", status),
    ))
}

async fn match_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<ApiResponse<Match>, ApiError> {
    let found = state
        .query
        .match_by_id(&id)
        .ok_or(ApiError::MatchNotFound(id))?;
    Ok(ApiResponse::ok(found, "Match retrieved successfully"))
}
