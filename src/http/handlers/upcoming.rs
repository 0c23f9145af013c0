//! `/api/upcoming-matches`: the fixture list with its filters.

use axum::{
    extract::State,
    routing::get,
    Router,
};
use serde::Serialize;

use crate::http::handlers::schedule::UpcomingData;
use crate::http::request::{ApiPath, ApiQuery};
use crate::http::response::{ApiError, ApiResponse};
use crate::http::server::AppState;
use crate::matches::search::SearchCriteria;
use crate::matches::types::{Match, TeamCode};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(upcoming_fixtures))
        .route("/team/{code}", get(by_team))
        .route("/venue/{venue}", get(by_venue))
        .route("/next/{count}", get(next_matches))
        .route("/search", get(search))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamData {
    pub team_code: TeamCode,
    pub total_matches: usize,
    pub matches: Vec<Match>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueData {
    pub venue: String,
    pub total_matches: usize,
    pub matches: Vec<Match>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextData {
    pub requested_count: usize,
    pub actual_count: usize,
    pub matches: Vec<Match>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    pub filters: SearchCriteria,
    pub total_matches: usize,
    pub matches: Vec<Match>,
}

async fn upcoming_fixtures(State(state): State<AppState>) -> ApiResponse<UpcomingData> {
    let matches = state.query.upcoming_fixtures();
    ApiResponse::ok(
        UpcomingData {
            total_upcoming: matches.len(),
            matches,
        },
        "Upcoming matches retrieved successfully",
    )
}

async fn by_team(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
) -> Result<ApiResponse<TeamData>, ApiError> {
    let code: TeamCode = raw.parse().map_err(|_| ApiError::InvalidTeamCode(raw))?;
    let matches = state.query.upcoming_matches_by_team(code);

    Ok(ApiResponse::ok(
        TeamData {
            team_code: code,
            total_matches: matches.len(),
            matches,
        },
        format!("Upcoming matches for team {} retrieved successfully", code),
    ))
}

async fn by_venue(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
) -> Result<ApiResponse<VenueData>, ApiError> {
    let venue = raw.trim();
    if venue.is_empty() {
        return Err(ApiError::MissingVenue);
    }
    let matches = state.query.upcoming_matches_by_venue(venue);
    let message = format!("Upcoming matches at venue '{}' retrieved successfully", venue);

    Ok(ApiResponse::ok(
        VenueData {
            venue: venue.to_string(),
            total_matches: matches.len(),
            matches,
        },
        message,
    ))
}

async fn next_matches(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
) -> Result<ApiResponse<NextData>, ApiError> {
    let count = parse_count(&raw).ok_or(ApiError::InvalidCount(raw))?;
    let matches = state.query.next_upcoming_matches(count);
    let actual = matches.len();

    Ok(ApiResponse::ok(
        NextData {
            requested_count: count,
            actual_count: actual,
            matches,
        },
        format!("Next {} upcoming matches retrieved successfully", actual),
    ))
}

async fn search(
    State(state): State<AppState>,
    ApiQuery(criteria): ApiQuery<SearchCriteria>,
) -> ApiResponse<SearchData> {
    let matches = state.query.search_upcoming_matches(&criteria);
    ApiResponse::ok(
        SearchData {
            filters: criteria,
            total_matches: matches.len(),
            matches,
        },
        "Upcoming matches search completed successfully",
    )
}

/// A strictly positive decimal count.
fn parse_count(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3"), Some(3));
        assert_eq!(parse_count(" 12 "), Some(12));
        assert_eq!(parse_count("0"), None);
        assert_eq!(parse_count("-2"), None);
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("2.5"), None);
    }
}
