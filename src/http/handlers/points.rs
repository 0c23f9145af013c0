//! `/api/points-table`.
//!
//! A season named in the request must have data, otherwise the request is a
//! 404. The configured default applies only when no season is given; a blank
//! `?season=` counts as not given.

use axum::{
    extract::State,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::http::request::{ApiPath, ApiQuery};
use crate::http::response::{ApiError, ApiResponse};
use crate::http::server::AppState;
use crate::matches::types::{Season, SeasonOption, TeamStanding};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(points_table))
        .route("/seasons", get(seasons))
        .route("/{season}", get(points_table_for))
}

#[derive(Debug, Default, Deserialize)]
pub struct SeasonParams {
    pub season: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsTableData {
    pub season: Season,
    pub points_table: Vec<TeamStanding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_seasons: Option<Vec<SeasonOption>>,
}

async fn points_table(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SeasonParams>,
) -> Result<ApiResponse<PointsTableData>, ApiError> {
    let season = match params.season.filter(|raw| !raw.trim().is_empty()) {
        Some(raw) => parse_season(raw)?,
        None => state.default_season,
    };
    let mut data = table(&state, season)?;
    data.available_seasons = Some(state.query.available_seasons());

    Ok(ApiResponse::ok(
        data,
        format!("Points table for IPL {} retrieved successfully", season),
    ))
}

async fn seasons(State(state): State<AppState>) -> ApiResponse<Vec<SeasonOption>> {
    ApiResponse::ok(
        state.query.available_seasons(),
        "Available seasons retrieved successfully",
    )
}

async fn points_table_for(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
) -> Result<ApiResponse<PointsTableData>, ApiError> {
    let season = parse_season(raw)?;
    let data = table(&state, season)?;

    Ok(ApiResponse::ok(
        data,
        format!("Points table for IPL {} retrieved successfully", season),
    ))
}

fn parse_season(raw: String) -> Result<Season, ApiError> {
    raw.parse().map_err(|_| ApiError::SeasonNotFound(raw))
}

fn table(state: &AppState, season: Season) -> Result<PointsTableData, ApiError> {
    let points_table = state
        .query
        .points_table(season)
        .ok_or_else(|| ApiError::SeasonNotFound(season.to_string()))?;

    Ok(PointsTableData {
        season,
        points_table,
        available_seasons: None,
    })
}
