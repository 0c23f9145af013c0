//! `/api/live-match`: views of the single live match.
//!
//! Every route answers 200; when nothing is live the payload is `null` (or
//! `isLive: false` on `/status`).

use axum::{extract::State, routing::get, Router};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use crate::http::response::{ApiResponse, NextMatchHint};
use crate::http::server::AppState;
use crate::matches::simulate::{simulate_live_update, SimulatedUpdate};
use crate::matches::types::{LiveScore, Match, MatchTeams, Team, Venue};

const NO_LIVE_MATCH: &str = "No live match currently";

const NEXT_MATCH: NextMatchHint = NextMatchHint {
    message: "Check upcoming matches for the next game",
    endpoint: "/api/upcoming-matches",
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(live_match))
        .route("/status", get(status))
        .route("/score", get(score))
        .route("/teams", get(teams))
        .route("/venue", get(venue))
        .route("/simulate", get(simulate))
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LiveStatus {
    Idle {
        #[serde(rename = "isLive")]
        is_live: bool,
        message: String,
    },
    Live(Box<LiveDetail>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveDetail {
    pub is_live: bool,
    pub match_id: String,
    pub match_number: String,
    pub teams: MatchTeams,
    pub venue: Venue,
    pub live_score: LiveScore,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreData {
    pub match_id: String,
    pub match_number: String,
    pub teams: MatchTeams,
    pub live_score: LiveScore,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsData {
    pub match_id: String,
    pub match_number: String,
    pub home_team: Team,
    pub away_team: Team,
    pub venue: Venue,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueData {
    pub match_id: String,
    pub match_number: String,
    pub venue: Venue,
    pub start_time: DateTime<FixedOffset>,
}

#[derive(Debug, Serialize)]
pub struct SimulationData {
    #[serde(flatten)]
    pub update: SimulatedUpdate,
    pub timestamp: DateTime<Utc>,
}

async fn live_match(State(state): State<AppState>) -> ApiResponse<Option<Match>> {
    match state.query.live_match() {
        Some(m) => ApiResponse::ok(Some(m), "Live match retrieved successfully"),
        None => ApiResponse::ok(None, NO_LIVE_MATCH).with_next_match(NEXT_MATCH),
    }
}

async fn status(State(state): State<AppState>) -> ApiResponse<LiveStatus> {
    let detail = state.query.live_match().and_then(|m| {
        let live_score = m.live_score().cloned()?;
        Some(LiveDetail {
            is_live: true,
            match_id: m.id,
            match_number: m.match_number,
            teams: m.teams,
            venue: m.venue,
            live_score,
        })
    });

    ApiResponse::data(match detail {
        Some(detail) => LiveStatus::Live(Box::new(detail)),
        None => LiveStatus::Idle {
            is_live: false,
            message: NO_LIVE_MATCH.to_string(),
        },
    })
}

async fn score(State(state): State<AppState>) -> ApiResponse<Option<ScoreData>> {
    let data = state.query.live_match().and_then(|m| {
        let live_score = m.live_score().cloned()?;
        Some(ScoreData {
            match_id: m.id,
            match_number: m.match_number,
            teams: m.teams,
            live_score,
            timestamp: Utc::now(),
        })
    });
    when_live(data)
}

async fn teams(State(state): State<AppState>) -> ApiResponse<Option<TeamsData>> {
    let data = state.query.live_match().map(|m| TeamsData {
        match_id: m.id,
        match_number: m.match_number,
        home_team: m.teams.home,
        away_team: m.teams.away,
        venue: m.venue,
    });
    when_live(data)
}

async fn venue(State(state): State<AppState>) -> ApiResponse<Option<VenueData>> {
    let data = state.query.live_match().map(|m| VenueData {
        match_id: m.id,
        match_number: m.match_number,
        venue: m.venue,
        start_time: m.start_local,
    });
    when_live(data)
}

async fn simulate(State(state): State<AppState>) -> ApiResponse<Option<SimulationData>> {
    let update = state
        .query
        .live_match()
        .and_then(|m| simulate_live_update(&m, &mut rand::thread_rng()));

    match update {
        Some(update) => ApiResponse::ok(
            Some(SimulationData {
                update,
                timestamp: Utc::now(),
            }),
            "Live match simulation data generated successfully",
        )
        .with_note("This is simulated data for testing purposes"),
        None => ApiResponse::ok(None, "No live match currently to simulate"),
    }
}

fn when_live<T: Serialize>(data: Option<T>) -> ApiResponse<Option<T>> {
    match data {
        Some(data) => ApiResponse::data(Some(data)),
        None => ApiResponse::ok(None, NO_LIVE_MATCH),
    }
}
