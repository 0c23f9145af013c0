//! Simulated live update for manual testing.
//!
//! Produces visibly changing numbers from the live match: the runs get a
//! random bump, everything else is fixed filler. There is no notion of
//! innings, targets, wickets falling or overs progressing, and nothing is
//! written back; every call starts again from the stored record.

use rand::Rng;
use serde::Serialize;

use crate::matches::types::{LiveScore, Match, MatchTeams, Venue};

/// Overs shown on every simulated update.
pub const SIMULATED_OVERS: &str = "15.2";

/// Exclusive upper bound of the random run increment.
pub const MAX_RUN_INCREMENT: u32 = 10;

/// Placeholder commentary attached to a simulated update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalInfo {
    pub current_batsman: String,
    pub current_bowler: String,
    pub last_ball: String,
    pub required_run_rate: String,
    pub match_status: String,
}

impl Default for AdditionalInfo {
    fn default() -> Self {
        Self {
            current_batsman: "Player A".to_string(),
            current_bowler: "Player B".to_string(),
            last_ball: "1 run".to_string(),
            required_run_rate: "8.5".to_string(),
            match_status: "In Progress".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedUpdate {
    pub match_id: String,
    pub match_number: String,
    pub teams: MatchTeams,
    pub venue: Venue,
    pub live_score: LiveScore,
    pub additional_info: AdditionalInfo,
}

/// Derive a simulated update from `m`, or `None` if it is not live.
pub fn simulate_live_update<R: Rng>(m: &Match, rng: &mut R) -> Option<SimulatedUpdate> {
    let base = m.live_score()?;
    let bump = rng.gen_range(0..MAX_RUN_INCREMENT);

    Some(SimulatedUpdate {
        match_id: m.id.clone(),
        match_number: m.match_number.clone(),
        teams: m.teams.clone(),
        venue: m.venue.clone(),
        live_score: LiveScore {
            overs: SIMULATED_OVERS.to_string(),
            runs: base.runs + bump,
            wickets: base.wickets,
            batting: base.batting,
        },
        additional_info: AdditionalInfo::default(),
    })
}
