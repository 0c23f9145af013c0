//! Literal match and standings tables.
//!
//! Rows are plain `'static` data; [`MatchRow::to_match`] and
//! [`StandingRow::to_standing`] turn them into domain values when the
//! store loads. Invariants are checked by the store, not here.

pub mod fixtures;
pub mod schedule;
pub mod standings;

use chrono::{DateTime, Utc};

use crate::matches::store::StoreError;
use crate::matches::types::{
    DayNight, FormResult, LiveScore, Match, MatchState, MatchTeams, Season, TeamCode,
    TeamStanding, Venue,
};

pub const COMPETITION: &str = "TATA IPL 2025";

pub enum RowState {
    Upcoming,
    Live {
        overs: &'static str,
        runs: u32,
        wickets: u8,
        batting: TeamCode,
    },
    Completed(&'static str),
}

pub struct MatchRow {
    pub id: &'static str,
    pub number: &'static str,
    pub start_local: &'static str,
    pub start_utc: &'static str,
    pub stadium: &'static str,
    pub city: &'static str,
    pub home: TeamCode,
    pub away: TeamCode,
    pub state: RowState,
    pub day_night: Option<DayNight>,
}

impl MatchRow {
    pub fn to_match(&self) -> Result<Match, StoreError> {
        let start_local = DateTime::parse_from_rfc3339(self.start_local).map_err(|source| {
            StoreError::Timestamp {
                id: self.id.to_string(),
                value: self.start_local.to_string(),
                source,
            }
        })?;
        let start_utc = DateTime::parse_from_rfc3339(self.start_utc)
            .map_err(|source| StoreError::Timestamp {
                id: self.id.to_string(),
                value: self.start_utc.to_string(),
                source,
            })?
            .with_timezone(&Utc);

        let state = match self.state {
            RowState::Upcoming => MatchState::Upcoming,
            RowState::Live {
                overs,
                runs,
                wickets,
                batting,
            } => MatchState::Live {
                live_score: LiveScore {
                    overs: overs.to_string(),
                    runs,
                    wickets,
                    batting,
                },
            },
            RowState::Completed(result) => MatchState::Completed {
                result: result.to_string(),
            },
        };

        Ok(Match {
            id: self.id.to_string(),
            match_number: self.number.to_string(),
            competition: COMPETITION.to_string(),
            state,
            start_local,
            start_utc,
            venue: Venue {
                stadium: self.stadium.to_string(),
                city: self.city.to_string(),
            },
            teams: MatchTeams::new(self.home, self.away),
            day_night: self.day_night,
        })
    }
}

pub struct StandingRow {
    pub team: TeamCode,
    pub played: u8,
    pub won: u8,
    pub lost: u8,
    pub no_result: u8,
    pub nrr: f64,
    pub runs_for: &'static str,
    pub runs_against: &'static str,
    pub form: &'static [FormResult],
}

impl StandingRow {
    /// Points are derived from the results rather than stored.
    pub fn to_standing(&self, pos: u8) -> TeamStanding {
        TeamStanding {
            pos,
            team: self.team,
            matches: self.played,
            wins: self.won,
            losses: self.lost,
            nr: self.no_result,
            nrr: self.nrr,
            runs_for: self.runs_for.to_string(),
            runs_against: self.runs_against.to_string(),
            points: TeamStanding::expected_points(self.won, self.no_result),
            recent_form: self.form.to_vec(),
        }
    }
}

pub struct SeasonRows {
    pub season: Season,
    pub rows: &'static [StandingRow],
}

/// Converts every literal row, in table order.
pub fn load_matches(rows: &[MatchRow]) -> Result<Vec<Match>, StoreError> {
    rows.iter().map(MatchRow::to_match).collect()
}

/// Positions follow table order starting at 1.
pub fn load_standings(rows: &[StandingRow]) -> Vec<TeamStanding> {
    rows.iter()
        .zip(1u8..)
        .map(|(row, pos)| row.to_standing(pos))
        .collect()
}
