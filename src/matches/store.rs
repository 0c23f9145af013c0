//! Read-only match data provider.
//!
//! # Responsibilities
//! - Abstract the data source behind [`MatchStore`] so the query layer does
//!   not care whether data comes from literal tables, a database or a feed
//! - Load the built-in tables once and validate every data invariant
//!
//! # Design Decisions
//! - Validation collects all violations, not just the first
//! - At most one live match is enforced here, at load time
//! - Standings must already be in rank order; the store never re-sorts

use std::collections::HashSet;

use thiserror::Error;

use crate::data;
use crate::matches::types::{
    rank_order, FormResult, Match, MatchStatus, Season, SeasonOption, TeamCode, TeamStanding,
};

/// Source of schedule, fixture and standings data.
pub trait MatchStore: Send + Sync {
    /// Season schedule in table order.
    fn schedule(&self) -> &[Match];

    /// Upcoming fixture list in table order.
    fn upcoming_fixtures(&self) -> &[Match];

    /// Points table of a season, or `None` when the season has no data.
    fn standings(&self, season: Season) -> Option<&[TeamStanding]>;

    /// Seasons with standings, in selector order.
    fn seasons(&self) -> Vec<SeasonOption>;
}

/// Standings of one season.
#[derive(Debug, Clone)]
pub struct SeasonTable {
    pub season: Season,
    pub standings: Vec<TeamStanding>,
}

/// A single broken data invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataViolation {
    #[error("{table}: duplicate match id {id}")]
    DuplicateMatchId { table: &'static str, id: String },

    #[error("{table}: match {id} has the same team on both sides")]
    SameTeams { table: &'static str, id: String },

    #[error("{table}: match {id} local and UTC start times differ")]
    StartMismatch { table: &'static str, id: String },

    #[error("{table}: match {id} batting team {team} is not playing")]
    BattingTeamNotPlaying {
        table: &'static str,
        id: String,
        team: TeamCode,
    },

    #[error("fixtures: match {id} is {status}, expected upcoming")]
    FixtureNotUpcoming { id: String, status: MatchStatus },

    #[error("schedule: more than one live match ({})", .ids.join(", "))]
    MultipleLiveMatches { ids: Vec<String> },

    #[error("season {0} appears more than once")]
    DuplicateSeason(Season),

    #[error("season {season}: {team} appears more than once")]
    DuplicateTeam { season: Season, team: TeamCode },

    #[error("season {season}: expected {expected} teams, found {found}")]
    TeamCount {
        season: Season,
        expected: usize,
        found: usize,
    },

    #[error("season {season}: {team} played count does not equal wins + losses + no results")]
    PlayedMismatch { season: Season, team: TeamCode },

    #[error("season {season}: {team} points do not equal two per win plus one per no result")]
    PointsMismatch { season: Season, team: TeamCode },

    #[error("season {season}: position {found} where {expected} was expected")]
    PositionGap {
        season: Season,
        expected: u8,
        found: u8,
    },

    #[error("season {season}: {above} is ranked above {below} out of order")]
    RankingOrder {
        season: Season,
        above: TeamCode,
        below: TeamCode,
    },

    #[error("season {season}: {team} recent form is inconsistent with its results")]
    FormMismatch { season: Season, team: TeamCode },
}

/// Errors raised while loading match data.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid timestamp '{value}' for match {id}: {source}")]
    Timestamp {
        id: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("match data failed validation: {}", join_violations(.0))]
    Invalid(Vec<DataViolation>),
}

fn join_violations(violations: &[DataViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Longest recent-form sequence kept per team.
pub const MAX_RECENT_FORM: usize = 5;

/// In-memory store built once at startup.
#[derive(Debug, Clone)]
pub struct StaticStore {
    schedule: Vec<Match>,
    fixtures: Vec<Match>,
    tables: Vec<SeasonTable>,
}

impl StaticStore {
    /// Load the built-in literal tables.
    pub fn builtin() -> Result<Self, StoreError> {
        let schedule = data::load_matches(data::schedule::SCHEDULE)?;
        let fixtures = data::load_matches(data::fixtures::FIXTURES)?;
        let tables = data::standings::SEASONS
            .iter()
            .map(|s| SeasonTable {
                season: s.season,
                standings: data::load_standings(s.rows),
            })
            .collect();

        Self::from_parts(schedule, fixtures, tables)
    }

    /// Build a store from already-converted data, validating it first.
    pub fn from_parts(
        schedule: Vec<Match>,
        fixtures: Vec<Match>,
        tables: Vec<SeasonTable>,
    ) -> Result<Self, StoreError> {
        let mut violations = Vec::new();
        check_matches("schedule", &schedule, &mut violations);
        check_matches("fixtures", &fixtures, &mut violations);
        check_single_live(&schedule, &mut violations);
        check_fixtures_upcoming(&fixtures, &mut violations);
        check_tables(&tables, &mut violations);

        if !violations.is_empty() {
            return Err(StoreError::Invalid(violations));
        }

        tracing::debug!(
            schedule = schedule.len(),
            fixtures = fixtures.len(),
            seasons = tables.len(),
            "Match data loaded"
        );

        Ok(Self {
            schedule,
            fixtures,
            tables,
        })
    }
}

impl MatchStore for StaticStore {
    fn schedule(&self) -> &[Match] {
        &self.schedule
    }

    fn upcoming_fixtures(&self) -> &[Match] {
        &self.fixtures
    }

    fn standings(&self, season: Season) -> Option<&[TeamStanding]> {
        self.tables
            .iter()
            .find(|t| t.season == season)
            .map(|t| t.standings.as_slice())
    }

    fn seasons(&self) -> Vec<SeasonOption> {
        self.tables.iter().map(|t| t.season.option()).collect()
    }
}

fn check_matches(table: &'static str, matches: &[Match], out: &mut Vec<DataViolation>) {
    let mut seen = HashSet::new();
    for m in matches {
        if !seen.insert(m.id.as_str()) {
            out.push(DataViolation::DuplicateMatchId {
                table,
                id: m.id.clone(),
            });
        }
        if m.teams.home.code == m.teams.away.code {
            out.push(DataViolation::SameTeams {
                table,
                id: m.id.clone(),
            });
        }
        if m.start_local != m.start_utc {
            out.push(DataViolation::StartMismatch {
                table,
                id: m.id.clone(),
            });
        }
        if let Some(score) = m.live_score() {
            if !m.involves(score.batting) {
                out.push(DataViolation::BattingTeamNotPlaying {
                    table,
                    id: m.id.clone(),
                    team: score.batting,
                });
            }
        }
    }
}

fn check_single_live(schedule: &[Match], out: &mut Vec<DataViolation>) {
    let ids: Vec<String> = schedule
        .iter()
        .filter(|m| m.is_live())
        .map(|m| m.id.clone())
        .collect();
    if ids.len() > 1 {
        out.push(DataViolation::MultipleLiveMatches { ids });
    }
}

fn check_fixtures_upcoming(fixtures: &[Match], out: &mut Vec<DataViolation>) {
    for m in fixtures.iter().filter(|m| m.status() != MatchStatus::Upcoming) {
        out.push(DataViolation::FixtureNotUpcoming {
            id: m.id.clone(),
            status: m.status(),
        });
    }
}

fn check_tables(tables: &[SeasonTable], out: &mut Vec<DataViolation>) {
    let mut seasons = HashSet::new();
    for table in tables {
        if !seasons.insert(table.season) {
            out.push(DataViolation::DuplicateSeason(table.season));
        }
        check_standings(table.season, &table.standings, out);
    }
}

fn check_standings(season: Season, rows: &[TeamStanding], out: &mut Vec<DataViolation>) {
    if rows.len() != TeamCode::ALL.len() {
        out.push(DataViolation::TeamCount {
            season,
            expected: TeamCode::ALL.len(),
            found: rows.len(),
        });
    }

    let mut teams = HashSet::new();
    for (row, expected) in rows.iter().zip(1u8..) {
        let team = row.team;
        if !teams.insert(team) {
            out.push(DataViolation::DuplicateTeam { season, team });
        }
        if row.pos != expected {
            out.push(DataViolation::PositionGap {
                season,
                expected,
                found: row.pos,
            });
        }
        if u16::from(row.matches) != u16::from(row.wins) + u16::from(row.losses) + u16::from(row.nr) {
            out.push(DataViolation::PlayedMismatch { season, team });
        }
        if u16::from(row.points) != u16::from(row.wins) * 2 + u16::from(row.nr) {
            out.push(DataViolation::PointsMismatch { season, team });
        }
        if !form_is_consistent(row) {
            out.push(DataViolation::FormMismatch { season, team });
        }
    }

    for pair in rows.windows(2) {
        if rank_order(&pair[0], &pair[1]).is_gt() {
            out.push(DataViolation::RankingOrder {
                season,
                above: pair[0].team,
                below: pair[1].team,
            });
        }
    }
}

/// Form can only hold as many of each outcome as the team actually had.
fn form_is_consistent(row: &TeamStanding) -> bool {
    let count = |kind: FormResult| row.recent_form.iter().filter(|f| **f == kind).count();
    row.recent_form.len() <= MAX_RECENT_FORM
        && count(FormResult::Won) <= usize::from(row.wins)
        && count(FormResult::Lost) <= usize::from(row.losses)
        && count(FormResult::NoResult) <= usize::from(row.nr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::types::{LiveScore, MatchState};

    fn builtin() -> StaticStore {
        StaticStore::builtin().expect("built-in data must be valid")
    }

    fn violations(err: StoreError) -> Vec<DataViolation> {
        match err {
            StoreError::Invalid(v) => v,
            other => panic!("expected validation failure, got {other}"),
        }
    }

    #[test]
    fn test_builtin_tables_load() {
        let store = builtin();
        assert_eq!(store.schedule().len(), 20);
        assert_eq!(store.upcoming_fixtures().len(), 10);
        assert_eq!(store.seasons().len(), 3);
        for season in [2023, 2024, 2025] {
            let table = store.standings(Season(season)).unwrap();
            assert_eq!(table.len(), 10);
        }
        assert!(store.standings(Season(2019)).is_none());
    }

    #[test]
    fn test_state_payloads_match_status() {
        let store = builtin();
        for m in store.schedule().iter().chain(store.upcoming_fixtures()) {
            match m.status() {
                MatchStatus::Completed => assert!(m.result().is_some() && m.live_score().is_none()),
                MatchStatus::Live => assert!(m.live_score().is_some() && m.result().is_none()),
                MatchStatus::Upcoming => assert!(m.live_score().is_none() && m.result().is_none()),
            }
        }
    }

    #[test]
    fn test_positions_dense_and_ranked() {
        let store = builtin();
        for option in store.seasons() {
            let season: Season = option.value.parse().unwrap();
            let table = store.standings(season).unwrap();
            let positions: Vec<u8> = table.iter().map(|s| s.pos).collect();
            assert_eq!(positions, (1..=10).collect::<Vec<u8>>());
            assert!(table.windows(2).all(|w| !rank_order(&w[0], &w[1]).is_gt()));
        }
    }

    #[test]
    fn test_rejects_second_live_match() {
        let store = builtin();
        let mut schedule = store.schedule().to_vec();
        let extra = schedule
            .iter_mut()
            .find(|m| m.status() == MatchStatus::Upcoming)
            .unwrap();
        extra.state = MatchState::Live {
            live_score: LiveScore {
                overs: "1.0".into(),
                runs: 4,
                wickets: 0,
                batting: extra.teams.home.code,
            },
        };

        let err = StaticStore::from_parts(
            schedule,
            store.upcoming_fixtures().to_vec(),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(
            violations(err).as_slice(),
            [DataViolation::MultipleLiveMatches { ids }] if ids.len() == 2
        ));
    }

    #[test]
    fn test_rejects_out_of_order_standings() {
        let store = builtin();
        let mut standings = store.standings(Season(2025)).unwrap().to_vec();
        standings.swap(0, 9);
        standings[0].pos = 1;
        standings[9].pos = 10;

        let err = StaticStore::from_parts(
            Vec::new(),
            Vec::new(),
            vec![SeasonTable {
                season: Season(2025),
                standings,
            }],
        )
        .unwrap_err();
        let found = violations(err);
        assert!(found
            .iter()
            .any(|v| matches!(v, DataViolation::RankingOrder { .. })));
    }

    #[test]
    fn test_collects_every_violation() {
        let store = builtin();
        let mut standings = store.standings(Season(2024)).unwrap().to_vec();
        standings[2].matches += 1;
        standings[3].team = standings[4].team;
        standings.pop();

        let err = StaticStore::from_parts(
            Vec::new(),
            Vec::new(),
            vec![SeasonTable {
                season: Season(2024),
                standings,
            }],
        )
        .unwrap_err();
        let found = violations(err);
        assert!(found.iter().any(|v| matches!(v, DataViolation::TeamCount { found: 9, .. })));
        assert!(found.iter().any(|v| matches!(v, DataViolation::PlayedMismatch { .. })));
        assert!(found.iter().any(|v| matches!(v, DataViolation::DuplicateTeam { .. })));
    }

    #[test]
    fn test_rejects_non_upcoming_fixture() {
        let store = builtin();
        let mut fixtures = store.upcoming_fixtures().to_vec();
        fixtures[0].state = MatchState::Completed {
            result: "abandoned".into(),
        };

        let err = StaticStore::from_parts(Vec::new(), fixtures, Vec::new()).unwrap_err();
        assert_eq!(
            violations(err),
            vec![DataViolation::FixtureNotUpcoming {
                id: "ipl2025-001".into(),
                status: MatchStatus::Completed,
            }]
        );
    }

    #[test]
    fn test_error_display_lists_violations() {
        let err = StoreError::Invalid(vec![
            DataViolation::DuplicateSeason(Season(2025)),
            DataViolation::MultipleLiveMatches {
                ids: vec!["a".into(), "b".into()],
            },
        ]);
        assert_eq!(
            err.to_string(),
            "match data failed validation: season 2025 appears more than once; \
             schedule: more than one live match (a, b)"
        );
    }
}
