//! Match, team and standings types.
//!
//! Field names serialize in camelCase, the wire shape the web frontend
//! consumes. A match's lifecycle state is a single enum so a result only
//! exists on completed matches and a live score only on the live one.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// The ten franchises, serialized as their canonical uppercase code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TeamCode {
    Mi,
    Csk,
    Rcb,
    Kkr,
    Srh,
    Dc,
    Rr,
    Pbks,
    Gt,
    Lsg,
}

impl TeamCode {
    pub const ALL: [TeamCode; 10] = [
        TeamCode::Mi,
        TeamCode::Csk,
        TeamCode::Rcb,
        TeamCode::Kkr,
        TeamCode::Srh,
        TeamCode::Dc,
        TeamCode::Rr,
        TeamCode::Pbks,
        TeamCode::Gt,
        TeamCode::Lsg,
    ];

    /// Canonical uppercase code, e.g. `"PBKS"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            TeamCode::Mi => "MI",
            TeamCode::Csk => "CSK",
            TeamCode::Rcb => "RCB",
            TeamCode::Kkr => "KKR",
            TeamCode::Srh => "SRH",
            TeamCode::Dc => "DC",
            TeamCode::Rr => "RR",
            TeamCode::Pbks => "PBKS",
            TeamCode::Gt => "GT",
            TeamCode::Lsg => "LSG",
        }
    }

    pub const fn full_name(self) -> &'static str {
        match self {
            TeamCode::Mi => "Mumbai Indians",
            TeamCode::Csk => "Chennai Super Kings",
            TeamCode::Rcb => "Royal Challengers Bengaluru",
            TeamCode::Kkr => "Kolkata Knight Riders",
            TeamCode::Srh => "Sunrisers Hyderabad",
            TeamCode::Dc => "Delhi Capitals",
            TeamCode::Rr => "Rajasthan Royals",
            TeamCode::Pbks => "Punjab Kings",
            TeamCode::Gt => "Gujarat Titans",
            TeamCode::Lsg => "Lucknow Super Giants",
        }
    }

    /// Full team record for this code.
    pub fn team(self) -> Team {
        Team {
            code: self,
            name: self.full_name().to_string(),
            short_name: self.as_str().to_string(),
        }
    }

    /// Comma separated list of every code, used in error messages.
    pub fn listing() -> String {
        Self::ALL
            .iter()
            .map(|code| code.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input that does not name one of the ten franchises.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown team code '{0}'")]
pub struct UnknownTeamCode(pub String);

impl FromStr for TeamCode {
    type Err = UnknownTeamCode;

    /// Case-insensitive: `"csk"`, `"Csk"` and `"CSK"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == wanted)
            .ok_or_else(|| UnknownTeamCode(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub code: TeamCode,
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub stadium: String,
    pub city: String,
}

impl Venue {
    /// Case-insensitive substring match against the stadium or the city.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.stadium.to_lowercase().contains(&needle) || self.city.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTeams {
    pub home: Team,
    pub away: Team,
}

impl MatchTeams {
    pub fn new(home: TeamCode, away: TeamCode) -> Self {
        Self {
            home: home.team(),
            away: away.team(),
        }
    }

    pub fn involves(&self, code: TeamCode) -> bool {
        self.home.code == code || self.away.code == code
    }
}

/// Score of the innings in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveScore {
    /// Overs in cricket notation, e.g. `"12.3"`.
    pub overs: String,
    pub runs: u32,
    pub wickets: u8,
    pub batting: TeamCode,
}

/// Lifecycle tag of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Live,
    Completed,
}

impl MatchStatus {
    pub const ALL: [MatchStatus; 3] = [MatchStatus::Live, MatchStatus::Upcoming, MatchStatus::Completed];

    pub const fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown match status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for MatchStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Lifecycle state together with the data only that state carries.
///
/// Flattened into [`Match`], producing `"status"` plus either `"liveScore"`,
/// `"result"` or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MatchState {
    Upcoming,
    Live {
        #[serde(rename = "liveScore")]
        live_score: LiveScore,
    },
    Completed {
        result: String,
    },
}

impl MatchState {
    pub const fn status(&self) -> MatchStatus {
        match self {
            MatchState::Upcoming => MatchStatus::Upcoming,
            MatchState::Live { .. } => MatchStatus::Live,
            MatchState::Completed { .. } => MatchStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayNight {
    Day,
    Night,
    #[serde(rename = "Day/Night")]
    DayNight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub match_number: String,
    pub competition: String,
    #[serde(flatten)]
    pub state: MatchState,
    /// Start in the venue's local offset.
    #[serde(rename = "startLocalISO")]
    pub start_local: DateTime<FixedOffset>,
    #[serde(rename = "startUTC")]
    pub start_utc: DateTime<Utc>,
    pub venue: Venue,
    pub teams: MatchTeams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_night: Option<DayNight>,
}

impl Match {
    pub const fn status(&self) -> MatchStatus {
        self.state.status()
    }

    pub fn is_live(&self) -> bool {
        self.status() == MatchStatus::Live
    }

    pub fn live_score(&self) -> Option<&LiveScore> {
        match &self.state {
            MatchState::Live { live_score } => Some(live_score),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&str> {
        match &self.state {
            MatchState::Completed { result } => Some(result),
            _ => None,
        }
    }

    pub fn involves(&self, code: TeamCode) -> bool {
        self.teams.involves(code)
    }
}

/// Outcome of one match in a team's recent form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormResult {
    #[serde(rename = "W")]
    Won,
    #[serde(rename = "L")]
    Lost,
    #[serde(rename = "N")]
    NoResult,
}

/// One points-table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub pos: u8,
    pub team: TeamCode,
    pub matches: u8,
    pub wins: u8,
    pub losses: u8,
    pub nr: u8,
    pub nrr: f64,
    /// Runs/overs scored, e.g. `"2462/275.3"`.
    #[serde(rename = "for")]
    pub runs_for: String,
    #[serde(rename = "against")]
    pub runs_against: String,
    pub points: u8,
    /// Most recent first.
    pub recent_form: Vec<FormResult>,
}

impl TeamStanding {
    /// Two points per win, one per no result.
    pub const fn expected_points(wins: u8, nr: u8) -> u8 {
        wins * 2 + nr
    }
}

/// Ranking order of a points table: points, then wins, then NRR, all
/// descending. `Less` means `a` ranks above `b`.
pub fn rank_order(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| b.nrr.total_cmp(&a.nrr))
}

/// Year-keyed partition of points-table data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season(pub u16);

impl Season {
    pub fn option(self) -> SeasonOption {
        SeasonOption {
            value: self.to_string(),
            label: format!("IPL {}", self.0),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown season '{0}'")]
pub struct UnknownSeason(pub String);

impl FromStr for Season {
    type Err = UnknownSeason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .map(Season)
            .map_err(|_| UnknownSeason(s.to_string()))
    }
}

/// Entry of the season selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonOption {
    pub value: String,
    pub label: String,
}

/// Result of a status query: the live status yields at most one match,
/// the others a list.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusMatches {
    Live(Option<Match>),
    Many(Vec<Match>),
}

impl StatusMatches {
    pub fn len(&self) -> usize {
        match self {
            StatusMatches::Live(m) => usize::from(m.is_some()),
            StatusMatches::Many(ms) => ms.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalizes both shapes into a list.
    pub fn into_vec(self) -> Vec<Match> {
        match self {
            StatusMatches::Live(m) => m.into_iter().collect(),
            StatusMatches::Many(ms) => ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_code_parsing_is_case_insensitive() {
        assert_eq!("csk".parse::<TeamCode>(), Ok(TeamCode::Csk));
        assert_eq!("Pbks".parse::<TeamCode>(), Ok(TeamCode::Pbks));
        assert_eq!(" mi ".parse::<TeamCode>(), Ok(TeamCode::Mi));
        assert_eq!(
            "XYZ".parse::<TeamCode>(),
            Err(UnknownTeamCode("XYZ".to_string()))
        );
    }

    #[test]
    fn test_team_code_serializes_uppercase() {
        let json = serde_json::to_string(&TeamCode::Pbks.team()).unwrap();
        assert_eq!(json, r#"{"code":"PBKS","name":"Punjab Kings","shortName":"PBKS"}"#);
    }

    #[test]
    fn test_status_parsing_is_exact() {
        assert_eq!("live".parse::<MatchStatus>(), Ok(MatchStatus::Live));
        assert!("LIVE".parse::<MatchStatus>().is_err());
        assert!("finished".parse::<MatchStatus>().is_err());
    }

    #[test]
    fn test_state_flattens_into_match_json() {
        let m = Match {
            id: "t-1".into(),
            match_number: "Match 1".into(),
            competition: "Test".into(),
            state: MatchState::Live {
                live_score: LiveScore {
                    overs: "3.1".into(),
                    runs: 20,
                    wickets: 1,
                    batting: TeamCode::Rr,
                },
            },
            start_local: DateTime::parse_from_rfc3339("2025-08-26T19:30:00+05:30").unwrap(),
            start_utc: DateTime::parse_from_rfc3339("2025-08-26T14:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            venue: Venue {
                stadium: "Sawai Mansingh Stadium".into(),
                city: "Jaipur".into(),
            },
            teams: MatchTeams::new(TeamCode::Rr, TeamCode::Pbks),
            day_night: None,
        };

        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["status"], "live");
        assert_eq!(value["liveScore"]["batting"], "RR");
        assert_eq!(value["startLocalISO"], "2025-08-26T19:30:00+05:30");
        assert_eq!(value["startUTC"], "2025-08-26T14:00:00Z");
        assert!(value.get("result").is_none());
        assert!(value.get("dayNight").is_none());
    }

    #[test]
    fn test_season_parse_and_option() {
        let season: Season = "2024".parse().unwrap();
        assert_eq!(season, Season(2024));
        assert_eq!(
            season.option(),
            SeasonOption {
                value: "2024".into(),
                label: "IPL 2024".into()
            }
        );
        assert!("latest".parse::<Season>().is_err());
        assert_eq!(serde_json::to_string(&season).unwrap(), r#""2024""#);
    }

    #[test]
    fn test_venue_matches_stadium_or_city() {
        let venue = Venue {
            stadium: "MA Chidambaram Stadium".into(),
            city: "Chennai".into(),
        };
        assert!(venue.matches("chennai"));
        assert!(venue.matches("CHIDAMBARAM"));
        assert!(!venue.matches("Mumbai"));
    }

    #[test]
    fn test_status_matches_normalizes() {
        assert_eq!(StatusMatches::Live(None).len(), 0);
        assert!(StatusMatches::Live(None).into_vec().is_empty());
        assert!(StatusMatches::Many(Vec::new()).is_empty());
    }
}
