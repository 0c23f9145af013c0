//! Wire types as the API serializes them.
//!
//! Codes and statuses stay plain strings so the client keeps working when
//! the server adds values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub code: String,
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub stadium: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTeams {
    pub home: Team,
    pub away: Team,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveScore {
    pub overs: String,
    pub runs: u32,
    pub wickets: u8,
    pub batting: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub match_number: String,
    pub competition: String,
    pub status: String,
    #[serde(rename = "startLocalISO")]
    pub start_local: String,
    #[serde(rename = "startUTC")]
    pub start_utc: String,
    pub venue: Venue,
    pub teams: MatchTeams,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub live_score: Option<LiveScore>,
    #[serde(default)]
    pub day_night: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub pos: u8,
    pub team: String,
    pub matches: u8,
    pub wins: u8,
    pub losses: u8,
    pub nr: u8,
    pub nrr: f64,
    #[serde(rename = "for")]
    pub runs_for: String,
    #[serde(rename = "against")]
    pub runs_against: String,
    pub points: u8,
    pub recent_form: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsTable {
    pub season: String,
    pub points_table: Vec<TeamStanding>,
    #[serde(default)]
    pub available_seasons: Option<Vec<SeasonOption>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub total_matches: usize,
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingMatches {
    pub total_upcoming: usize,
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMatches {
    pub team_code: String,
    pub total_matches: usize,
    pub matches: Vec<Match>,
}

/// `/api/live-match/status`: only `is_live` is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStatus {
    pub is_live: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub match_id: Option<String>,
    #[serde(default)]
    pub match_number: Option<String>,
    #[serde(default)]
    pub teams: Option<MatchTeams>,
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub live_score: Option<LiveScore>,
}

/// Pointer to the next game, sent when nothing is live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NextMatch {
    pub message: String,
    pub endpoint: String,
}

/// The `{success, data, message}` / `{success, error, message}` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, rename = "nextMatch")]
    pub next_match: Option<NextMatch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_live_envelope_points_at_fixtures() {
        let envelope: Envelope<Match> = serde_json::from_str(
            r#"{"success":true,"data":null,"message":"No live match currently",
                "nextMatch":{"message":"Check upcoming matches for the next game","endpoint":"/api/upcoming-matches"}}"#,
        )
        .unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(
            envelope.next_match.map(|hint| hint.endpoint).as_deref(),
            Some("/api/upcoming-matches")
        );
    }

    #[test]
    fn test_error_envelope_has_no_data() {
        let envelope: Envelope<Schedule> = serde_json::from_str(
            r#"{"success":false,"error":"Match not found","message":"No match found with ID: x"}"#,
        )
        .unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("Match not found"));
    }

    #[test]
    fn test_idle_live_status() {
        let envelope: Envelope<LiveStatus> = serde_json::from_str(
            r#"{"success":true,"data":{"isLive":false,"message":"No live match currently"}}"#,
        )
        .unwrap();
        let status = envelope.data.unwrap();
        assert!(!status.is_live);
        assert!(status.live_score.is_none());
    }
}
