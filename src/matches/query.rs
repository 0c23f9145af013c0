//! Match-data query layer.
//!
//! Every route handler delegates here. All operations are pure reads over a
//! [`MatchStore`] and return owned copies; absence is a value (`None` or an
//! empty list), never an error.

use std::sync::Arc;

use chrono::{FixedOffset, Local, Offset};

use crate::matches::search::SearchCriteria;
use crate::matches::store::MatchStore;
use crate::matches::types::{
    Match, MatchStatus, Season, SeasonOption, StatusMatches, TeamCode, TeamStanding,
};

#[derive(Clone)]
pub struct MatchQuery {
    store: Arc<dyn MatchStore>,
    calendar: FixedOffset,
}

impl MatchQuery {
    /// Date searches use the server's current local offset.
    pub fn new(store: Arc<dyn MatchStore>) -> Self {
        Self {
            store,
            calendar: Local::now().offset().fix(),
        }
    }

    /// Override the offset whose calendar date searches compare against.
    pub fn with_calendar(mut self, calendar: FixedOffset) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn calendar(&self) -> FixedOffset {
        self.calendar
    }

    // Schedule

    pub fn all_matches(&self) -> Vec<Match> {
        self.store.schedule().to_vec()
    }

    pub fn match_by_id(&self, id: &str) -> Option<Match> {
        self.store.schedule().iter().find(|m| m.id == id).cloned()
    }

    /// The live match, if any.
    ///
    /// [`StaticStore`](crate::matches::store::StaticStore) rejects data with
    /// more than one live match. Other stores are not checked; the first live
    /// match in table order wins.
    pub fn live_match(&self) -> Option<Match> {
        self.store.schedule().iter().find(|m| m.is_live()).cloned()
    }

    pub fn upcoming_matches(&self) -> Vec<Match> {
        self.with_status(MatchStatus::Upcoming)
    }

    pub fn completed_matches(&self) -> Vec<Match> {
        self.with_status(MatchStatus::Completed)
    }

    pub fn matches_by_status(&self, status: MatchStatus) -> StatusMatches {
        match status {
            MatchStatus::Live => StatusMatches::Live(self.live_match()),
            MatchStatus::Upcoming => StatusMatches::Many(self.upcoming_matches()),
            MatchStatus::Completed => StatusMatches::Many(self.completed_matches()),
        }
    }

    fn with_status(&self, status: MatchStatus) -> Vec<Match> {
        self.store
            .schedule()
            .iter()
            .filter(|m| m.status() == status)
            .cloned()
            .collect()
    }

    // Upcoming fixtures

    pub fn upcoming_fixtures(&self) -> Vec<Match> {
        self.fixtures_where(|_| true)
    }

    pub fn upcoming_matches_by_team(&self, team: TeamCode) -> Vec<Match> {
        self.fixtures_where(|m| m.involves(team))
    }

    /// Case-insensitive substring match on stadium or city.
    pub fn upcoming_matches_by_venue(&self, venue: &str) -> Vec<Match> {
        self.fixtures_where(|m| m.venue.matches(venue))
    }

    /// The first `count` fixtures in table order.
    pub fn next_upcoming_matches(&self, count: usize) -> Vec<Match> {
        self.store
            .upcoming_fixtures()
            .iter()
            .filter(|m| m.status() == MatchStatus::Upcoming)
            .take(count)
            .cloned()
            .collect()
    }

    pub fn search_upcoming_matches(&self, criteria: &SearchCriteria) -> Vec<Match> {
        self.fixtures_where(|m| criteria.matches(m, self.calendar))
    }

    fn fixtures_where(&self, keep: impl Fn(&Match) -> bool) -> Vec<Match> {
        self.store
            .upcoming_fixtures()
            .iter()
            .filter(|m| m.status() == MatchStatus::Upcoming && keep(m))
            .cloned()
            .collect()
    }

    // Points table

    pub fn points_table(&self, season: Season) -> Option<Vec<TeamStanding>> {
        self.store.standings(season).map(<[TeamStanding]>::to_vec)
    }

    pub fn has_season(&self, season: Season) -> bool {
        self.store.standings(season).is_some()
    }

    pub fn available_seasons(&self) -> Vec<SeasonOption> {
        self.store.seasons()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::store::StaticStore;
    use chrono::NaiveDate;

    fn query() -> MatchQuery {
        let store = StaticStore::builtin().unwrap();
        MatchQuery::new(Arc::new(store)).with_calendar(FixedOffset::east_opt(19_800).unwrap())
    }

    fn ids(matches: &[Match]) -> Vec<&str> {
        matches.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_match_by_id_live_example() {
        let m = query().match_by_id("ipl2025-004").unwrap();
        assert_eq!(m.teams.home.code, TeamCode::Srh);
        assert_eq!(m.teams.away.code, TeamCode::Dc);
        assert_eq!(m.status(), MatchStatus::Live);
        let score = m.live_score().unwrap();
        assert_eq!(score.overs, "12.3");
        assert_eq!(score.runs, 97);
        assert_eq!(score.wickets, 2);
        assert_eq!(score.batting, TeamCode::Srh);
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(query().match_by_id("ipl2025-999").is_none());
    }

    #[test]
    fn test_live_match() {
        assert_eq!(query().live_match().unwrap().id, "ipl2025-004");
    }

    #[test]
    fn test_status_filters_preserve_order() {
        let q = query();
        let upcoming = q.upcoming_matches();
        assert_eq!(upcoming.len(), 16);
        assert!(upcoming.iter().all(|m| m.status() == MatchStatus::Upcoming));
        assert_eq!(upcoming.first().unwrap().id, "ipl2025-005");
        assert_eq!(upcoming.last().unwrap().id, "ipl2025-020");

        let completed = q.completed_matches();
        assert_eq!(ids(&completed), vec!["ipl2025-001", "ipl2025-002", "ipl2025-003"]);
    }

    #[test]
    fn test_matches_by_status_shapes() {
        let q = query();
        match q.matches_by_status(MatchStatus::Live) {
            StatusMatches::Live(Some(m)) => assert_eq!(m.id, "ipl2025-004"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(q.matches_by_status(MatchStatus::Completed).len(), 3);
        assert_eq!(q.matches_by_status(MatchStatus::Upcoming).into_vec(), q.upcoming_matches());
    }

    #[test]
    fn test_fixtures_by_team() {
        let q = query();
        let mi = q.upcoming_matches_by_team(TeamCode::Mi);
        assert_eq!(ids(&mi), vec!["ipl2025-001", "ipl2025-005"]);
        assert!(mi.iter().all(|m| m.involves(TeamCode::Mi)));
    }

    #[test]
    fn test_fixtures_by_venue_matches_stadium_or_city() {
        let q = query();
        assert_eq!(ids(&q.upcoming_matches_by_venue("kolkata")), vec!["ipl2025-007"]);
        assert_eq!(ids(&q.upcoming_matches_by_venue("EDEN")), vec!["ipl2025-007"]);
        assert_eq!(q.upcoming_matches_by_venue("stadium").len(), 9);
        assert!(q.upcoming_matches_by_venue("Lord's").is_empty());
    }

    #[test]
    fn test_next_upcoming() {
        let q = query();
        assert_eq!(ids(&q.next_upcoming_matches(2)), vec!["ipl2025-001", "ipl2025-002"]);
        assert_eq!(q.next_upcoming_matches(50).len(), 10);
    }

    #[test]
    fn test_search_is_intersection() {
        let q = query();
        let criteria = SearchCriteria {
            team: Some("CSK".into()),
            venue: Some("Chennai".into()),
            date: None,
        };
        let found = q.search_upcoming_matches(&criteria);
        assert_eq!(ids(&found), vec!["ipl2025-009"]);

        let by_team = q.upcoming_matches_by_team(TeamCode::Csk);
        let by_venue = q.upcoming_matches_by_venue("Chennai");
        assert!(found.iter().all(|m| by_team.contains(m) && by_venue.contains(m)));
    }

    #[test]
    fn test_search_invalid_team_is_ignored() {
        let q = query();
        let criteria = SearchCriteria {
            team: Some("XYZ".into()),
            ..Default::default()
        };
        assert_eq!(q.search_upcoming_matches(&criteria), q.upcoming_fixtures());
    }

    #[test]
    fn test_search_by_date_ignores_time_of_day() {
        let q = query();
        let criteria = SearchCriteria {
            date: Some("2025-09-05".into()),
            ..Default::default()
        };
        // Day game and night game on the same date.
        assert_eq!(
            ids(&q.search_upcoming_matches(&criteria)),
            vec!["ipl2025-006", "ipl2025-007"]
        );
        assert_eq!(
            q.search_upcoming_matches(&criteria)
                .iter()
                .map(|m| crate::matches::search::calendar_date(m, q.calendar()))
                .collect::<Vec<_>>(),
            vec![NaiveDate::from_ymd_opt(2025, 9, 5).unwrap(); 2]
        );
    }

    #[test]
    fn test_points_table() {
        let q = query();
        let table = q.points_table(Season(2024)).unwrap();
        assert_eq!(table[0].team, TeamCode::Kkr);
        assert_eq!(table[0].points, 20);
        assert!(q.points_table(Season(2020)).is_none());
        assert!(q.has_season(Season(2023)));
    }

    #[test]
    fn test_available_seasons() {
        let seasons = query().available_seasons();
        let values: Vec<&str> = seasons.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["2025", "2024", "2023"]);
        assert_eq!(seasons[0].label, "IPL 2025");
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let q = query();
        assert_eq!(q.all_matches(), q.all_matches());
        assert_eq!(q.live_match(), q.live_match());
        assert_eq!(q.points_table(Season(2025)), q.points_table(Season(2025)));
    }
}
