//! Conjunctive search over upcoming fixtures.
//!
//! Each provided criterion narrows the result. Criteria that cannot be
//! interpreted (an unknown team code, a blank venue, an unparseable date)
//! are ignored rather than rejected.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::matches::types::{Match, TeamCode};

/// Search filters, as received in the query string and echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub team: Option<String>,
    pub venue: Option<String>,
    pub date: Option<String>,
}

impl SearchCriteria {
    pub fn team_filter(&self) -> Option<TeamCode> {
        self.team.as_deref().and_then(|t| t.parse().ok())
    }

    pub fn venue_filter(&self) -> Option<&str> {
        self.venue.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn date_filter(&self, calendar: FixedOffset) -> Option<NaiveDate> {
        self.date.as_deref().and_then(|d| parse_calendar_date(d, calendar))
    }

    /// True when `m` satisfies every usable criterion.
    pub fn matches(&self, m: &Match, calendar: FixedOffset) -> bool {
        if let Some(team) = self.team_filter() {
            if !m.involves(team) {
                return false;
            }
        }
        if let Some(venue) = self.venue_filter() {
            if !m.venue.matches(venue) {
                return false;
            }
        }
        if let Some(date) = self.date_filter(calendar) {
            if calendar_date(m, calendar) != date {
                return false;
            }
        }
        true
    }
}

/// Parse `YYYY-MM-DD` as a calendar date, or an RFC 3339 instant as the date
/// it falls on in `calendar`.
pub fn parse_calendar_date(raw: &str, calendar: FixedOffset) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => Some(instant.with_timezone(&calendar).date_naive()),
        Err(e) => {
            tracing::debug!(date = %raw, error = %e, "Ignoring unparseable search date");
            None
        }
    }
}

/// Calendar date of a match's start, time-of-day ignored.
pub fn calendar_date(m: &Match, calendar: FixedOffset) -> NaiveDate {
    m.start_utc.with_timezone(&calendar).date_naive()
}
