//! Upcoming fixture list with day/night tags.

use super::{MatchRow, RowState};
use crate::matches::types::{DayNight, TeamCode};

pub static FIXTURES: &[MatchRow] = &[
    MatchRow {
        id: "ipl2025-001",
        number: "Match 1",
        start_local: "2025-08-26T19:30:00+05:30",
        start_utc: "2025-08-26T14:00:00Z",
        stadium: "Wankhede Stadium",
        city: "Mumbai",
        home: TeamCode::Mi,
        away: TeamCode::Csk,
        state: RowState::Upcoming,
        day_night: Some(DayNight::DayNight),
    },
    MatchRow {
        id: "ipl2025-002",
        number: "Match 2",
        start_local: "2025-08-28T19:30:00+05:30",
        start_utc: "2025-08-28T14:00:00Z",
        stadium: "M. Chinnaswamy Stadium",
        city: "Bengaluru",
        home: TeamCode::Rcb,
        away: TeamCode::Kkr,
        state: RowState::Upcoming,
        day_night: Some(DayNight::DayNight),
    },
    MatchRow {
        id: "ipl2025-003",
        number: "Match 3",
        start_local: "2025-08-30T19:30:00+05:30",
        start_utc: "2025-08-30T14:00:00Z",
        stadium: "Rajiv Gandhi Intl. Cricket Stadium",
        city: "Hyderabad",
        home: TeamCode::Srh,
        away: TeamCode::Dc,
        state: RowState::Upcoming,
        day_night: Some(DayNight::DayNight),
    },
    MatchRow {
        id: "ipl2025-004",
        number: "Match 4",
        start_local: "2025-09-01T19:30:00+05:30",
        start_utc: "2025-09-01T14:00:00Z",
        stadium: "Sawai Mansingh Stadium",
        city: "Jaipur",
        home: TeamCode::Rr,
        away: TeamCode::Pbks,
        state: RowState::Upcoming,
        day_night: Some(DayNight::DayNight),
    },
    MatchRow {
        id: "ipl2025-005",
        number: "Match 5",
        start_local: "2025-09-03T19:30:00+05:30",
        start_utc: "2025-09-03T14:00:00Z",
        stadium: "Narendra Modi Stadium",
        city: "Ahmedabad",
        home: TeamCode::Gt,
        away: TeamCode::Mi,
        state: RowState::Upcoming,
        day_night: Some(DayNight::DayNight),
    },
    MatchRow {
        id: "ipl2025-006",
        number: "Match 6 (Day)",
        start_local: "2025-09-05T15:30:00+05:30",
        start_utc: "2025-09-05T10:00:00Z",
        stadium: "Arun Jaitley Stadium",
        city: "Delhi",
        home: TeamCode::Dc,
        away: TeamCode::Csk,
        state: RowState::Upcoming,
        day_night: Some(DayNight::Day),
    },
    MatchRow {
        id: "ipl2025-007",
        number: "Match 7 (Night)",
        start_local: "2025-09-05T19:30:00+05:30",
        start_utc: "2025-09-05T14:00:00Z",
        stadium: "Eden Gardens",
        city: "Kolkata",
        home: TeamCode::Kkr,
        away: TeamCode::Rr,
        state: RowState::Upcoming,
        day_night: Some(DayNight::DayNight),
    },
    MatchRow {
        id: "ipl2025-008",
        number: "Match 8",
        start_local: "2025-09-07T19:30:00+05:30",
        start_utc: "2025-09-07T14:00:00Z",
        stadium: "PCA IS Bindra Stadium",
        city: "Mohali",
        home: TeamCode::Pbks,
        away: TeamCode::Lsg,
        state: RowState::Upcoming,
        day_night: Some(DayNight::DayNight),
    },
    MatchRow {
        id: "ipl2025-009",
        number: "Match 9",
        start_local: "2025-09-09T19:30:00+05:30",
        start_utc: "2025-09-09T14:00:00Z",
        stadium: "MA Chidambaram Stadium",
        city: "Chennai",
        home: TeamCode::Csk,
        away: TeamCode::Gt,
        state: RowState::Upcoming,
        day_night: Some(DayNight::DayNight),
    },
    MatchRow {
        id: "ipl2025-010",
        number: "Match 10",
        start_local: "2025-09-11T19:30:00+05:30",
        start_utc: "2025-09-11T14:00:00Z",
        stadium: "BRSABV Ekana Cricket Stadium",
        city: "Lucknow",
        home: TeamCode::Lsg,
        away: TeamCode::Srh,
        state: RowState::Upcoming,
        day_night: Some(DayNight::DayNight),
    },
];
