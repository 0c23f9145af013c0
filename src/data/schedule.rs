//! Season schedule: completed, live and upcoming matches.

use super::{MatchRow, RowState};
use crate::matches::types::TeamCode;

pub static SCHEDULE: &[MatchRow] = &[
    // Completed
    MatchRow {
        id: "ipl2025-001",
        number: "Match 1",
        start_local: "2025-08-15T19:30:00+05:30",
        start_utc: "2025-08-15T14:00:00Z",
        stadium: "Wankhede Stadium",
        city: "Mumbai",
        home: TeamCode::Mi,
        away: TeamCode::Csk,
        state: RowState::Completed("MI won by 5 wickets"),
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-002",
        number: "Match 2",
        start_local: "2025-08-16T19:30:00+05:30",
        start_utc: "2025-08-16T14:00:00Z",
        stadium: "M. Chinnaswamy Stadium",
        city: "Bengaluru",
        home: TeamCode::Rcb,
        away: TeamCode::Kkr,
        state: RowState::Completed("RCB won by 18 runs"),
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-003",
        number: "Match 3",
        start_local: "2025-08-17T19:30:00+05:30",
        start_utc: "2025-08-17T14:00:00Z",
        stadium: "Eden Gardens",
        city: "Kolkata",
        home: TeamCode::Kkr,
        away: TeamCode::Srh,
        state: RowState::Completed("SRH won by 7 wickets"),
        day_night: None,
    },
    // Live
    MatchRow {
        id: "ipl2025-004",
        number: "Match 4",
        start_local: "2025-08-24T19:30:00+05:30",
        start_utc: "2025-08-24T14:00:00Z",
        stadium: "Rajiv Gandhi Intl. Stadium",
        city: "Hyderabad",
        home: TeamCode::Srh,
        away: TeamCode::Dc,
        state: RowState::Live {
            overs: "12.3",
            runs: 97,
            wickets: 2,
            batting: TeamCode::Srh,
        },
        day_night: None,
    },
    // Upcoming
    MatchRow {
        id: "ipl2025-005",
        number: "Match 5",
        start_local: "2025-08-26T19:30:00+05:30",
        start_utc: "2025-08-26T14:00:00Z",
        stadium: "Sawai Mansingh Stadium",
        city: "Jaipur",
        home: TeamCode::Rr,
        away: TeamCode::Pbks,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-006",
        number: "Match 6",
        start_local: "2025-08-27T19:30:00+05:30",
        start_utc: "2025-08-27T14:00:00Z",
        stadium: "Narendra Modi Stadium",
        city: "Ahmedabad",
        home: TeamCode::Gt,
        away: TeamCode::Mi,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-007",
        number: "Match 7",
        start_local: "2025-08-28T19:30:00+05:30",
        start_utc: "2025-08-28T14:00:00Z",
        stadium: "Arun Jaitley Stadium",
        city: "Delhi",
        home: TeamCode::Dc,
        away: TeamCode::Csk,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-008",
        number: "Match 8",
        start_local: "2025-08-29T19:30:00+05:30",
        start_utc: "2025-08-29T14:00:00Z",
        stadium: "Eden Gardens",
        city: "Kolkata",
        home: TeamCode::Kkr,
        away: TeamCode::Rr,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-009",
        number: "Match 9",
        start_local: "2025-08-30T15:30:00+05:30",
        start_utc: "2025-08-30T10:00:00Z",
        stadium: "M. Chinnaswamy Stadium",
        city: "Bengaluru",
        home: TeamCode::Rcb,
        away: TeamCode::Lsg,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-010",
        number: "Match 10",
        start_local: "2025-09-01T19:30:00+05:30",
        start_utc: "2025-09-01T14:00:00Z",
        stadium: "MA Chidambaram Stadium",
        city: "Chennai",
        home: TeamCode::Csk,
        away: TeamCode::Gt,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-011",
        number: "Match 11",
        start_local: "2025-09-02T19:30:00+05:30",
        start_utc: "2025-09-02T14:00:00Z",
        stadium: "BRSABV Ekana Stadium",
        city: "Lucknow",
        home: TeamCode::Lsg,
        away: TeamCode::Srh,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-012",
        number: "Match 12",
        start_local: "2025-09-03T19:30:00+05:30",
        start_utc: "2025-09-03T14:00:00Z",
        stadium: "PCA IS Bindra Stadium",
        city: "Mohali",
        home: TeamCode::Pbks,
        away: TeamCode::Dc,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-013",
        number: "Match 13",
        start_local: "2025-09-04T19:30:00+05:30",
        start_utc: "2025-09-04T14:00:00Z",
        stadium: "Rajiv Gandhi Intl. Stadium",
        city: "Hyderabad",
        home: TeamCode::Srh,
        away: TeamCode::Mi,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-014",
        number: "Match 14",
        start_local: "2025-09-05T15:30:00+05:30",
        start_utc: "2025-09-05T10:00:00Z",
        stadium: "Sawai Mansingh Stadium",
        city: "Jaipur",
        home: TeamCode::Rr,
        away: TeamCode::Gt,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-015",
        number: "Match 15",
        start_local: "2025-09-06T19:30:00+05:30",
        start_utc: "2025-09-06T14:00:00Z",
        stadium: "Wankhede Stadium",
        city: "Mumbai",
        home: TeamCode::Mi,
        away: TeamCode::Rcb,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-016",
        number: "Match 16",
        start_local: "2025-09-07T19:30:00+05:30",
        start_utc: "2025-09-07T14:00:00Z",
        stadium: "Eden Gardens",
        city: "Kolkata",
        home: TeamCode::Kkr,
        away: TeamCode::Csk,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-017",
        number: "Match 17",
        start_local: "2025-09-08T19:30:00+05:30",
        start_utc: "2025-09-08T14:00:00Z",
        stadium: "Arun Jaitley Stadium",
        city: "Delhi",
        home: TeamCode::Dc,
        away: TeamCode::Pbks,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-018",
        number: "Match 18",
        start_local: "2025-09-09T19:30:00+05:30",
        start_utc: "2025-09-09T14:00:00Z",
        stadium: "M. Chinnaswamy Stadium",
        city: "Bengaluru",
        home: TeamCode::Rcb,
        away: TeamCode::Srh,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-019",
        number: "Match 19",
        start_local: "2025-09-10T19:30:00+05:30",
        start_utc: "2025-09-10T14:00:00Z",
        stadium: "MA Chidambaram Stadium",
        city: "Chennai",
        home: TeamCode::Csk,
        away: TeamCode::Rr,
        state: RowState::Upcoming,
        day_night: None,
    },
    MatchRow {
        id: "ipl2025-020",
        number: "Match 20",
        start_local: "2025-09-11T19:30:00+05:30",
        start_utc: "2025-09-11T14:00:00Z",
        stadium: "Narendra Modi Stadium",
        city: "Ahmedabad",
        home: TeamCode::Gt,
        away: TeamCode::Lsg,
        state: RowState::Upcoming,
        day_night: None,
    },
];
