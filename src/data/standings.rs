//! Points tables for the seasons with published standings.
//!
//! Rows are in rank order: points, then wins, then net run rate.

use super::{SeasonRows, StandingRow};
use crate::matches::types::FormResult::{Lost as L, NoResult as N, Won as W};
use crate::matches::types::{Season, TeamCode};

const SEASON_2025: &[StandingRow] = &[
    StandingRow {
        team: TeamCode::Pbks,
        played: 14,
        won: 9,
        lost: 4,
        no_result: 1,
        nrr: 0.372,
        runs_for: "2522/271.2",
        runs_against: "2478/275.4",
        form: &[W, W, L, W, L],
    },
    StandingRow {
        team: TeamCode::Rcb,
        played: 14,
        won: 9,
        lost: 4,
        no_result: 1,
        nrr: 0.301,
        runs_for: "2398/262.1",
        runs_against: "2356/265.3",
        form: &[W, W, L, N, W],
    },
    StandingRow {
        team: TeamCode::Gt,
        played: 14,
        won: 9,
        lost: 5,
        no_result: 0,
        nrr: 0.254,
        runs_for: "2541/278.3",
        runs_against: "2487/279.5",
        form: &[L, L, W, W, W],
    },
    StandingRow {
        team: TeamCode::Mi,
        played: 14,
        won: 8,
        lost: 6,
        no_result: 0,
        nrr: 1.14,
        runs_for: "2605/270.1",
        runs_against: "2304/272.0",
        form: &[L, W, W, L, W],
    },
    StandingRow {
        team: TeamCode::Dc,
        played: 14,
        won: 7,
        lost: 6,
        no_result: 1,
        nrr: 0.011,
        runs_for: "2390/265.2",
        runs_against: "2388/265.4",
        form: &[W, L, L, N, L],
    },
    StandingRow {
        team: TeamCode::Srh,
        played: 14,
        won: 6,
        lost: 7,
        no_result: 1,
        nrr: -0.241,
        runs_for: "2488/263.4",
        runs_against: "2541/262.1",
        form: &[W, W, L, N, L],
    },
    StandingRow {
        team: TeamCode::Lsg,
        played: 14,
        won: 6,
        lost: 8,
        no_result: 0,
        nrr: -0.376,
        runs_for: "2610/276.0",
        runs_against: "2689/273.5",
        form: &[L, W, L, L, L],
    },
    StandingRow {
        team: TeamCode::Kkr,
        played: 14,
        won: 5,
        lost: 7,
        no_result: 2,
        nrr: -0.305,
        runs_for: "2101/244.2",
        runs_against: "2160/243.1",
        form: &[N, L, N, W, L],
    },
    StandingRow {
        team: TeamCode::Rr,
        played: 14,
        won: 4,
        lost: 10,
        no_result: 0,
        nrr: -0.549,
        runs_for: "2543/277.5",
        runs_against: "2638/271.2",
        form: &[W, L, L, L, L],
    },
    StandingRow {
        team: TeamCode::Csk,
        played: 14,
        won: 4,
        lost: 10,
        no_result: 0,
        nrr: -0.647,
        runs_for: "2392/278.4",
        runs_against: "2511/274.0",
        form: &[W, L, L, W, L],
    },
];

const SEASON_2024: &[StandingRow] = &[
    StandingRow {
        team: TeamCode::Kkr,
        played: 14,
        won: 9,
        lost: 3,
        no_result: 2,
        nrr: 1.43,
        runs_for: "2389/226.0",
        runs_against: "2096/234.4",
        form: &[N, N, W, W, W],
    },
    StandingRow {
        team: TeamCode::Srh,
        played: 14,
        won: 8,
        lost: 5,
        no_result: 1,
        nrr: 0.414,
        runs_for: "2605/247.1",
        runs_against: "2521/252.3",
        form: &[N, W, L, W, W],
    },
    StandingRow {
        team: TeamCode::Rr,
        played: 14,
        won: 8,
        lost: 5,
        no_result: 1,
        nrr: 0.273,
        runs_for: "2334/250.4",
        runs_against: "2290/252.5",
        form: &[N, L, L, L, L],
    },
    StandingRow {
        team: TeamCode::Rcb,
        played: 14,
        won: 7,
        lost: 7,
        no_result: 0,
        nrr: 0.459,
        runs_for: "2758/265.2",
        runs_against: "2654/268.1",
        form: &[W, W, W, W, W],
    },
    StandingRow {
        team: TeamCode::Csk,
        played: 14,
        won: 7,
        lost: 7,
        no_result: 0,
        nrr: 0.392,
        runs_for: "2524/273.3",
        runs_against: "2421/272.4",
        form: &[L, W, L, W, L],
    },
    StandingRow {
        team: TeamCode::Dc,
        played: 14,
        won: 7,
        lost: 7,
        no_result: 0,
        nrr: -0.377,
        runs_for: "2573/272.5",
        runs_against: "2625/268.2",
        form: &[W, L, W, L, W],
    },
    StandingRow {
        team: TeamCode::Lsg,
        played: 14,
        won: 7,
        lost: 7,
        no_result: 0,
        nrr: -0.667,
        runs_for: "2483/277.4",
        runs_against: "2599/271.0",
        form: &[W, L, L, L, W],
    },
    StandingRow {
        team: TeamCode::Gt,
        played: 14,
        won: 5,
        lost: 7,
        no_result: 2,
        nrr: -1.06,
        runs_for: "1986/237.1",
        runs_against: "2169/233.0",
        form: &[N, N, L, W, L],
    },
    StandingRow {
        team: TeamCode::Pbks,
        played: 14,
        won: 5,
        lost: 9,
        no_result: 0,
        nrr: -0.353,
        runs_for: "2487/275.0",
        runs_against: "2549/274.1",
        form: &[L, L, W, L, L],
    },
    StandingRow {
        team: TeamCode::Mi,
        played: 14,
        won: 4,
        lost: 10,
        no_result: 0,
        nrr: -0.318,
        runs_for: "2568/272.3",
        runs_against: "2630/271.1",
        form: &[L, L, L, L, W],
    },
];

const SEASON_2023: &[StandingRow] = &[
    StandingRow {
        team: TeamCode::Gt,
        played: 14,
        won: 10,
        lost: 4,
        no_result: 0,
        nrr: 0.809,
        runs_for: "2450/269.1",
        runs_against: "2266/275.4",
        form: &[W, L, W, W, L],
    },
    StandingRow {
        team: TeamCode::Csk,
        played: 14,
        won: 8,
        lost: 5,
        no_result: 1,
        nrr: 0.652,
        runs_for: "2369/254.3",
        runs_against: "2240/260.1",
        form: &[W, N, W, L, W],
    },
    StandingRow {
        team: TeamCode::Lsg,
        played: 14,
        won: 8,
        lost: 5,
        no_result: 1,
        nrr: 0.284,
        runs_for: "2296/257.2",
        runs_against: "2264/260.4",
        form: &[W, N, L, W, W],
    },
    StandingRow {
        team: TeamCode::Mi,
        played: 14,
        won: 8,
        lost: 6,
        no_result: 0,
        nrr: -0.044,
        runs_for: "2592/272.4",
        runs_against: "2612/273.3",
        form: &[W, L, W, W, L],
    },
    StandingRow {
        team: TeamCode::Rr,
        played: 14,
        won: 7,
        lost: 7,
        no_result: 0,
        nrr: 0.148,
        runs_for: "2523/270.1",
        runs_against: "2475/271.2",
        form: &[L, W, L, W, L],
    },
    StandingRow {
        team: TeamCode::Rcb,
        played: 14,
        won: 7,
        lost: 7,
        no_result: 0,
        nrr: 0.135,
        runs_for: "2502/273.1",
        runs_against: "2463/272.5",
        form: &[L, W, W, L, W],
    },
    StandingRow {
        team: TeamCode::Kkr,
        played: 14,
        won: 6,
        lost: 8,
        no_result: 0,
        nrr: -0.239,
        runs_for: "2463/276.4",
        runs_against: "2506/274.0",
        form: &[L, W, L, W, L],
    },
    StandingRow {
        team: TeamCode::Pbks,
        played: 14,
        won: 6,
        lost: 8,
        no_result: 0,
        nrr: -0.304,
        runs_for: "2418/271.0",
        runs_against: "2482/272.3",
        form: &[L, L, W, L, W],
    },
    StandingRow {
        team: TeamCode::Dc,
        played: 14,
        won: 5,
        lost: 9,
        no_result: 0,
        nrr: -0.808,
        runs_for: "2155/275.3",
        runs_against: "2362/273.1",
        form: &[L, W, W, L, L],
    },
    StandingRow {
        team: TeamCode::Srh,
        played: 14,
        won: 4,
        lost: 10,
        no_result: 0,
        nrr: -0.59,
        runs_for: "2292/270.5",
        runs_against: "2430/272.4",
        form: &[L, L, L, W, L],
    },
];

/// Newest season first; this order is the season selector order.
pub static SEASONS: &[SeasonRows] = &[
    SeasonRows {
        season: Season(2025),
        rows: SEASON_2025,
    },
    SeasonRows {
        season: Season(2024),
        rows: SEASON_2024,
    },
    SeasonRows {
        season: Season(2023),
        rows: SEASON_2023,
    },
];
