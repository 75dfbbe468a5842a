//! Row shapes for the analytical report catalog under `/api/queries`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// q1 / top-players
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TopPlayer {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub sport: String,
    pub matches_played: i32,
    pub runs_scored: i32,
    pub team_name: String,
    pub coach: Option<String>,
    pub avg_per_match: Option<f64>,
}

/// q2 / team-stats
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TeamAggregate {
    pub team_id: i32,
    pub team_name: String,
    pub sport: String,
    pub player_count: i64,
    pub avg_age: Option<f64>,
    pub total_runs: i64,
    pub total_matches: i64,
    pub team_avg_performance: Option<f64>,
}

/// q3 / event-progress
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct EventProgress {
    pub event_id: i32,
    pub event_name: String,
    pub sport: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub total_matches: i64,
    pub completed_matches: i64,
    pub ongoing_matches: i64,
    pub scheduled_matches: i64,
    pub completion_percentage: Option<f64>,
}

/// q4 / recent-matches. `days_since_match` is negative for future fixtures.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchResult {
    pub match_id: i32,
    pub match_date: Option<NaiveDate>,
    pub status: String,
    pub event_name: Option<String>,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub team1_score: Option<i32>,
    pub team2_score: Option<i32>,
    pub winner_name: Option<String>,
    pub score_difference: Option<i32>,
    pub days_since_match: Option<i32>,
}

/// q5: one row per team with its roster folded into a single string.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TeamRoster {
    pub team_id: i32,
    pub team_name: String,
    pub sport: String,
    pub player_count: i64,
    pub players: Option<String>,
}

/// q6
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct UpcomingMatch {
    pub match_id: i32,
    pub match_date: Option<NaiveDate>,
    pub status: String,
    pub location: Option<String>,
    pub event_name: Option<String>,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub days_until_match: Option<i32>,
}

/// q7: a single match performance above the all-time per-match average.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct AboveAveragePerformance {
    pub player_id: i32,
    pub player_name: String,
    pub team_name: Option<String>,
    pub match_id: i32,
    pub match_date: Option<NaiveDate>,
    pub runs_scored: i32,
    pub overall_average: f64,
}

/// q8
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TeamWinRate {
    pub team_id: i32,
    pub team_name: String,
    pub sport: String,
    pub matches_played: i64,
    pub matches_won: i64,
    pub win_percentage: f64,
}

/// q9. Ties on wins go to the lowest team id.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct EventDominance {
    pub event_id: i32,
    pub event_name: String,
    pub sport: Option<String>,
    pub top_team_id: Option<i32>,
    pub top_team_name: Option<String>,
    pub max_wins: Option<i64>,
}

/// q10. `row_type` is `detail`, `sport_total` or `grand_total`.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerRollup {
    pub sport: Option<String>,
    pub status: Option<String>,
    pub row_type: String,
    pub player_count: i64,
    pub avg_age: Option<f64>,
    pub total_runs: i64,
}

impl PlayerRollup {
    pub fn is_rollup(&self) -> bool {
        self.row_type != "detail"
    }
}
