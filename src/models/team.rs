use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::common::deserialize_optional_i32;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub sport: String,
    pub coach: Option<String>,
    pub founded: Option<i32>,
    pub total_players: i32,
    pub wins: i32,
}

/// Request to register a team.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateTeamRequest {
    pub name: Option<String>,
    pub sport: Option<String>,
    pub coach: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub founded: Option<i32>,
}

/// Aggregate view of one team across its roster and completed matches.
///
/// `win_percentage` is 0 when the team has not completed a match.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TeamStatistics {
    pub team_id: i32,
    pub team_name: String,
    pub sport: String,
    pub coach: Option<String>,
    pub total_players: i64,
    pub avg_player_age: Option<f64>,
    pub total_runs: i64,
    pub total_player_matches: i64,
    pub matches_played: i64,
    pub matches_won: i64,
    pub win_percentage: f64,
    pub events_participated: i64,
}
