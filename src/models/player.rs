use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::common::deserialize_optional_i32;

pub const DEFAULT_PLAYER_STATUS: &str = "active";

/// A player row joined to the name of its team.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerWithTeam {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub sport: String,
    pub team_id: Option<i32>,
    pub status: String,
    pub matches_played: i32,
    pub runs_scored: i32,
    pub team_name: Option<String>,
}

/// Single player with the team details shown on the profile view.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerDetail {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub sport: String,
    pub team_id: Option<i32>,
    pub status: String,
    pub matches_played: i32,
    pub runs_scored: i32,
    pub team_name: Option<String>,
    pub coach: Option<String>,
    pub team_sport: Option<String>,
}

/// One per-match stat line for a player, with match context resolved.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerMatchStatLine {
    pub id: i32,
    pub player_id: i32,
    pub match_id: i32,
    pub runs_scored: i32,
    pub wickets_taken: i32,
    pub minutes_played: i32,
    pub match_date: Option<NaiveDate>,
    pub event_name: String,
    pub team1_name: String,
    pub team2_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerProfile {
    pub player: PlayerDetail,
    #[serde(rename = "matchStats")]
    pub match_stats: Vec<PlayerMatchStatLine>,
}

/// Request to add a player. Missing `status` becomes `active`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreatePlayerRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub age: Option<i32>,
    pub sport: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub team_id: Option<i32>,
    pub status: Option<String>,
}

impl CreatePlayerRequest {
    pub fn status_or_default(&self) -> &str {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_PLAYER_STATUS)
    }
}

/// Full-replace update: every column is written with whatever was sent,
/// absent fields included (as NULL).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpdatePlayerRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub age: Option<i32>,
    pub sport: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub team_id: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub matches_played: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub runs_scored: Option<i32>,
    pub status: Option<String>,
}
