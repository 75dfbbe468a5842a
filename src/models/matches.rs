use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::common::deserialize_optional_i32;

/// Match row with event and team names resolved through left joins, so
/// rows with dangling references still show up with null names.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchWithNames {
    pub id: i32,
    pub event_id: Option<i32>,
    pub team1_id: Option<i32>,
    pub team2_id: Option<i32>,
    pub match_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub status: String,
    pub team1_score: Option<i32>,
    pub team2_score: Option<i32>,
    pub winner_id: Option<i32>,
    pub event_name: Option<String>,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub winner_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateMatchRequest {
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub event_id: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub team1_id: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub team2_id: Option<i32>,
    pub match_date: Option<NaiveDate>,
    pub location: Option<String>,
}

/// Full-replace result update. The caller decides `winner_id`; it is not
/// derived from the scores nor checked against the two teams.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpdateMatchRequest {
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub team1_score: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub team2_score: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub winner_id: Option<i32>,
}
