use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::common::deserialize_optional_i32;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub sport: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub total_teams: i32,
    pub status: String,
}

/// Request to add an event. `end_date >= start_date` is not checked.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateEventRequest {
    pub name: Option<String>,
    pub sport: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub total_teams: Option<i32>,
}
