use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Audit entry written by the `matches` trigger, read-only here.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchLogEntry {
    pub id: i32,
    pub match_id: i32,
    pub action_type: String,
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub match_date: Option<NaiveDate>,
    /// "TeamA vs TeamB"
    pub match_info: String,
}
