use serde::{de, Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Body returned by every insert endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreatedResponse {
    pub id: i32,
    pub message: String,
}

impl CreatedResponse {
    pub fn new(id: i32, message: impl Into<String>) -> Self {
        Self { id, message: message.into() }
    }
}

/// Body returned by update and delete endpoints.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Row counts shown on the dashboard header.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq)]
pub struct EntityCounts {
    pub players: i64,
    pub teams: i64,
    pub events: i64,
    pub matches: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

/// Reads an optional integer sent either as a JSON number or as a numeric
/// string (form inputs post `"age": "20"`). Null, a missing field and an
/// empty string all become `None`.
pub fn deserialize_optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("integer {} is out of range", n))),
        Some(NumberOrText::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i32>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid integer: \"{}\"", text)))
        }
    }
}
