use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

/// Every failure a handler can surface. Rendered as `{"error": <message>}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    /// A JSON body that could not be read into the request type. Reported
    /// as 500 like every other non-404 failure.
    #[error("{0}")]
    InvalidBody(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// 404 for a request whose `{id}` segment is not a valid id, named after
    /// the collection it was aimed at.
    pub fn path_not_found(path: &str) -> Self {
        let resource = path
            .strip_prefix("/api/")
            .and_then(|rest| rest.split('/').next())
            .unwrap_or_default();
        let message = match resource {
            "players" => "Player not found",
            "teams" => "Team not found",
            "events" => "Event not found",
            "matches" => "Match not found",
            _ => "Not found",
        };
        Self::not_found(message)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidBody(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Database(e) = self {
            tracing::error!(error = ?e, "Database operation failed");
        }
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(error: AppError) -> serde_json::Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.expect("Failed to read body");
        serde_json::from_slice(&bytes).expect("Body is not JSON")
    }

    #[actix_web::test]
    async fn not_found_renders_404_with_message() {
        let error = AppError::not_found("Player not found");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(error).await, json!({ "error": "Player not found" }));
    }

    #[actix_web::test]
    async fn database_failures_surface_their_message_as_500() {
        let error = AppError::from(sqlx::Error::RowNotFound);
        let message = sqlx::Error::RowNotFound.to_string();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(error).await, json!({ "error": message }));
    }

    #[actix_web::test]
    async fn unreadable_bodies_are_500() {
        let error = AppError::InvalidBody("invalid integer: \"twenty\"".into());
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(error).await,
            json!({ "error": "invalid integer: \"twenty\"" })
        );
    }

    #[test]
    fn bad_path_ids_are_named_after_their_collection() {
        let message = |path: &str| AppError::path_not_found(path).to_string();
        assert_eq!(message("/api/players/abc"), "Player not found");
        assert_eq!(message("/api/teams/abc/statistics"), "Team not found");
        assert_eq!(message("/api/matches/99999999999"), "Match not found");
        assert_eq!(message("/somewhere/else"), "Not found");
        assert_eq!(
            AppError::path_not_found("/api/players/abc").status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
