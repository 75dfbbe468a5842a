use sqlx::PgPool;
use tracing::info;

use crate::models::event::{CreateEventRequest, Event};

#[derive(Debug)]
pub struct EventQueries {
    pool: PgPool,
}

impl EventQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, sport, start_date, end_date, location, total_teams, status
            FROM events
            ORDER BY start_date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create(&self, request: &CreateEventRequest) -> Result<i32, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO events (name, sport, start_date, end_date, location, total_teams)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0))
            RETURNING id
            "#,
        )
        .bind(request.name.as_deref())
        .bind(request.sport.as_deref())
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(request.location.as_deref())
        .bind(request.total_teams)
        .fetch_one(&self.pool)
        .await?;

        info!("Created event {} with id {}", request.name.as_deref().unwrap_or_default(), id);
        Ok(id)
    }
}
