use sqlx::PgPool;
use tracing::info;

use crate::models::matches::{CreateMatchRequest, MatchWithNames, UpdateMatchRequest};

#[derive(Debug)]
pub struct MatchQueries {
    pool: PgPool,
}

impl MatchQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<MatchWithNames>, sqlx::Error> {
        sqlx::query_as::<_, MatchWithNames>(
            r#"
            SELECT
                m.id, m.event_id, m.team1_id, m.team2_id, m.match_date, m.location,
                m.status, m.team1_score, m.team2_score, m.winner_id,
                e.name AS event_name,
                t1.name AS team1_name,
                t2.name AS team2_name,
                tw.name AS winner_name
            FROM matches m
            LEFT JOIN events e ON m.event_id = e.id
            LEFT JOIN teams t1 ON m.team1_id = t1.id
            LEFT JOIN teams t2 ON m.team2_id = t2.id
            LEFT JOIN teams tw ON m.winner_id = tw.id
            ORDER BY m.match_date DESC NULLS LAST, m.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// New matches start as `scheduled` (column default).
    pub async fn create(&self, request: &CreateMatchRequest) -> Result<i32, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO matches (event_id, team1_id, team2_id, match_date, location)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(request.event_id)
        .bind(request.team1_id)
        .bind(request.team2_id)
        .bind(request.match_date)
        .bind(request.location.as_deref())
        .fetch_one(&self.pool)
        .await?;

        info!("Created match {} between teams {:?} and {:?}", id, request.team1_id, request.team2_id);
        Ok(id)
    }

    /// Writes status, both scores and the winner exactly as given.
    pub async fn replace_result(&self, match_id: i32, request: &UpdateMatchRequest) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE matches
            SET
                status = $1,
                team1_score = $2,
                team2_score = $3,
                winner_id = $4
            WHERE id = $5
            "#,
        )
        .bind(request.status.as_deref())
        .bind(request.team1_score)
        .bind(request.team2_score)
        .bind(request.winner_id)
        .bind(match_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
