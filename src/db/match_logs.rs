use sqlx::PgPool;

use crate::models::match_log::MatchLogEntry;

pub const LOG_PAGE_SIZE: i64 = 50;
pub const LATEST_LOG_SIZE: i64 = 10;

#[derive(Debug)]
pub struct MatchLogQueries {
    pool: PgPool,
}

impl MatchLogQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Newest audit entries first, each labelled "TeamA vs TeamB".
    pub async fn recent(&self, limit: i64) -> Result<Vec<MatchLogEntry>, sqlx::Error> {
        sqlx::query_as::<_, MatchLogEntry>(
            r#"
            SELECT
                ml.id,
                ml.match_id,
                ml.action_type,
                ml.description,
                ml."timestamp" AS "timestamp",
                m.match_date,
                CONCAT(t1.name, ' vs ', t2.name) AS match_info
            FROM match_logs ml
            JOIN matches m ON ml.match_id = m.id
            JOIN teams t1 ON m.team1_id = t1.id
            JOIN teams t2 ON m.team2_id = t2.id
            ORDER BY ml."timestamp" DESC, ml.id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }
}
