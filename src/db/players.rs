use sqlx::PgPool;
use tracing::{debug, info};

use crate::models::player::{
    CreatePlayerRequest, PlayerDetail, PlayerMatchStatLine, PlayerProfile, PlayerWithTeam,
    UpdatePlayerRequest,
};

#[derive(Debug)]
pub struct PlayerQueries {
    pool: PgPool,
}

impl PlayerQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All players, newest first, with the name of their team if it still exists.
    pub async fn list(&self) -> Result<Vec<PlayerWithTeam>, sqlx::Error> {
        sqlx::query_as::<_, PlayerWithTeam>(
            r#"
            SELECT
                p.id, p.name, p.age, p.sport, p.team_id, p.status,
                p.matches_played, p.runs_scored,
                t.name AS team_name
            FROM players p
            LEFT JOIN teams t ON p.team_id = t.id
            ORDER BY p.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Player row plus its match stats, or `None` when the id is unknown.
    /// Issued as two sequential statements.
    pub async fn profile(&self, player_id: i32) -> Result<Option<PlayerProfile>, sqlx::Error> {
        let player = sqlx::query_as::<_, PlayerDetail>(
            r#"
            SELECT
                p.id, p.name, p.age, p.sport, p.team_id, p.status,
                p.matches_played, p.runs_scored,
                t.name AS team_name, t.coach, t.sport AS team_sport
            FROM players p
            LEFT JOIN teams t ON p.team_id = t.id
            WHERE p.id = $1
            "#,
        )
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(player) = player else {
            debug!("No player with id {}", player_id);
            return Ok(None);
        };

        let match_stats = sqlx::query_as::<_, PlayerMatchStatLine>(
            r#"
            SELECT
                pms.id, pms.player_id, pms.match_id, pms.runs_scored,
                pms.wickets_taken, pms.minutes_played,
                m.match_date,
                e.name AS event_name,
                t1.name AS team1_name,
                t2.name AS team2_name
            FROM player_match_stats pms
            JOIN matches m ON pms.match_id = m.id
            JOIN events e ON m.event_id = e.id
            JOIN teams t1 ON m.team1_id = t1.id
            JOIN teams t2 ON m.team2_id = t2.id
            WHERE pms.player_id = $1
            ORDER BY m.match_date DESC NULLS LAST, pms.id DESC
            "#,
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(PlayerProfile { player, match_stats }))
    }

    pub async fn create(&self, request: &CreatePlayerRequest) -> Result<i32, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO players (name, age, sport, team_id, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(request.name.as_deref())
        .bind(request.age)
        .bind(request.sport.as_deref())
        .bind(request.team_id)
        .bind(request.status_or_default())
        .fetch_one(&self.pool)
        .await?;

        info!("Created player {} with id {}", request.name.as_deref().unwrap_or_default(), id);
        Ok(id)
    }

    /// Overwrites every mutable column. Absent fields are written as NULL.
    pub async fn replace(&self, player_id: i32, request: &UpdatePlayerRequest) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE players
            SET
                name = $1,
                age = $2,
                sport = $3,
                team_id = $4,
                matches_played = $5,
                runs_scored = $6,
                status = $7
            WHERE id = $8
            "#,
        )
        .bind(request.name.as_deref())
        .bind(request.age)
        .bind(request.sport.as_deref())
        .bind(request.team_id)
        .bind(request.matches_played)
        .bind(request.runs_scored)
        .bind(request.status.as_deref())
        .bind(player_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Dependent stat rows go with the player via `ON DELETE CASCADE`.
    pub async fn delete(&self, player_id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(player_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
