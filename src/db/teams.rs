use sqlx::PgPool;
use tracing::info;

use crate::models::team::{CreateTeamRequest, Team, TeamStatistics};

#[derive(Debug)]
pub struct TeamQueries {
    pool: PgPool,
}

impl TeamQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            r#"
            SELECT id, name, sport, coach, founded, total_players, wins
            FROM teams
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create(&self, request: &CreateTeamRequest) -> Result<i32, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO teams (name, sport, coach, founded)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(request.name.as_deref())
        .bind(request.sport.as_deref())
        .bind(request.coach.as_deref())
        .bind(request.founded)
        .fetch_one(&self.pool)
        .await?;

        info!("Created team {} with id {}", request.name.as_deref().unwrap_or_default(), id);
        Ok(id)
    }

    /// Roster and match-record aggregate for one team. Only completed
    /// matches count as played; `None` when the team does not exist.
    pub async fn statistics(&self, team_id: i32) -> Result<Option<TeamStatistics>, sqlx::Error> {
        sqlx::query_as::<_, TeamStatistics>(
            r#"
            WITH roster AS (
                SELECT
                    COUNT(*) AS total_players,
                    ROUND(AVG(age)::numeric, 2)::float8 AS avg_player_age,
                    COALESCE(SUM(runs_scored), 0) AS total_runs,
                    COALESCE(SUM(matches_played), 0) AS total_player_matches
                FROM players
                WHERE team_id = $1
            ),
            record AS (
                SELECT
                    COUNT(*) AS matches_played,
                    COUNT(*) FILTER (WHERE winner_id = $1) AS matches_won
                FROM matches
                WHERE (team1_id = $1 OR team2_id = $1) AND status = 'completed'
            ),
            participation AS (
                SELECT COUNT(DISTINCT event_id) AS events_participated
                FROM matches
                WHERE team1_id = $1 OR team2_id = $1
            )
            SELECT
                t.id AS team_id,
                t.name AS team_name,
                t.sport,
                t.coach,
                roster.total_players,
                roster.avg_player_age,
                roster.total_runs,
                roster.total_player_matches,
                record.matches_played,
                record.matches_won,
                COALESCE(
                    ROUND(record.matches_won * 100.0 / NULLIF(record.matches_played, 0), 2),
                    0
                )::float8 AS win_percentage,
                participation.events_participated
            FROM teams t
            CROSS JOIN roster
            CROSS JOIN record
            CROSS JOIN participation
            WHERE t.id = $1
            "#,
        )
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await
    }
}
