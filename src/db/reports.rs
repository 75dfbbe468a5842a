use sqlx::PgPool;

use crate::models::common::EntityCounts;
use crate::models::report::{
    AboveAveragePerformance, EventDominance, EventProgress, MatchResult, PlayerRollup,
    TeamAggregate, TeamRoster, TeamWinRate, TopPlayer, UpcomingMatch,
};

const MATCH_RESULT_SELECT: &str = r#"
    SELECT
        m.id AS match_id,
        m.match_date,
        m.status,
        e.name AS event_name,
        t1.name AS team1_name,
        t2.name AS team2_name,
        m.team1_score,
        m.team2_score,
        tw.name AS winner_name,
        ABS(m.team1_score - m.team2_score) AS score_difference,
        (CURRENT_DATE - m.match_date) AS days_since_match
    FROM matches m
    LEFT JOIN events e ON m.event_id = e.id
    LEFT JOIN teams t1 ON m.team1_id = t1.id
    LEFT JOIN teams t2 ON m.team2_id = t2.id
    LEFT JOIN teams tw ON m.winner_id = tw.id
"#;

/// Read-only analytical queries. Every report is a single statement, so a
/// repeated call without intervening writes yields the same rows in the
/// same order.
#[derive(Debug)]
pub struct ReportQueries {
    pool: PgPool,
}

impl ReportQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn entity_counts(&self) -> Result<EntityCounts, sqlx::Error> {
        sqlx::query_as::<_, EntityCounts>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM players) AS players,
                (SELECT COUNT(*) FROM teams) AS teams,
                (SELECT COUNT(*) FROM events) AS events,
                (SELECT COUNT(*) FROM matches) AS matches
            "#,
        )
        .fetch_one(&self.pool)
        .await
    }

    /// Five best active run scorers with at least one match and a team.
    pub async fn top_players(&self) -> Result<Vec<TopPlayer>, sqlx::Error> {
        sqlx::query_as::<_, TopPlayer>(
            r#"
            SELECT
                p.id, p.name, p.age, p.sport, p.matches_played, p.runs_scored,
                t.name AS team_name,
                t.coach,
                ROUND(p.runs_scored::numeric / NULLIF(p.matches_played, 0), 2)::float8 AS avg_per_match
            FROM players p
            INNER JOIN teams t ON p.team_id = t.id
            WHERE p.status = 'active' AND p.matches_played > 0
            ORDER BY p.runs_scored DESC, p.id ASC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn team_aggregates(&self) -> Result<Vec<TeamAggregate>, sqlx::Error> {
        sqlx::query_as::<_, TeamAggregate>(
            r#"
            SELECT
                t.id AS team_id,
                t.name AS team_name,
                t.sport,
                COUNT(p.id) AS player_count,
                ROUND(AVG(p.age)::numeric, 2)::float8 AS avg_age,
                COALESCE(SUM(p.runs_scored), 0) AS total_runs,
                COALESCE(SUM(p.matches_played), 0) AS total_matches,
                ROUND(SUM(p.runs_scored)::numeric / NULLIF(SUM(p.matches_played), 0), 2)::float8 AS team_avg_performance
            FROM teams t
            INNER JOIN players p ON p.team_id = t.id
            GROUP BY t.id, t.name, t.sport
            ORDER BY total_runs DESC, t.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn event_progress(&self) -> Result<Vec<EventProgress>, sqlx::Error> {
        sqlx::query_as::<_, EventProgress>(
            r#"
            SELECT
                e.id AS event_id,
                e.name AS event_name,
                e.sport,
                e.start_date,
                e.end_date,
                COUNT(m.id) AS total_matches,
                COUNT(m.id) FILTER (WHERE m.status = 'completed') AS completed_matches,
                COUNT(m.id) FILTER (WHERE m.status = 'ongoing') AS ongoing_matches,
                COUNT(m.id) FILTER (WHERE m.status = 'scheduled') AS scheduled_matches,
                ROUND(
                    COUNT(m.id) FILTER (WHERE m.status = 'completed') * 100.0 / NULLIF(COUNT(m.id), 0),
                    2
                )::float8 AS completion_percentage
            FROM events e
            LEFT JOIN matches m ON m.event_id = e.id
            GROUP BY e.id
            ORDER BY e.start_date DESC, e.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn completed_results(&self) -> Result<Vec<MatchResult>, sqlx::Error> {
        let sql = format!(
            "{} WHERE m.status = 'completed' ORDER BY m.match_date DESC NULLS LAST, m.id DESC",
            MATCH_RESULT_SELECT
        );
        sqlx::query_as::<_, MatchResult>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn recent_matches(&self) -> Result<Vec<MatchResult>, sqlx::Error> {
        let sql = format!(
            "{} ORDER BY m.match_date DESC NULLS LAST, m.id DESC LIMIT 10",
            MATCH_RESULT_SELECT
        );
        sqlx::query_as::<_, MatchResult>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    /// Roster per team as `"name (Age: x, Status: y)"` entries joined with
    /// `"; "`, best run scorer first. Empty teams have a null list.
    pub async fn rosters_by_team(&self) -> Result<Vec<TeamRoster>, sqlx::Error> {
        sqlx::query_as::<_, TeamRoster>(
            r#"
            SELECT
                t.id AS team_id,
                t.name AS team_name,
                t.sport,
                COUNT(p.id) AS player_count,
                STRING_AGG(
                    p.name || ' (Age: ' || p.age || ', Status: ' || p.status || ')',
                    '; '
                    ORDER BY p.runs_scored DESC, p.id ASC
                ) AS players
            FROM teams t
            LEFT JOIN players p ON p.team_id = t.id
            GROUP BY t.id
            ORDER BY t.name ASC, t.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn upcoming_matches(&self) -> Result<Vec<UpcomingMatch>, sqlx::Error> {
        sqlx::query_as::<_, UpcomingMatch>(
            r#"
            SELECT
                m.id AS match_id,
                m.match_date,
                m.status,
                m.location,
                e.name AS event_name,
                t1.name AS team1_name,
                t2.name AS team2_name,
                (m.match_date - CURRENT_DATE) AS days_until_match
            FROM matches m
            LEFT JOIN events e ON m.event_id = e.id
            LEFT JOIN teams t1 ON m.team1_id = t1.id
            LEFT JOIN teams t2 ON m.team2_id = t2.id
            WHERE m.status IN ('scheduled', 'ongoing')
            ORDER BY m.match_date ASC NULLS LAST, m.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Stat lines whose runs beat the average over every stat line.
    pub async fn above_average_performers(&self) -> Result<Vec<AboveAveragePerformance>, sqlx::Error> {
        sqlx::query_as::<_, AboveAveragePerformance>(
            r#"
            SELECT
                p.id AS player_id,
                p.name AS player_name,
                t.name AS team_name,
                pms.match_id,
                m.match_date,
                pms.runs_scored,
                ROUND(overall.average, 2)::float8 AS overall_average
            FROM player_match_stats pms
            JOIN players p ON pms.player_id = p.id
            JOIN matches m ON pms.match_id = m.id
            LEFT JOIN teams t ON p.team_id = t.id
            CROSS JOIN (SELECT AVG(runs_scored) AS average FROM player_match_stats) overall
            WHERE pms.runs_scored > overall.average
            ORDER BY pms.runs_scored DESC, pms.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn win_rates(&self) -> Result<Vec<TeamWinRate>, sqlx::Error> {
        sqlx::query_as::<_, TeamWinRate>(
            r#"
            SELECT
                t.id AS team_id,
                t.name AS team_name,
                t.sport,
                COUNT(m.id) AS matches_played,
                COUNT(m.id) FILTER (WHERE m.winner_id = t.id) AS matches_won,
                COALESCE(
                    ROUND(COUNT(m.id) FILTER (WHERE m.winner_id = t.id) * 100.0 / NULLIF(COUNT(m.id), 0), 2),
                    0
                )::float8 AS win_percentage
            FROM teams t
            LEFT JOIN matches m
                ON (m.team1_id = t.id OR m.team2_id = t.id) AND m.status = 'completed'
            GROUP BY t.id
            ORDER BY t.sport ASC, matches_won DESC, t.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Team with the most wins per event; equal win counts resolve to the
    /// lowest team id.
    pub async fn event_dominance(&self) -> Result<Vec<EventDominance>, sqlx::Error> {
        sqlx::query_as::<_, EventDominance>(
            r#"
            WITH event_wins AS (
                SELECT event_id, winner_id AS team_id, COUNT(*) AS wins
                FROM matches
                WHERE winner_id IS NOT NULL AND event_id IS NOT NULL
                GROUP BY event_id, winner_id
            ),
            ranked AS (
                SELECT
                    event_id, team_id, wins,
                    ROW_NUMBER() OVER (PARTITION BY event_id ORDER BY wins DESC, team_id ASC) AS win_rank
                FROM event_wins
            )
            SELECT
                e.id AS event_id,
                e.name AS event_name,
                e.sport,
                r.team_id AS top_team_id,
                t.name AS top_team_name,
                r.wins AS max_wins
            FROM events e
            LEFT JOIN ranked r ON r.event_id = e.id AND r.win_rank = 1
            LEFT JOIN teams t ON t.id = r.team_id
            ORDER BY e.start_date DESC, e.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Player counts by sport and status with a total row per sport and a
    /// grand total row last.
    pub async fn player_rollup(&self) -> Result<Vec<PlayerRollup>, sqlx::Error> {
        sqlx::query_as::<_, PlayerRollup>(
            r#"
            SELECT
                sport,
                status,
                CASE
                    WHEN GROUPING(sport) = 1 THEN 'grand_total'
                    WHEN GROUPING(status) = 1 THEN 'sport_total'
                    ELSE 'detail'
                END AS row_type,
                COUNT(*) AS player_count,
                ROUND(AVG(age)::numeric, 2)::float8 AS avg_age,
                COALESCE(SUM(runs_scored), 0) AS total_runs
            FROM players
            GROUP BY ROLLUP (sport, status)
            ORDER BY GROUPING(sport), sport, GROUPING(status), status
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
