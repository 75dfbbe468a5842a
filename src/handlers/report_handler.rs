use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::reports::ReportQueries;
use crate::error::AppError;

/// Every entry in the `/queries` catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    TopPlayers,
    TeamStats,
    EventProgress,
    CompletedResults,
    RosterByTeam,
    UpcomingMatches,
    AboveAverage,
    WinRate,
    EventDominance,
    PlayerRollup,
    RecentMatches,
}

impl Report {
    /// Resolves a catalog name, including the `q1`..`q10` aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        let report = match name {
            "q1" | "top-players" => Report::TopPlayers,
            "q2" | "team-stats" => Report::TeamStats,
            "q3" | "event-progress" => Report::EventProgress,
            "q4" => Report::CompletedResults,
            "q5" => Report::RosterByTeam,
            "q6" => Report::UpcomingMatches,
            "q7" => Report::AboveAverage,
            "q8" => Report::WinRate,
            "q9" => Report::EventDominance,
            "q10" => Report::PlayerRollup,
            "recent-matches" => Report::RecentMatches,
            _ => return None,
        };
        Some(report)
    }
}

#[tracing::instrument(name = "Get dashboard counts", skip(pool))]
pub async fn get_entity_counts(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let counts = ReportQueries::new(pool.get_ref().clone()).entity_counts().await?;
    Ok(HttpResponse::Ok().json(counts))
}

#[tracing::instrument(name = "Run report", skip(pool))]
pub async fn run_report(name: String, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let report = Report::from_name(&name)
        .ok_or_else(|| AppError::not_found(format!("Unknown query: {}", name)))?;
    let queries = ReportQueries::new(pool.get_ref().clone());

    let response = match report {
        Report::TopPlayers => HttpResponse::Ok().json(queries.top_players().await?),
        Report::TeamStats => HttpResponse::Ok().json(queries.team_aggregates().await?),
        Report::EventProgress => HttpResponse::Ok().json(queries.event_progress().await?),
        Report::CompletedResults => HttpResponse::Ok().json(queries.completed_results().await?),
        Report::RosterByTeam => HttpResponse::Ok().json(queries.rosters_by_team().await?),
        Report::UpcomingMatches => HttpResponse::Ok().json(queries.upcoming_matches().await?),
        Report::AboveAverage => HttpResponse::Ok().json(queries.above_average_performers().await?),
        Report::WinRate => HttpResponse::Ok().json(queries.win_rates().await?),
        Report::EventDominance => HttpResponse::Ok().json(queries.event_dominance().await?),
        Report::PlayerRollup => HttpResponse::Ok().json(queries.player_rollup().await?),
        Report::RecentMatches => HttpResponse::Ok().json(queries.recent_matches().await?),
    };

    Ok(response)
}
