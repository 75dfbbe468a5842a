use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::db::teams::TeamQueries;
use crate::error::AppError;
use crate::models::common::CreatedResponse;
use crate::models::team::CreateTeamRequest;

#[tracing::instrument(name = "List teams", skip(pool))]
pub async fn list_teams(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let teams = TeamQueries::new(pool.get_ref().clone()).list().await?;
    Ok(HttpResponse::Ok().json(teams))
}

/// Unknown teams answer with an empty object rather than 404.
#[tracing::instrument(name = "Get team statistics", skip(pool))]
pub async fn get_team_statistics(
    team_id: i32,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    match TeamQueries::new(pool.get_ref().clone()).statistics(team_id).await? {
        Some(statistics) => Ok(HttpResponse::Ok().json(statistics)),
        None => Ok(HttpResponse::Ok().json(json!({}))),
    }
}

#[tracing::instrument(name = "Create team", skip(request, pool), fields(team_name = ?request.name))]
pub async fn create_team(
    request: web::Json<CreateTeamRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let id = TeamQueries::new(pool.get_ref().clone())
        .create(&request)
        .await?;

    Ok(HttpResponse::Ok().json(CreatedResponse::new(id, "Team added successfully")))
}
