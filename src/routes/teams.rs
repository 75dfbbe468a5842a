use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::error::AppError;
use crate::handlers::team_handler;
use crate::models::team::CreateTeamRequest;

#[get("/teams")]
pub async fn get_teams(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    team_handler::list_teams(pool).await
}

/// Aggregate statistics for one team
#[get("/teams/{team_id}/statistics")]
pub async fn get_team_statistics(
    path: web::Path<i32>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    team_handler::get_team_statistics(team_id, pool).await
}

#[post("/teams")]
pub async fn create_team(
    request: web::Json<CreateTeamRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    team_handler::create_team(request, pool).await
}
