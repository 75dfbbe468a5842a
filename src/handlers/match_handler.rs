use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::matches::MatchQueries;
use crate::error::AppError;
use crate::models::common::{CreatedResponse, MessageResponse};
use crate::models::matches::{CreateMatchRequest, UpdateMatchRequest};

#[tracing::instrument(name = "List matches", skip(pool))]
pub async fn list_matches(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let matches = MatchQueries::new(pool.get_ref().clone()).list().await?;
    Ok(HttpResponse::Ok().json(matches))
}

#[tracing::instrument(
    name = "Create match",
    skip(request, pool),
    fields(event_id = ?request.event_id, team1_id = ?request.team1_id, team2_id = ?request.team2_id)
)]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let id = MatchQueries::new(pool.get_ref().clone())
        .create(&request)
        .await?;

    Ok(HttpResponse::Ok().json(CreatedResponse::new(id, "Match added successfully")))
}

/// The winner is taken from the request as-is.
#[tracing::instrument(
    name = "Update match result",
    skip(request, pool),
    fields(status = ?request.status, winner_id = ?request.winner_id)
)]
pub async fn update_match(
    match_id: i32,
    request: web::Json<UpdateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let updated = MatchQueries::new(pool.get_ref().clone())
        .replace_result(match_id, &request)
        .await?;
    if updated == 0 {
        tracing::warn!("Update matched no match with id {}", match_id);
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Match updated successfully")))
}
