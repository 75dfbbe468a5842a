use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::players::PlayerQueries;
use crate::error::AppError;
use crate::models::common::{CreatedResponse, MessageResponse};
use crate::models::player::{CreatePlayerRequest, UpdatePlayerRequest};

#[tracing::instrument(name = "List players", skip(pool))]
pub async fn list_players(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let players = PlayerQueries::new(pool.get_ref().clone()).list().await?;
    Ok(HttpResponse::Ok().json(players))
}

#[tracing::instrument(name = "Get player details", skip(pool))]
pub async fn get_player_details(
    player_id: i32,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let profile = PlayerQueries::new(pool.get_ref().clone())
        .profile(player_id)
        .await?
        .ok_or_else(|| AppError::not_found("Player not found"))?;

    Ok(HttpResponse::Ok().json(profile))
}

#[tracing::instrument(
    name = "Create player",
    skip(request, pool),
    fields(player_name = ?request.name, team_id = ?request.team_id)
)]
pub async fn create_player(
    request: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let id = PlayerQueries::new(pool.get_ref().clone())
        .create(&request)
        .await?;

    Ok(HttpResponse::Ok().json(CreatedResponse::new(id, "Player added successfully")))
}

#[tracing::instrument(name = "Update player", skip(request, pool))]
pub async fn update_player(
    player_id: i32,
    request: web::Json<UpdatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let updated = PlayerQueries::new(pool.get_ref().clone())
        .replace(player_id, &request)
        .await?;
    if updated == 0 {
        tracing::warn!("Update matched no player with id {}", player_id);
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Player updated successfully")))
}

#[tracing::instrument(name = "Delete player", skip(pool))]
pub async fn delete_player(
    player_id: i32,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let deleted = PlayerQueries::new(pool.get_ref().clone())
        .delete(player_id)
        .await?;
    tracing::info!(deleted, "Player delete executed");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Player deleted successfully")))
}
