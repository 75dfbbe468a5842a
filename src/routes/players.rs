use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;

use crate::error::AppError;
use crate::handlers::player_handler;
use crate::models::player::{CreatePlayerRequest, UpdatePlayerRequest};

/// List all players with their team name
#[get("/players")]
pub async fn get_players(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    player_handler::list_players(pool).await
}

/// Player profile with per-match stats
#[get("/players/{player_id}")]
pub async fn get_player(
    path: web::Path<i32>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    player_handler::get_player_details(player_id, pool).await
}

#[post("/players")]
pub async fn create_player(
    request: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    player_handler::create_player(request, pool).await
}

#[put("/players/{player_id}")]
pub async fn update_player(
    path: web::Path<i32>,
    request: web::Json<UpdatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    player_handler::update_player(player_id, request, pool).await
}

#[delete("/players/{player_id}")]
pub async fn delete_player(
    path: web::Path<i32>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    player_handler::delete_player(player_id, pool).await
}
