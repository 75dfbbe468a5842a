use actix_web::{get, post, put, web, HttpResponse};
use sqlx::PgPool;

use crate::error::AppError;
use crate::handlers::match_handler;
use crate::models::matches::{CreateMatchRequest, UpdateMatchRequest};

#[get("/matches")]
pub async fn get_matches(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    match_handler::list_matches(pool).await
}

#[post("/matches")]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    match_handler::create_match(request, pool).await
}

/// Record a match result
#[put("/matches/{match_id}")]
pub async fn update_match(
    path: web::Path<i32>,
    request: web::Json<UpdateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let match_id = path.into_inner();
    match_handler::update_match(match_id, request, pool).await
}
