use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::error::AppError;
use crate::handlers::log_handler;

#[get("/logs")]
pub async fn get_logs(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    log_handler::get_match_logs(pool).await
}

#[get("/logs/latest")]
pub async fn get_latest_logs(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    log_handler::get_latest_match_logs(pool).await
}
