use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::match_logs::{MatchLogQueries, LATEST_LOG_SIZE, LOG_PAGE_SIZE};
use crate::error::AppError;

#[tracing::instrument(name = "Get match logs", skip(pool))]
pub async fn get_match_logs(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let logs = MatchLogQueries::new(pool.get_ref().clone())
        .recent(LOG_PAGE_SIZE)
        .await?;
    Ok(HttpResponse::Ok().json(logs))
}

#[tracing::instrument(name = "Get latest match logs", skip(pool))]
pub async fn get_latest_match_logs(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let logs = MatchLogQueries::new(pool.get_ref().clone())
        .recent(LATEST_LOG_SIZE)
        .await?;
    Ok(HttpResponse::Ok().json(logs))
}
