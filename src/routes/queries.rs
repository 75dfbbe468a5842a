use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::error::AppError;
use crate::handlers::report_handler;

/// Entity counts for the dashboard
#[get("/stats")]
pub async fn get_stats(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    report_handler::get_entity_counts(pool).await
}

/// Named analytical report, e.g. `/queries/q3` or `/queries/top-players`
#[get("/queries/{name}")]
pub async fn run_query(
    path: web::Path<String>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();
    report_handler::run_report(name, pool).await
}
