use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::error::AppError;
use crate::handlers::event_handler;
use crate::models::event::CreateEventRequest;

#[get("/events")]
pub async fn get_events(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    event_handler::list_events(pool).await
}

#[post("/events")]
pub async fn create_event(
    request: web::Json<CreateEventRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    event_handler::create_event(request, pool).await
}
