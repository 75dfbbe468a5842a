use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::events::EventQueries;
use crate::error::AppError;
use crate::models::common::CreatedResponse;
use crate::models::event::CreateEventRequest;

#[tracing::instrument(name = "List events", skip(pool))]
pub async fn list_events(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let events = EventQueries::new(pool.get_ref().clone()).list().await?;
    Ok(HttpResponse::Ok().json(events))
}

#[tracing::instrument(name = "Create event", skip(request, pool), fields(event_name = ?request.name))]
pub async fn create_event(
    request: web::Json<CreateEventRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let id = EventQueries::new(pool.get_ref().clone())
        .create(&request)
        .await?;

    Ok(HttpResponse::Ok().json(CreatedResponse::new(id, "Event added successfully")))
}
