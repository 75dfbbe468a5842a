use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use sqlx::PgPool;
use std::net::TcpListener;
use actix_cors::Cors;

pub mod config;
pub mod db;
pub mod error;
mod handlers;
pub mod models;
mod routes;
pub mod telemetry;

use crate::config::ApplicationSettings;
use crate::error::AppError;
use crate::routes::init_routes;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    application: &ApplicationSettings,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let allowed_origins = application.allowed_origins.clone();

    let server = HttpServer::new(move || {
        let cors = build_cors(&allowed_origins);

        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            tracing::warn!("Rejected request body: {}", err);
            AppError::InvalidBody(err.to_string()).into()
        });

        // A non-numeric or out-of-range `{id}` matches no row
        let path_config = web::PathConfig::default().error_handler(|err, req| {
            tracing::warn!("Rejected path {}: {}", req.path(), err);
            AppError::path_not_found(req.path()).into()
        });

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(json_config)
            .app_data(path_config)
            // Every handler shares the same pool; connections are checked
            // out per statement
            .app_data(db_pool_data.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![
            http::header::ACCEPT,
            http::header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
