use actix_web::{get, Responder};

use crate::handlers::backend_health_handler::{api_test as api_test_handler, backend_health_check};

#[get("/backend_health")]
pub async fn backend_health() -> impl Responder {
    backend_health_check().await
}

#[get("/test")]
pub async fn api_test() -> impl Responder {
    api_test_handler().await
}
