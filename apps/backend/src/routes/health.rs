use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("Hello from the Truco Backend!"))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
}

async fn health() -> Result<HttpResponse, AppError> {
    let response = HealthResponse {
        status: "ok".to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(root)));
    cfg.service(web::resource("/health").route(web::get().to(health)));
}
