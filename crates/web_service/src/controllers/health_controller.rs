use actix_web::{get, web, HttpResponse, Responder};

use crate::dto::HealthResponseDTO;

pub const SERVICE_NAME: &str = "BizTone Converter API";
pub const SERVICE_VERSION: &str = "v1.0";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
}

/// Liveness probe; answers 200 even when the Groq client is unconfigured.
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponseDTO {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
    })
}
