use actix_web::{post, web, HttpResponse};
use log::info;

use crate::error::AppError;
use crate::server::AppState;
use crate::services::convert_service;
use crate::validator;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(convert);
}

/// Convert user text into the register appropriate for the requested
/// audience. Mock mode short-circuits with a deterministic placeholder;
/// the real path requires a configured Groq client.
#[post("/convert")]
pub async fn convert(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if state.mock_mode {
        let request = validator::validate_permissive(&body)?;
        info!("Mock conversion for target '{}'", request.target);
        return Ok(HttpResponse::Ok().json(convert_service::mock_convert(&request)));
    }

    let request = validator::validate(&body)?;
    let client = state
        .client
        .as_deref()
        .ok_or(AppError::ServiceUnavailable)?;

    info!(
        "Converting {} chars for target '{}'",
        request.text.chars().count(),
        request.target.as_str()
    );
    let response = convert_service::convert(client, &state.model, &request).await?;
    Ok(HttpResponse::Ok().json(response))
}
