use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("conversion service is not configured")]
    ServiceUnavailable,

    // Display stays generic; the wrapped source is logged at the call
    // site and never serialized into a response.
    #[error("failed to convert text")]
    Upstream(#[source] anyhow::Error),
}

#[derive(Serialize)]
struct JsonError {
    error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable | AppError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(JsonError {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = AppError::Validation("text required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "text required");
    }

    #[test]
    fn upstream_display_never_leaks_internal_detail() {
        let err = AppError::Upstream(anyhow!("connection refused to api.groq.com"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "failed to convert text");
    }
}
