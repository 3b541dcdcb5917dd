//! Request validation for `/api/convert`.
//!
//! Two policies exist: the strict one used by the real conversion path and
//! a permissive one for mock mode, which mirrors the original demo server
//! (any target string accepted, missing target defaults to "boss").

use crate::dto::ConvertRequestDTO;
use crate::error::AppError;
use crate::models::{Audience, ConversionRequest, MockConversionRequest};

/// Maximum input length, in characters (input is typically Korean, so
/// bytes would be the wrong unit).
pub const MAX_TEXT_CHARS: usize = 500;

const DEFAULT_MOCK_TARGET: &str = "boss";

pub fn validate(body: &[u8]) -> Result<ConversionRequest, AppError> {
    let payload = parse_payload(body)?;
    let text = validate_text(payload.text.as_deref())?;

    let target = payload
        .target
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("target required".to_string()))?;
    let target =
        Audience::parse(target).ok_or_else(|| AppError::Validation("invalid target".to_string()))?;

    Ok(ConversionRequest { text, target })
}

pub fn validate_permissive(body: &[u8]) -> Result<MockConversionRequest, AppError> {
    let payload = parse_payload(body)?;
    let text = validate_text(payload.text.as_deref())?;

    let target = payload
        .target
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_MOCK_TARGET.to_string());

    Ok(MockConversionRequest { text, target })
}

fn parse_payload(body: &[u8]) -> Result<ConvertRequestDTO, AppError> {
    if body.is_empty() {
        return Err(AppError::Validation("no data".to_string()));
    }
    serde_json::from_slice(body).map_err(|_| AppError::Validation("no data".to_string()))
}

fn validate_text(text: Option<&str>) -> Result<String, AppError> {
    let text = text.unwrap_or_default().trim();
    if text.is_empty() {
        return Err(AppError::Validation("text required".to_string()));
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(AppError::Validation("text too long".to_string()));
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: &str) -> Vec<u8> {
        json.as_bytes().to_vec()
    }

    #[test]
    fn valid_request_passes_strict_validation() {
        let request = validate(&body(r#"{"text": "  보고드립니다  ", "target": "Upward"}"#)).unwrap();
        assert_eq!(request.text, "보고드립니다");
        assert_eq!(request.target, Audience::Upward);
    }

    #[test]
    fn empty_body_is_no_data() {
        let err = validate(&[]).unwrap_err();
        assert_eq!(err.to_string(), "no data");
    }

    #[test]
    fn unparsable_body_is_no_data() {
        let err = validate(&body("not json")).unwrap_err();
        assert_eq!(err.to_string(), "no data");
    }

    #[test]
    fn whitespace_only_text_is_rejected() {
        let err = validate(&body(r#"{"text": "   ", "target": "upward"}"#)).unwrap_err();
        assert_eq!(err.to_string(), "text required");
    }

    #[test]
    fn missing_text_is_rejected() {
        let err = validate(&body(r#"{"target": "upward"}"#)).unwrap_err();
        assert_eq!(err.to_string(), "text required");
    }

    #[test]
    fn text_at_the_limit_is_accepted() {
        let text = "가".repeat(MAX_TEXT_CHARS);
        let payload = format!(r#"{{"text": "{text}", "target": "lateral"}}"#);
        let request = validate(payload.as_bytes()).unwrap();
        assert_eq!(request.text.chars().count(), MAX_TEXT_CHARS);
    }

    #[test]
    fn text_over_the_limit_is_rejected() {
        let text = "가".repeat(MAX_TEXT_CHARS + 1);
        let payload = format!(r#"{{"text": "{text}", "target": "lateral"}}"#);
        let err = validate(payload.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "text too long");
    }

    #[test]
    fn missing_target_is_rejected() {
        let err = validate(&body(r#"{"text": "hello"}"#)).unwrap_err();
        assert_eq!(err.to_string(), "target required");
    }

    #[test]
    fn unknown_target_is_rejected() {
        let err = validate(&body(r#"{"text": "hello", "target": "boss"}"#)).unwrap_err();
        assert_eq!(err.to_string(), "invalid target");
    }

    #[test]
    fn permissive_validation_defaults_missing_target() {
        let request = validate_permissive(&body(r#"{"text": "hello"}"#)).unwrap();
        assert_eq!(request.target, "boss");
    }

    #[test]
    fn permissive_validation_keeps_unknown_targets() {
        let request =
            validate_permissive(&body(r#"{"text": "hello", "target": "teammate"}"#)).unwrap();
        assert_eq!(request.target, "teammate");
    }

    #[test]
    fn permissive_validation_still_enforces_text_rules() {
        let err = validate_permissive(&body(r#"{"text": ""}"#)).unwrap_err();
        assert_eq!(err.to_string(), "text required");

        let text = "a".repeat(MAX_TEXT_CHARS + 1);
        let payload = format!(r#"{{"text": "{text}"}}"#);
        let err = validate_permissive(payload.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "text too long");
    }
}
