//! Conversion pipeline: prompt construction, remote invocation, result
//! extraction, and the deterministic mock path.

use anyhow::anyhow;
use groq_client::api::models::{ChatCompletionRequest, ChatMessage};
use groq_client::ChatCompletionClient;
use log::error;

use crate::dto::{ConvertResponseDTO, MockConvertResponseDTO};
use crate::error::AppError;
use crate::models::{Audience, ConversionRequest, MockConversionRequest};

const SYSTEM_PERSONA: &str = "당신은 비즈니스 커뮤니케이션 전문가입니다.";
const OUTPUT_ONLY: &str = "변환된 문장만 출력하고, 설명이나 부가 문구는 포함하지 마세요.";

const TEMPERATURE: f32 = 0.7;
const MAX_COMPLETION_TOKENS: u32 = 1024;

const MOCK_STATUS: &str = "success_mock";
const MOCK_SUFFIX: &str = "(실제 AI 변환은 추후 구현됩니다.)";

pub fn build_system_prompt(target: Audience) -> String {
    format!("{SYSTEM_PERSONA} {} {OUTPUT_ONLY}", target.instruction())
}

/// Run one conversion against the remote capability. Single shot, no retry;
/// any failure is logged here and surfaced as a generic upstream error.
pub async fn convert(
    client: &dyn ChatCompletionClient,
    model: &str,
    request: &ConversionRequest,
) -> Result<ConvertResponseDTO, AppError> {
    let completion_request = ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(build_system_prompt(request.target)),
            ChatMessage::user(request.text.clone()),
        ],
        temperature: Some(TEMPERATURE),
        max_tokens: Some(MAX_COMPLETION_TOKENS),
    };

    let response = client.complete(completion_request).await.map_err(|e| {
        error!("Chat completion failed for target {}: {e:#}", request.target.as_str());
        AppError::Upstream(e)
    })?;

    let converted = response
        .content()
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| {
            error!("Chat completion returned no usable content");
            AppError::Upstream(anyhow!("empty completion content"))
        })?;

    Ok(ConvertResponseDTO {
        original_text: request.text.clone(),
        converted_text: converted.to_string(),
        target: request.target.as_str().to_string(),
    })
}

/// Deterministic stand-in used before/without the real capability. Keeps
/// the demo server's exact output, double space included.
pub fn mock_convert(request: &MockConversionRequest) -> MockConvertResponseDTO {
    let prefix = match request.target.as_str() {
        "boss" => "[상사용 변환] ",
        "colleague" => "[동료용 변환] ",
        "customer" => "[고객용 변환] ",
        _ => "[변환] ",
    };

    MockConvertResponseDTO {
        original: request.text.clone(),
        converted: format!("{prefix} {} {MOCK_SUFFIX}", request.text),
        target: request.target.clone(),
        status: MOCK_STATUS.to_string(),
    }
}
