//! Wire-level request/response shapes for the HTTP surface.

use serde::{Deserialize, Serialize};

/// Raw conversion payload as submitted by the client. Field presence is
/// checked by the validator, not by serde.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ConvertRequestDTO {
    pub text: Option<String>,
    pub target: Option<String>,
}

/// Response of the real conversion path.
#[derive(Serialize, Debug, Clone)]
pub struct ConvertResponseDTO {
    pub original_text: String,
    pub converted_text: String,
    pub target: String,
}

/// Response of the deterministic mock path.
#[derive(Serialize, Debug, Clone)]
pub struct MockConvertResponseDTO {
    pub original: String,
    pub converted: String,
    pub target: String,
    pub status: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthResponseDTO {
    pub status: String,
    pub service: String,
    pub version: String,
}
