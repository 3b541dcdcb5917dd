use serde::{Deserialize, Serialize};

/// Recipient category of the converted message. Register and formality of
/// the instruction template are keyed off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// Reporting to a superior: formal register, conclusion first.
    Upward,
    /// Peer to peer: collegial register with a clear ask and deadline.
    Lateral,
    /// Customer facing: highest formality, professional service tone.
    External,
}

impl Audience {
    /// Case-insensitive parse; anything outside the three keys is rejected
    /// by the strict validator.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "upward" => Some(Audience::Upward),
            "lateral" => Some(Audience::Lateral),
            "external" => Some(Audience::External),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Upward => "upward",
            Audience::Lateral => "lateral",
            Audience::External => "external",
        }
    }

    /// Instruction template for the system prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            Audience::Upward => {
                "다음 메시지를 상사에게 보고하기에 적합한 격식 있는 존댓말로 변환하세요. \
                 결론을 먼저 제시하고 핵심 내용을 간결하게 정리하세요."
            }
            Audience::Lateral => {
                "다음 메시지를 동료에게 보내기에 적합한 정중하고 협조적인 어조로 변환하세요. \
                 요청 사항과 기한이 명확하게 드러나도록 하세요."
            }
            Audience::External => {
                "다음 메시지를 고객에게 보내기에 적합한 최고 수준의 격식을 갖춘 문장으로 변환하세요. \
                 전문성과 서비스 정신이 느껴지도록 하세요."
            }
        }
    }
}

/// Validated conversion request (strict contract).
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub text: String,
    pub target: Audience,
}

/// Validated conversion request in mock mode, which accepts any target
/// string and defaults a missing one to "boss".
#[derive(Debug, Clone, PartialEq)]
pub struct MockConversionRequest {
    pub text: String,
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_targets_case_insensitively() {
        assert_eq!(Audience::parse("upward"), Some(Audience::Upward));
        assert_eq!(Audience::parse("Upward"), Some(Audience::Upward));
        assert_eq!(Audience::parse("LATERAL"), Some(Audience::Lateral));
        assert_eq!(Audience::parse(" external "), Some(Audience::External));
    }

    #[test]
    fn parse_rejects_unknown_targets() {
        assert_eq!(Audience::parse("boss"), None);
        assert_eq!(Audience::parse(""), None);
        assert_eq!(Audience::parse("upwards"), None);
    }

    #[test]
    fn every_audience_has_a_distinct_instruction() {
        let all = [Audience::Upward, Audience::Lateral, Audience::External];
        for a in &all {
            assert!(!a.instruction().is_empty());
        }
        assert_ne!(
            Audience::Upward.instruction(),
            Audience::Lateral.instruction()
        );
        assert_ne!(
            Audience::Lateral.instruction(),
            Audience::External.instruction()
        );
    }
}
