use thiserror::Error;

#[derive(Debug, Error)]
pub enum GroqError {
    #[error("request to Groq API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Groq API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse Groq API response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
