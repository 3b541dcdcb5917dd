use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;

use crate::api::models::{ChatCompletionRequest, ChatCompletionResponse};
use crate::client_trait::ChatCompletionClient;
use crate::config::Config;
use crate::error::GroqError;

/// Client for the Groq chat-completions endpoint.
///
/// Built once at startup and shared behind an `Arc`; the inner reqwest
/// client is safe for concurrent use across requests.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_base: String,
}

impl GroqClient {
    pub fn from_config(config: &Config, api_key: &str) -> anyhow::Result<Self> {
        let client = Self::build_http_client(api_key, Duration::from_secs(config.timeout_secs))?;
        Ok(GroqClient {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn build_http_client(api_key: &str, timeout: Duration) -> anyhow::Result<Client> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| anyhow!("Invalid API key for Authorization header: {e}"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {e}"))
    }

    async fn send_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GroqError> {
        let url = format!("{}/chat/completions", self.api_base);
        debug!("POST {url} model={}", request.model);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GroqError::Api {
                status,
                body: truncate_body(&body),
            });
        }

        let body = response.text().await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;
        if let Some(usage) = &parsed.usage {
            info!(
                "Groq completion finished: {} prompt + {} completion tokens",
                usage.prompt_tokens, usage.completion_tokens
            );
        }
        Ok(parsed)
    }
}

// Error bodies can be large; keep logs and wrapped errors readable.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 512;
    if body.chars().count() <= MAX {
        body.to_string()
    } else {
        let truncated: String = body.chars().take(MAX).collect();
        format!("{truncated}...")
    }
}

#[async_trait]
impl ChatCompletionClient for GroqClient {
    async fn complete(&self, request: ChatCompletionRequest) -> anyhow::Result<ChatCompletionResponse> {
        self.send_chat_completion(&request)
            .await
            .map_err(anyhow::Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_in_api_base_is_normalized() {
        let config = Config {
            api_base: "http://localhost:9999/v1/".to_string(),
            ..Config::default()
        };
        let client = GroqClient::from_config(&config, "gsk_test").unwrap();
        assert_eq!(client.api_base, "http://localhost:9999/v1");
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(2000);
        let truncated = truncate_body(&body);
        assert!(truncated.len() < body.len());
        assert!(truncated.ends_with("..."));
    }
}
