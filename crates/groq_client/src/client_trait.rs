use anyhow::Result;
use async_trait::async_trait;

use crate::api::models::{ChatCompletionRequest, ChatCompletionResponse};

/// Seam over the chat-completion capability so handlers can be tested
/// against an in-process fake.
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    async fn complete(&self, request: ChatCompletionRequest) -> Result<ChatCompletionResponse>;
}
