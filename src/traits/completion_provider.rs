use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// Non-streaming chat completion. The analysis endpoint is written against
/// this trait so tests can script the model reply.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError>;
}
