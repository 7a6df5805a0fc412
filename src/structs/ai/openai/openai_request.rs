use serde::{Deserialize, Serialize};
use crate::structs::ai::openai::openai_message::OpenAIMessage;

/// Chat-completions request body. Sampling parameters are left at the
/// provider's defaults; the endpoint sends exactly one system and one user
/// message per analysis.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OpenAIRequest {
    pub model: String,
    pub messages: Vec<OpenAIMessage>,
}
