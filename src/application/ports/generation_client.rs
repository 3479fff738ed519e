use async_trait::async_trait;
use serde::Deserialize;

/// Model identifiers accepted by the send-message operation. Doubles as the
/// input-validation contract: any other string fails deserialization before
/// the operation body runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum GenerationModel {
    #[default]
    #[serde(rename = "gemini-pro")]
    GeminiPro,
    #[serde(rename = "gemini-pro-vision")]
    GeminiProVision,
}

impl GenerationModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationModel::GeminiPro => "gemini-pro",
            GenerationModel::GeminiProVision => "gemini-pro-vision",
        }
    }
}

#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        model: GenerationModel,
    ) -> Result<String, GenerationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
