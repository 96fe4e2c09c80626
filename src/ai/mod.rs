//! Text generation against a hosted foundation model.

pub mod bedrock;
pub mod envelope;

use async_trait::async_trait;

use crate::errors::BlogError;

pub use bedrock::BedrockGenerator;

/// Produces text for a fully built prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, BlogError>;
}
