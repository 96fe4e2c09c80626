//! Amazon Bedrock client for blog generation.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::config::{Builder as BedrockConfigBuilder, Region};
use aws_sdk_bedrockruntime::primitives::Blob;
use serde_json::Value;
use tracing::{error, info};

use super::TextGenerator;
use super::envelope::{ModelFamily, build_request_body, extract_generated_text};
use crate::core::config::AppConfig;
use crate::core::models::GenerationParams;
use crate::errors::BlogError;

pub struct BedrockGenerator {
    client: Client,
    model_id: String,
    family: ModelFamily,
    params: GenerationParams,
}

impl BedrockGenerator {
    pub fn new(client: Client, model_id: String, params: GenerationParams) -> Result<Self, BlogError> {
        let family = ModelFamily::from_model_id(&model_id)?;
        Ok(Self {
            client,
            model_id,
            family,
            params,
        })
    }

    /// Builds a Bedrock runtime client from the shared SDK config, applying
    /// `BEDROCK_REGION` when set.
    pub fn from_sdk_config(shared: &SdkConfig, config: &AppConfig) -> Result<Self, BlogError> {
        let mut builder = BedrockConfigBuilder::from(shared);
        if let Some(region) = &config.bedrock_region {
            builder = builder.region(Region::new(region.clone()));
        }

        Self::new(
            Client::from_conf(builder.build()),
            config.model_id.clone(),
            config.generation,
        )
    }
}

#[async_trait]
impl TextGenerator for BedrockGenerator {
    #[tracing::instrument(level = "info", skip_all, fields(model_id = %self.model_id))]
    async fn generate(&self, prompt: &str) -> Result<String, BlogError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Bedrock prompt:\n{}", prompt);

        let body = build_request_body(self.family, prompt, &self.params);
        let payload = serde_json::to_vec(&body)
            .map_err(|e| BlogError::Generation(format!("Failed to serialize request: {e}")))?;

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| {
                error!("Bedrock InvokeModel failed: {}", e);
                BlogError::Generation(format!("Bedrock InvokeModel failed: {e}"))
            })?;

        let envelope: Value = serde_json::from_slice(response.body().as_ref()).map_err(|e| {
            BlogError::Generation(format!("Bedrock response is not valid JSON: {e}"))
        })?;

        let text = extract_generated_text(self.family, &envelope)?;
        info!(generated_chars = text.chars().count(), "Bedrock generation complete");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_config::BehaviorVersion;

    fn shared(region: &str) -> SdkConfig {
        SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .build()
    }

    fn app_config(region: Option<&str>) -> AppConfig {
        let region = region.map(ToString::to_string);
        AppConfig::from_lookup(move |name: &str| match name {
            "BLOG_BUCKET" => Some("blog-gen-app".to_string()),
            "BEDROCK_REGION" => region.clone(),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn region_override_applies_to_bedrock_only() {
        let generator =
            BedrockGenerator::from_sdk_config(&shared("eu-west-1"), &app_config(Some("us-east-1")))
                .unwrap();
        assert_eq!(
            generator.client.config().region().map(|r| r.as_ref()),
            Some("us-east-1")
        );
        assert_eq!(generator.family, ModelFamily::Llama);
    }

    #[test]
    fn shared_region_is_used_without_override() {
        let generator =
            BedrockGenerator::from_sdk_config(&shared("eu-west-1"), &app_config(None)).unwrap();
        assert_eq!(
            generator.client.config().region().map(|r| r.as_ref()),
            Some("eu-west-1")
        );
    }
}
