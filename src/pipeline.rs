//! Linear orchestration of one invocation: generate, store, confirm, sign.

use aws_config::ConfigLoader;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::ai::{BedrockGenerator, TextGenerator};
use crate::core::config::AppConfig;
use crate::core::models::{GeneratedArtifact, GenerationRequest};
use crate::errors::BlogError;
use crate::prompt::build_blog_prompt;
use crate::storage::keys::object_key;
use crate::storage::{LinkSigner, MARKDOWN_CONTENT_TYPE, ObjectStore, S3Store};

/// Progress of an invocation, reported in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Received,
    Validated,
    Generated,
    Stored,
    LinkIssued,
    Responded,
    Failed(&'static str),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Failed(kind) => write!(f, "Failed({kind})"),
            other => write!(f, "{other:?}"),
        }
    }
}

pub struct BlogPipeline {
    config: AppConfig,
    generator: Arc<dyn TextGenerator>,
    store: Arc<dyn ObjectStore>,
    signer: Arc<dyn LinkSigner>,
}

impl BlogPipeline {
    pub fn new(
        config: AppConfig,
        generator: Arc<dyn TextGenerator>,
        store: Arc<dyn ObjectStore>,
        signer: Arc<dyn LinkSigner>,
    ) -> Self {
        Self {
            config,
            generator,
            store,
            signer,
        }
    }

    /// Creates the Bedrock and S3 clients from one shared SDK config. Call once per process.
    pub async fn from_config(config: AppConfig) -> Result<Self, BlogError> {
        let shared = sdk_config_loader(&config).load().await;
        let generator = Arc::new(BedrockGenerator::from_sdk_config(&shared, &config)?);
        let s3 = Arc::new(S3Store::new(
            aws_sdk_s3::Client::new(&shared),
            config.bucket.clone(),
        ));
        Ok(Self::new(config, generator, s3.clone(), s3))
    }

    /// Runs one validated request through generation, storage, and signing.
    ///
    /// The signer is only reached after the store reports the object present,
    /// with a matching length when one is reported. A signing failure leaves
    /// the written object in place.
    #[tracing::instrument(level = "info", skip_all)]
    pub async fn run(&self, request: &GenerationRequest) -> Result<GeneratedArtifact, BlogError> {
        let prompt = build_blog_prompt(&request.topic);
        let content = self.generator.generate(&prompt).await?;
        if content.trim().is_empty() {
            return Err(BlogError::Generation("model returned empty text".to_string()));
        }
        log_stage(Stage::Generated);

        let storage_key = object_key(
            self.config.key_policy,
            &self.config.key_prefix,
            &request.topic,
            Utc::now(),
            Uuid::new_v4(),
        );

        self.store
            .put_object(&storage_key, &content, MARKDOWN_CONTENT_TYPE)
            .await?;
        self.confirm_written(&storage_key, content.len()).await?;
        log_stage(Stage::Stored);

        let access_url = self
            .signer
            .presign_get(&storage_key, self.config.url_ttl)
            .await?;
        info!(
            key = %storage_key,
            expires_in_secs = self.config.url_ttl.as_secs(),
            "Generated presigned URL"
        );
        log_stage(Stage::LinkIssued);

        Ok(GeneratedArtifact {
            content,
            storage_key,
            access_url,
        })
    }

    async fn confirm_written(&self, key: &str, expected_len: usize) -> Result<(), BlogError> {
        let Some(meta) = self.store.head_object(key).await? else {
            error!(key = %key, "Object missing after write");
            return Err(BlogError::Storage(format!(
                "object {key} not found after write"
            )));
        };

        if let Some(len) = meta.content_length
            && usize::try_from(len).ok() != Some(expected_len)
        {
            error!(key = %key, expected_len, actual_len = len, "Object length mismatch after write");
            return Err(BlogError::Storage(format!(
                "object {key} has {len} bytes, expected {expected_len}"
            )));
        }

        Ok(())
    }
}

/// Environment AWS config loader with the configured retry attempts and read
/// timeout. Every client in the process is built from what it loads.
#[must_use]
pub fn sdk_config_loader(config: &AppConfig) -> ConfigLoader {
    aws_config::from_env()
        .retry_config(RetryConfig::standard().with_max_attempts(config.max_attempts))
        .timeout_config(
            TimeoutConfig::builder()
                .read_timeout(config.read_timeout)
                .build(),
        )
}

pub(crate) fn log_stage(stage: Stage) {
    match stage {
        Stage::Failed(_) => error!(stage = %stage, "Invocation stage"),
        _ => info!(stage = %stage, "Invocation stage"),
    }
}
