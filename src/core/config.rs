use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::ai::envelope::ModelFamily;
use crate::core::models::GenerationParams;
use crate::errors::BlogError;
use crate::storage::keys::KeyPolicy;

pub const DEFAULT_MODEL_ID: &str = "meta.llama3-70b-instruct-v1:0";
pub const DEFAULT_KEY_PREFIX: &str = "blogs/";
pub const DEFAULT_URL_TTL_SECS: u64 = 3600;

/// S3 refuses presigned URLs that outlive a week.
pub const MAX_URL_TTL_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bucket: String,
    pub model_id: String,
    pub bedrock_region: Option<String>,
    pub key_prefix: String,
    pub key_policy: KeyPolicy,
    pub url_ttl: Duration,
    pub generation: GenerationParams,
    pub read_timeout: Duration,
    pub max_attempts: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, BlogError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BlogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bucket = var("BLOG_BUCKET")
            .ok_or_else(|| BlogError::Config("BLOG_BUCKET: environment variable not set".into()))?;

        let model_id = var("BEDROCK_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());
        ModelFamily::from_model_id(&model_id)?;

        let key_policy = match var("BLOG_KEY_POLICY") {
            Some(raw) => raw.parse::<KeyPolicy>()?,
            None => KeyPolicy::default(),
        };

        let ttl_secs: u64 = parse_or(&var, "BLOG_URL_TTL_SECS", DEFAULT_URL_TTL_SECS)?;
        if ttl_secs == 0 || ttl_secs > MAX_URL_TTL_SECS {
            return Err(BlogError::Config(format!(
                "BLOG_URL_TTL_SECS: must be between 1 and {MAX_URL_TTL_SECS}, got {ttl_secs}"
            )));
        }

        let defaults = GenerationParams::default();
        let generation = GenerationParams {
            max_gen_len: parse_or(&var, "BLOG_MAX_GEN_LEN", defaults.max_gen_len)?,
            temperature: unit_interval(
                "BLOG_TEMPERATURE",
                parse_or(&var, "BLOG_TEMPERATURE", defaults.temperature)?,
            )?,
            top_p: unit_interval("BLOG_TOP_P", parse_or(&var, "BLOG_TOP_P", defaults.top_p)?)?,
        };
        if generation.max_gen_len == 0 {
            return Err(BlogError::Config("BLOG_MAX_GEN_LEN: must be positive".into()));
        }

        let max_attempts: u32 = parse_or(&var, "BEDROCK_MAX_ATTEMPTS", 3)?;
        if max_attempts == 0 {
            return Err(BlogError::Config("BEDROCK_MAX_ATTEMPTS: must be positive".into()));
        }

        Ok(Self {
            bucket,
            model_id,
            bedrock_region: var("BEDROCK_REGION"),
            key_prefix: var("BLOG_KEY_PREFIX").unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string()),
            key_policy,
            url_ttl: Duration::from_secs(ttl_secs),
            generation,
            read_timeout: Duration::from_secs(parse_or(&var, "BEDROCK_READ_TIMEOUT_SECS", 300)?),
            max_attempts,
        })
    }
}

fn parse_or<T, F>(var: &F, name: &str, default: T) -> Result<T, BlogError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| BlogError::Config(format!("{name}: {e}"))),
        None => Ok(default),
    }
}

fn unit_interval(name: &str, value: f32) -> Result<f32, BlogError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(BlogError::Config(format!(
            "{name}: must be between 0.0 and 1.0, got {value}"
        )))
    }
}
