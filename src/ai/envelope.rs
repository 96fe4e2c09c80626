//! Request and response envelopes for the Bedrock model families we can drive.
//!
//! `InvokeModel` takes and returns opaque JSON whose shape depends on the model
//! provider. Parsing here never assumes a field is present.

use serde_json::{Value, json};

use crate::core::models::GenerationParams;
use crate::errors::BlogError;

const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

const PROVIDER_PREFIXES: [&str; 4] = ["meta.", "anthropic.", "amazon.", "mistral."];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    Llama,
    Claude,
    Titan,
    Mistral,
}

impl ModelFamily {
    /// Resolves the family from a Bedrock model id or inference profile id
    /// such as `meta.llama3-70b-instruct-v1:0` or `us.anthropic.claude-3-haiku-20240307-v1:0`.
    pub fn from_model_id(model_id: &str) -> Result<Self, BlogError> {
        let id = model_id.trim().to_ascii_lowercase();
        let base = strip_region_prefix(&id);

        if base.starts_with("meta.") {
            Ok(ModelFamily::Llama)
        } else if base.starts_with("anthropic.") {
            Ok(ModelFamily::Claude)
        } else if base.starts_with("amazon.titan-text") {
            Ok(ModelFamily::Titan)
        } else if base.starts_with("mistral.") {
            Ok(ModelFamily::Mistral)
        } else {
            Err(BlogError::Config(format!(
                "BEDROCK_MODEL_ID: unsupported model family for '{model_id}'"
            )))
        }
    }
}

/// Drops an inference profile scope (`us.`, `global.`, `jp.`, ...) in front of a provider prefix.
fn strip_region_prefix(id: &str) -> &str {
    let has_provider = |s: &str| PROVIDER_PREFIXES.iter().any(|p| s.starts_with(p));
    if has_provider(id) {
        return id;
    }
    match id.split_once('.') {
        Some((_, rest)) if has_provider(rest) => rest,
        _ => id,
    }
}

/// Wraps an instruction in the Llama 3 instruct chat template.
#[must_use]
pub fn llama_instruct(prompt: &str) -> String {
    format!(
        "<|begin_of_text|><|start_header_id|>user<|end_header_id|>\n\n{prompt}<|eot_id|>\
        <|start_header_id|>assistant<|end_header_id|>\n\n"
    )
}

#[must_use]
pub fn build_request_body(family: ModelFamily, prompt: &str, params: &GenerationParams) -> Value {
    match family {
        ModelFamily::Llama => json!({
            "prompt": llama_instruct(prompt),
            "max_gen_len": params.max_gen_len,
            "temperature": params.temperature,
            "top_p": params.top_p,
        }),
        ModelFamily::Claude => json!({
            "anthropic_version": ANTHROPIC_VERSION,
            "max_tokens": params.max_gen_len,
            "temperature": params.temperature,
            "top_p": params.top_p,
            "messages": [{
                "role": "user",
                "content": [{ "type": "text", "text": prompt }]
            }],
        }),
        ModelFamily::Titan => json!({
            "inputText": prompt,
            "textGenerationConfig": {
                "maxTokenCount": params.max_gen_len,
                "temperature": params.temperature,
                "topP": params.top_p,
            },
        }),
        ModelFamily::Mistral => json!({
            "prompt": format!("<s>[INST] {prompt} [/INST]"),
            "max_tokens": params.max_gen_len,
            "temperature": params.temperature,
            "top_p": params.top_p,
        }),
    }
}

/// Pulls the generated text out of a model response envelope.
///
/// # Errors
///
/// Returns `BlogError::Generation` when the expected field is missing, has the
/// wrong type, or holds only whitespace.
pub fn extract_generated_text(family: ModelFamily, envelope: &Value) -> Result<String, BlogError> {
    let text = match family {
        ModelFamily::Llama => envelope
            .get("generation")
            .and_then(|v| v.as_str())
            .map(ToString::to_string),
        ModelFamily::Claude => {
            let parts: Vec<&str> = envelope
                .get("content")
                .and_then(|c| c.as_array())
                .map(|items| {
                    items
                        .iter()
                        .filter(|p| p.get("type").and_then(|t| t.as_str()) == Some("text"))
                        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                        .collect()
                })
                .unwrap_or_default();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(""))
            }
        }
        ModelFamily::Titan => envelope
            .get("results")
            .and_then(|r| r.as_array())
            .and_then(|r| r.first())
            .and_then(|r| r.get("outputText"))
            .and_then(|t| t.as_str())
            .map(ToString::to_string),
        ModelFamily::Mistral => envelope
            .get("outputs")
            .and_then(|o| o.as_array())
            .and_then(|o| o.first())
            .and_then(|o| o.get("text"))
            .and_then(|t| t.as_str())
            .map(ToString::to_string),
    };

    let Some(text) = text else {
        return Err(BlogError::Generation(format!(
            "unexpected {family:?} response envelope: generated text field missing"
        )));
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BlogError::Generation("model returned empty text".to_string()));
    }

    Ok(trimmed.to_string())
}
