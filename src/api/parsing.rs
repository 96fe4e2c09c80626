use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::core::models::GenerationRequest;
use crate::errors::BlogError;
use crate::prompt::sanitize_topic;

pub const TOPIC_FIELD: &str = "blogTopic";

/// How the function was invoked, which decides the response encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationSource {
    /// `lambda invoke` or another service passing the request object directly.
    Direct,
    /// API Gateway or a function URL; the request sits in `body`.
    HttpProxy,
}

impl InvocationSource {
    #[must_use]
    pub fn detect(payload: &Value) -> Self {
        let has_http_context = payload.get("requestContext").is_some()
            || payload.get("httpMethod").is_some()
            || payload.get("rawPath").is_some();
        let has_body_only = payload.get("body").is_some() && payload.get(TOPIC_FIELD).is_none();

        if has_http_context || has_body_only {
            InvocationSource::HttpProxy
        } else {
            InvocationSource::Direct
        }
    }
}

/// Extracts and validates the blog topic from an invocation payload.
///
/// # Errors
///
/// Returns `BlogError::Validation` if the body cannot be decoded or the topic
/// is missing, not a string, empty, or rejected by sanitization.
pub fn extract_topic(payload: &Value) -> Result<GenerationRequest, BlogError> {
    let request = request_object(payload)?;

    let raw = match request.get(TOPIC_FIELD) {
        None | Some(Value::Null) => {
            return Err(BlogError::Validation("Blog topic is required.".to_string()));
        }
        Some(Value::String(s)) => s.as_str(),
        Some(_) => {
            return Err(BlogError::Validation(format!(
                "Field '{TOPIC_FIELD}' must be a string"
            )));
        }
    };

    let topic = sanitize_topic(raw).map_err(BlogError::Validation)?;
    Ok(GenerationRequest { topic })
}

fn request_object(payload: &Value) -> Result<Value, BlogError> {
    if payload.get(TOPIC_FIELD).is_some() {
        return Ok(payload.clone());
    }

    match payload.get("body") {
        None | Some(Value::Null) => Ok(payload.clone()),
        Some(body @ Value::Object(_)) => Ok(body.clone()),
        Some(Value::String(body)) => {
            let decoded = if is_base64_encoded(payload) {
                decode_base64_body(body)?
            } else {
                body.clone()
            };
            if decoded.trim().is_empty() {
                return Ok(Value::Object(serde_json::Map::new()));
            }
            serde_json::from_str(&decoded)
                .map_err(|e| BlogError::Validation(format!("Invalid JSON body: {e}")))
        }
        Some(_) => Err(BlogError::Validation("Invalid body format".to_string())),
    }
}

fn is_base64_encoded(payload: &Value) -> bool {
    payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn decode_base64_body(body: &str) -> Result<String, BlogError> {
    let bytes = STANDARD
        .decode(body.trim())
        .map_err(|e| BlogError::Validation(format!("Failed to decode body: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| BlogError::Validation(format!("Body is not valid UTF-8: {e}")))
}
