use serde::Serialize;

/// Validated input for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
}

/// Result of a successful invocation. Only the bucket object outlives the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub content: String,
    pub storage_key: String,
    pub access_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_gen_len: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_gen_len: 1024,
            temperature: 0.5,
            top_p: 0.9,
        }
    }
}

/// Metadata returned by the read-back check after a write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectMeta {
    pub content_length: Option<i64>,
    pub e_tag: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BlogResponse {
    #[serde(rename = "blogUrl")]
    pub blog_url: String,
}
