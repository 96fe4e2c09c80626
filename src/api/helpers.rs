//! Response builders for the invocation boundary.
//!
//! Direct invocations get `body` as a JSON object. HTTP proxy invocations get
//! it serialized to a string, which is what API Gateway expects.

use serde_json::{Value, json};

use super::parsing::InvocationSource;
use crate::core::models::BlogResponse;
use crate::errors::BlogError;

/// Returns a 200 response carrying the download link.
#[must_use]
pub fn ok_blog_url(source: InvocationSource, url: &str) -> Value {
    let body = BlogResponse {
        blog_url: url.to_string(),
    };
    envelope(source, 200, json!(body))
}

/// Returns an error response with the given status code, message, and kind.
#[must_use]
pub fn err_response(source: InvocationSource, status_code: u16, message: &str, kind: &str) -> Value {
    envelope(source, status_code, json!({ "error": message, "kind": kind }))
}

/// Maps a pipeline failure to its caller-facing response.
#[must_use]
pub fn from_error(source: InvocationSource, err: &BlogError) -> Value {
    err_response(source, err.status_code(), &err.public_message(), err.kind())
}

fn envelope(source: InvocationSource, status_code: u16, body: Value) -> Value {
    match source {
        InvocationSource::Direct => json!({
            "statusCode": status_code,
            "body": body
        }),
        InvocationSource::HttpProxy => json!({
            "statusCode": status_code,
            "headers": { "Content-Type": "application/json" },
            "body": body.to_string()
        }),
    }
}
