use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bloggen::api::parsing::{InvocationSource, extract_topic};
use serde_json::json;

#[test]
fn test_direct_payload() {
    let payload = json!({ "blogTopic": "serverless architecture" });
    let request = extract_topic(&payload).unwrap();
    assert_eq!(request.topic, "serverless architecture");
    assert_eq!(InvocationSource::detect(&payload), InvocationSource::Direct);
}

#[test]
fn test_proxy_string_body() {
    let payload = json!({
        "requestContext": { "http": { "method": "POST" } },
        "body": "{\"blogTopic\": \"serverless architecture\"}",
        "isBase64Encoded": false
    });
    let request = extract_topic(&payload).unwrap();
    assert_eq!(request.topic, "serverless architecture");
    assert_eq!(InvocationSource::detect(&payload), InvocationSource::HttpProxy);
}

#[test]
fn test_proxy_base64_body() {
    let encoded = STANDARD.encode(r#"{"blogTopic":"vector databases"}"#);
    let payload = json!({
        "rawPath": "/generate",
        "body": encoded,
        "isBase64Encoded": true
    });
    let request = extract_topic(&payload).unwrap();
    assert_eq!(request.topic, "vector databases");
}

#[test]
fn test_object_body() {
    let payload = json!({ "body": { "blogTopic": "rust async" } });
    assert_eq!(extract_topic(&payload).unwrap().topic, "rust async");
    assert_eq!(InvocationSource::detect(&payload), InvocationSource::HttpProxy);
}

#[test]
fn test_missing_or_empty_topic_is_validation_error() {
    let payloads = [
        json!({}),
        json!({ "blogTopic": "" }),
        json!({ "blogTopic": "   " }),
        json!({ "blogTopic": null }),
        json!({ "body": "{}" }),
        json!({ "body": "" }),
        json!({ "body": null }),
        json!({ "body": "{\"topic\": \"wrong field\"}" }),
    ];

    for payload in &payloads {
        let err = extract_topic(payload).unwrap_err();
        assert_eq!(err.kind(), "ValidationError", "payload: {payload}");
        assert_eq!(err.status_code(), 400);
    }
}

#[test]
fn test_malformed_bodies_are_validation_errors() {
    let payloads = [
        json!({ "blogTopic": 42 }),
        json!({ "body": "not json" }),
        json!({ "body": "%%%", "isBase64Encoded": true }),
        json!({ "body": 17 }),
    ];

    for payload in &payloads {
        let err = extract_topic(payload).unwrap_err();
        assert_eq!(err.kind(), "ValidationError", "payload: {payload}");
    }
}
