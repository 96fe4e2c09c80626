use std::time::Duration;

use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Builder as S3ConfigBuilder, Credentials, Region};
use aws_sdk_s3::error::ErrorMetadata;
use aws_sdk_s3::operation::head_object::{HeadObjectError, HeadObjectOutput};
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_sdk_s3::types::error::NotFound;
use aws_smithy_mocks::{mock, mock_client};
use url::Url;

use bloggen::storage::{LinkSigner, MARKDOWN_CONTENT_TYPE, ObjectStore, S3Store};

const BUCKET: &str = "blog-gen-app";

fn signing_store() -> S3Store {
    let credentials = Credentials::new("AKIDEXAMPLE", "secret", None, None, "bloggen-tests");
    let config = S3ConfigBuilder::new()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .build();
    S3Store::new(Client::from_conf(config), BUCKET.to_string())
}

#[tokio::test]
async fn test_presign_applies_ttl_and_key() {
    let store = signing_store();

    let uri = store
        .presign_get("blogs/x.md", Duration::from_secs(600))
        .await
        .unwrap();

    let url = Url::parse(&uri).unwrap();
    assert_eq!(url.scheme(), "https");
    assert!(url.host_str().unwrap().contains(BUCKET));
    assert!(url.path().ends_with("/blogs/x.md"));
    assert!(
        url.query_pairs()
            .any(|(k, v)| k == "X-Amz-Expires" && v == "600"),
        "missing expiry in {uri}"
    );
    assert!(url.query_pairs().any(|(k, _)| k == "X-Amz-Signature"));
}

#[tokio::test]
async fn test_presign_rejects_ttl_past_one_week() {
    let store = signing_store();

    let err = store
        .presign_get("blogs/x.md", Duration::from_secs(8 * 24 * 60 * 60))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "LinkError");
}

#[tokio::test]
async fn test_head_not_found_is_none() {
    let rule = mock!(Client::head_object)
        .match_requests(|req| req.bucket() == Some(BUCKET) && req.key() == Some("blogs/missing.md"))
        .then_error(|| HeadObjectError::NotFound(NotFound::builder().build()));
    let store = S3Store::new(mock_client!(aws_sdk_s3, [&rule]), BUCKET.to_string());

    let meta = store.head_object("blogs/missing.md").await.unwrap();

    assert!(meta.is_none());
    assert_eq!(rule.num_calls(), 1);
}

#[tokio::test]
async fn test_head_other_failures_are_storage_errors() {
    let rule = mock!(Client::head_object).then_error(|| {
        HeadObjectError::generic(
            ErrorMetadata::builder()
                .code("AccessDenied")
                .message("Access Denied")
                .build(),
        )
    });
    let store = S3Store::new(mock_client!(aws_sdk_s3, [&rule]), BUCKET.to_string());

    let err = store.head_object("blogs/x.md").await.unwrap_err();

    assert_eq!(err.kind(), "StorageError");
}

#[tokio::test]
async fn test_head_reports_length_and_etag() {
    let rule = mock!(Client::head_object).then_output(|| {
        HeadObjectOutput::builder()
            .content_length(42)
            .e_tag("\"abc123\"")
            .build()
    });
    let store = S3Store::new(mock_client!(aws_sdk_s3, [&rule]), BUCKET.to_string());

    let meta = store.head_object("blogs/x.md").await.unwrap().unwrap();

    assert_eq!(meta.content_length, Some(42));
    assert_eq!(meta.e_tag.as_deref(), Some("\"abc123\""));
}

#[tokio::test]
async fn test_put_sends_markdown_to_bucket() {
    let rule = mock!(Client::put_object)
        .match_requests(|req| {
            req.bucket() == Some(BUCKET)
                && req.key() == Some("blogs/x.md")
                && req.content_type() == Some(MARKDOWN_CONTENT_TYPE)
        })
        .then_output(|| PutObjectOutput::builder().build());
    let store = S3Store::new(mock_client!(aws_sdk_s3, [&rule]), BUCKET.to_string());

    store
        .put_object("blogs/x.md", "# Title", MARKDOWN_CONTENT_TYPE)
        .await
        .unwrap();

    assert_eq!(rule.num_calls(), 1);
}
