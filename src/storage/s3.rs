use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

use super::{LinkSigner, ObjectStore};
use crate::core::models::ObjectMeta;
use crate::errors::BlogError;

/// S3-backed store. One client serves writes, read-back checks, and presigning.
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    #[must_use]
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(
        &self,
        key: &str,
        content: &str,
        content_type: &str,
    ) -> Result<(), BlogError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(content.as_bytes().to_vec()))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                error!(bucket = %self.bucket, key = %key, "S3 PutObject failed: {}", e);
                BlogError::Storage(format!("S3 PutObject failed: {e}"))
            })?;

        info!(bucket = %self.bucket, key = %key, "Blog saved to S3");
        Ok(())
    }

    async fn head_object(&self, key: &str) -> Result<Option<ObjectMeta>, BlogError> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(resp) => {
                debug!(
                    key = %key,
                    content_length = ?resp.content_length(),
                    e_tag = ?resp.e_tag(),
                    "HeadObject response"
                );
                Ok(Some(ObjectMeta {
                    content_length: resp.content_length(),
                    e_tag: resp.e_tag().map(ToString::to_string),
                }))
            }
            Err(e) => {
                if e.as_service_error().is_some_and(|se| se.is_not_found()) {
                    Ok(None)
                } else {
                    error!(bucket = %self.bucket, key = %key, "S3 HeadObject failed: {}", e);
                    Err(BlogError::Storage(format!("S3 HeadObject failed: {e}")))
                }
            }
        }
    }
}

#[async_trait]
impl LinkSigner for S3Store {
    async fn presign_get(&self, key: &str, ttl: Duration) -> Result<String, BlogError> {
        let presigning = PresigningConfig::expires_in(ttl)
            .map_err(|e| BlogError::Link(format!("Invalid presigning config: {e}")))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| {
                error!(bucket = %self.bucket, key = %key, "S3 presign failed: {}", e);
                BlogError::Link(format!("S3 presign failed: {e}"))
            })?;

        let uri = presigned.uri().to_string();
        Url::parse(&uri).map_err(|e| BlogError::Link(format!("Presigned URI is invalid: {e}")))?;

        Ok(uri)
    }
}
