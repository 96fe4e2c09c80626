//! Object storage for generated posts and presigned download links.

pub mod keys;
pub mod s3;

use async_trait::async_trait;
use std::time::Duration;

use crate::core::models::ObjectMeta;
use crate::errors::BlogError;

pub use s3::S3Store;

pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, key: &str, content: &str, content_type: &str)
    -> Result<(), BlogError>;

    /// Returns `Ok(None)` when the object does not exist.
    async fn head_object(&self, key: &str) -> Result<Option<ObjectMeta>, BlogError>;
}

#[async_trait]
pub trait LinkSigner: Send + Sync {
    /// Mints a read-only URL for `key` that expires after `ttl`.
    async fn presign_get(&self, key: &str, ttl: Duration) -> Result<String, BlogError>;
}
