//! S3 object store implementation.
//!
//! Implements `ObjectStore` from `reviewd_core::ingest` on top of the AWS
//! S3 SDK; object bodies are exposed as async readers without buffering
//! the whole object.

use async_trait::async_trait;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::Client;
use tokio::io::AsyncRead;

use reviewd_core::ingest::{ObjectStore, ObjectStoreError};

/// S3-backed object store.
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Creates a new object store with the given S3 client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn open(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Box<dyn AsyncRead + Send + Unpin>, ObjectStoreError> {
        let result = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| match err.into_service_error() {
                GetObjectError::NoSuchKey(_) => ObjectStoreError::NotFound {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                },
                err => ObjectStoreError::Request(format!("GetObject failed: {:?}", err)),
            })?;

        Ok(Box::new(result.body.into_async_read()))
    }
}
