use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Errors that can occur when retrieving an uploaded object.
#[derive(Debug, Error)]
pub enum ObjectStoreError {
    #[error("object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },
    #[error("object request failed: {0}")]
    Request(String),
}

/// Read access to the object storage that upload notifications refer to.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Opens a streaming read of the object body.
    ///
    /// The whole object is never buffered; callers consume the reader row
    /// by row.
    async fn open(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Box<dyn AsyncRead + Send + Unpin>, ObjectStoreError>;
}
