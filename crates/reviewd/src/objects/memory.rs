//! In-memory object store implementation.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::AsyncRead;
use tokio::sync::RwLock;

use reviewd_core::ingest::{ObjectStore, ObjectStoreError};

/// In-memory object store for tests and local development.
///
/// Bodies are kept in a `(bucket, key)` map and served back through an
/// owned cursor, so readers stay valid after the lock is released.
#[derive(Debug, Clone, Default)]
pub struct MemoryObjectStore {
    objects: Arc<RwLock<HashMap<(String, String), Vec<u8>>>>,
}

impl MemoryObjectStore {
    /// Creates a new empty object store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an object body under the given bucket and key.
    pub async fn put(
        &self,
        bucket: impl Into<String>,
        key: impl Into<String>,
        body: impl Into<Vec<u8>>,
    ) {
        let mut objects = self.objects.write().await;
        objects.insert((bucket.into(), key.into()), body.into());
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn open(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Box<dyn AsyncRead + Send + Unpin>, ObjectStoreError> {
        let objects = self.objects.read().await;
        match objects.get(&(bucket.to_string(), key.to_string())) {
            Some(body) => Ok(Box::new(Cursor::new(body.clone()))),
            None => Err(ObjectStoreError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_put_and_open() {
        let store = MemoryObjectStore::new();
        store.put("uploads", "data.csv", "a,b\n1,2\n").await;

        let mut reader = store.open("uploads", "data.csv").await.unwrap();
        let mut body = String::new();
        reader.read_to_string(&mut body).await.unwrap();

        assert_eq!(body, "a,b\n1,2\n");
    }

    #[tokio::test]
    async fn test_open_missing_object() {
        let store = MemoryObjectStore::new();
        let result = store.open("uploads", "missing.csv").await;

        assert!(matches!(
            result,
            Err(ObjectStoreError::NotFound { .. })
        ));
    }
}
