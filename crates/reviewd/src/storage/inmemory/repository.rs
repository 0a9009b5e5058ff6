//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use reviewd_core::review::Review;
use reviewd_core::storage::{Result, ReviewRepository};

/// In-memory storage backend for tests and local development.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    reviews: Arc<RwLock<HashMap<String, Review>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryRepository {
    async fn get_review(&self, id: &str) -> Result<Option<Review>> {
        let reviews = self.reviews.read().await;
        Ok(reviews.get(id).cloned())
    }

    async fn put_review(&self, review: &Review) -> Result<()> {
        let mut reviews = self.reviews.write().await;
        reviews.insert(review.review_id.clone(), review.clone());
        Ok(())
    }

    async fn delete_review(&self, id: &str) -> Result<()> {
        let mut reviews = self.reviews.write().await;
        reviews.remove(id);
        Ok(())
    }

    async fn scan_reviews(&self) -> Result<Vec<Review>> {
        let reviews = self.reviews.read().await;
        Ok(reviews.values().cloned().collect())
    }
}
