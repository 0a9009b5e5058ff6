use async_trait::async_trait;

use crate::review::Review;

use super::Result;

/// Repository for review records, keyed by `reviewId`.
///
/// The backing store owns consistency; this trait makes no concurrency
/// promises beyond last-writer-wins on `put_review`.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Gets a review by its identifier. Never returns a partial record.
    async fn get_review(&self, id: &str) -> Result<Option<Review>>;

    /// Upserts a review unconditionally.
    async fn put_review(&self, review: &Review) -> Result<()>;

    /// Deletes a review by its identifier. Deleting an absent identifier is
    /// not an error.
    async fn delete_review(&self, id: &str) -> Result<()>;

    /// Returns every stored review, with no pagination, filter, or ordering
    /// guarantee.
    async fn scan_reviews(&self) -> Result<Vec<Review>>;
}
