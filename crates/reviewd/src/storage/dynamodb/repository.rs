//! DynamoDB repository implementation.
//!
//! Implements `ReviewRepository` from `reviewd_core::storage` using a
//! single DynamoDB table keyed by the `reviewId` attribute.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use reviewd_core::review::Review;
use reviewd_core::storage::{Result, ReviewRepository};

use super::conversions::{item_to_review, review_to_item};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
};

/// DynamoDB-based repository implementation.
///
/// Provides async access to the review table. The client is a stateless
/// connection pool and is shared across requests.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ReviewRepository for DynamoDbRepository {
    async fn get_review(&self, id: &str) -> Result<Option<Review>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("reviewId", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_review(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_review(&self, review: &Review) -> Result<()> {
        let item = review_to_item(review)?;

        // Unconditional upsert; the last writer wins.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete_review(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("reviewId", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn scan_reviews(&self) -> Result<Vec<Review>> {
        // Single unpaginated scan; acceptable for this domain's scale.
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_review).collect()
    }
}
