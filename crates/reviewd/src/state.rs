//! Application state with repository-based storage.
//!
//! Defines the shared state handed to every request handler: trait objects
//! for the record store and the object store, selected via feature flags.

use std::sync::Arc;

use reviewd_core::ingest::ObjectStore;
use reviewd_core::storage::ReviewRepository;

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!("Cannot enable both 'inmemory' and 'dynamodb' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

// Object-store features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "memory-objects", feature = "s3"))]
compile_error!("Cannot enable both 'memory-objects' and 's3' object-store features");

#[cfg(not(any(feature = "memory-objects", feature = "s3")))]
compile_error!("Must enable exactly one object-store feature: 'memory-objects' or 's3'");

/// Shared application state.
///
/// This is cloned for each request handler. The backing clients are
/// stateless connection pools constructed once at startup; there is no
/// shared mutable state between requests.
#[derive(Clone)]
pub struct AppState {
    /// Review record store.
    pub reviews: Arc<dyn ReviewRepository>,
    /// Object storage the ingestion handler reads uploads from.
    pub objects: Arc<dyn ObjectStore>,
    /// Column delimiter for ingested files.
    pub delimiter: char,
}

impl AppState {
    /// Creates a new AppState from the given backends and configuration.
    pub fn build(
        reviews: Arc<dyn ReviewRepository>,
        objects: Arc<dyn ObjectStore>,
        config: &Config,
    ) -> Self {
        Self {
            reviews,
            objects,
            delimiter: config.delimiter,
        }
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "inmemory", feature = "memory-objects"))]
mod inmemory_memory {
    use super::*;
    use crate::objects::MemoryObjectStore;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and object store.
        /// Useful for local development without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let reviews = Arc::new(InMemoryRepository::new());
            let objects = Arc::new(MemoryObjectStore::new());

            Ok(Self::build(reviews, objects, config))
        }
    }
}

#[cfg(all(feature = "dynamodb", feature = "s3"))]
mod dynamodb_s3 {
    use super::*;
    use crate::objects::S3ObjectStore;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage and S3 object store.
        ///
        /// Both clients share one AWS configuration (default credential
        /// chain, region from the environment) and are reused for every
        /// request.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
            let s3_client = aws_sdk_s3::Client::new(&aws_config);

            let reviews = Arc::new(DynamoDbRepository::new(
                dynamodb_client,
                config.table_name.clone(),
            ));
            let objects = Arc::new(S3ObjectStore::new(s3_client));

            Ok(Self::build(reviews, objects, config))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
