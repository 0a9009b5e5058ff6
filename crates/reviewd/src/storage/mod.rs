//! Storage backend implementations.
//!
//! Backends implement `ReviewRepository` from `reviewd_core::storage` and
//! are selected via feature flags (see `state.rs` for the guards).

#[cfg(feature = "dynamodb")]
mod dynamodb;
#[cfg(feature = "inmemory")]
mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
