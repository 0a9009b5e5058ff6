//! Object-store backend implementations.
//!
//! Backends implement `ObjectStore` from `reviewd_core::ingest` and are
//! selected via feature flags (see `state.rs` for the guards).

#[cfg(feature = "memory-objects")]
mod memory;
#[cfg(feature = "s3")]
mod s3;

#[cfg(feature = "memory-objects")]
pub use memory::MemoryObjectStore;
#[cfg(feature = "s3")]
pub use s3::S3ObjectStore;
