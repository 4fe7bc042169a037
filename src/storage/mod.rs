//! Opaque blob storage for product images.
//!
//! No catalog CRUD path touches it; [`ProductService`](crate::service::ProductService)
//! only carries it for image features built on top.

mod in_memory;

pub use in_memory::*;

use async_trait::async_trait;

use crate::error::StorageError;

#[async_trait]
pub trait ImageStorageService: Send + Sync {
    async fn store(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError>;

    async fn fetch(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Returns whether a blob was present under `key`.
    async fn remove(&self, key: &str) -> Result<bool, StorageError>;
}
