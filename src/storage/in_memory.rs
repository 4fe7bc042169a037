use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::ImageStorageService;
use crate::error::StorageError;

/// Process-local [`ImageStorageService`]. Blobs live as long as the value does.
pub struct InMemoryImageStorage {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
    max_blob_bytes: usize,
}

impl InMemoryImageStorage {
    pub fn new(max_blob_bytes: usize) -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
            max_blob_bytes,
        }
    }
}

fn check_key(key: &str) -> Result<(), StorageError> {
    if key.trim().is_empty() {
        return Err(StorageError::InvalidKey("key must not be empty".to_string()));
    }
    Ok(())
}

#[async_trait]
impl ImageStorageService for InMemoryImageStorage {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn store(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        check_key(key)?;
        if bytes.len() > self.max_blob_bytes {
            return Err(StorageError::TooLarge {
                size: bytes.len(),
                limit: self.max_blob_bytes,
            });
        }
        self.blobs.write().await.insert(key.to_string(), bytes);
        debug!("Blob stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn fetch(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        check_key(key)?;
        Ok(self.blobs.read().await.get(key).cloned())
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        check_key(key)?;
        Ok(self.blobs.write().await.remove(key).is_some())
    }
}
