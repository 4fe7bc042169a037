use thiserror::Error;

use crate::domain::{EntityKind, ProductId};

/// Result type returned by [`ProductService`](crate::service::ProductService).
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors surfaced by the catalog service.
///
/// `ResourceNotFound` is the only variant the service produces itself. Anything
/// else comes from a collaborator and is forwarded untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("{kind} not found: {id}")]
    ResourceNotFound { kind: EntityKind, id: ProductId },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CatalogError {
    pub fn not_found(kind: EntityKind, id: ProductId) -> Self {
        Self::ResourceNotFound { kind, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }
}

/// Errors that can occur inside a product repository.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RepositoryError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors that can occur inside the image blob store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error("Invalid image key: {0}")]
    InvalidKey(String),
    #[error("Image too large: {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { size: usize, limit: usize },
}
