//! Product persistence: the collaborator contract and its actor-backed implementation.

mod actor_repository;

pub use actor_repository::*;

use async_trait::async_trait;

use crate::domain::{Product, ProductId};
use crate::error::RepositoryError;

/// Asynchronous storage access for products.
///
/// Implementations own all consistency concerns for the records they hold;
/// callers perform no locking or retries of their own.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Looks up a product, yielding `None` when the id is unknown.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Inserts a product without an id (assigning one) or overwrites an existing record.
    async fn persist(&self, product: Product) -> Result<Product, RepositoryError>;

    /// Removes a product. The returned count is an opaque completion token.
    async fn delete(&self, product: Product) -> Result<u64, RepositoryError>;

    /// All products flagged active, ordered by id.
    async fn find_active_products(&self) -> Result<Vec<Product>, RepositoryError>;
}
