use async_trait::async_trait;
use tracing::{debug, instrument};

use super::ProductRepository;
use crate::domain::{Product, ProductId};
use crate::error::RepositoryError;
use crate::framework::{Entity, FrameworkError, ResourceClient};

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<&ProductId> {
        self.id.as_ref()
    }

    fn assign_id(&mut self, id: ProductId) {
        self.id = Some(id);
    }
}

impl From<FrameworkError> for RepositoryError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::UnknownId(id) => {
                RepositoryError::ConstraintViolation(format!("no stored product with id {}", id))
            }
            other => RepositoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

/// [`ProductRepository`] backed by a [`ResourceActor<Product>`](crate::framework::ResourceActor).
#[derive(Clone)]
pub struct ActorProductRepository {
    inner: ResourceClient<Product>,
}

impl ActorProductRepository {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ProductRepository for ActorProductRepository {
    #[instrument(skip(self), fields(product_id = %id))]
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        debug!("Sending request");
        Ok(self.inner.get(id).await?)
    }

    #[instrument(skip(self, product), fields(product_id = ?product.id, product_name = %product.name))]
    async fn persist(&self, product: Product) -> Result<Product, RepositoryError> {
        debug!("Sending request");
        Ok(self.inner.persist(product).await?)
    }

    #[instrument(skip(self, product), fields(product_id = ?product.id))]
    async fn delete(&self, product: Product) -> Result<u64, RepositoryError> {
        let id = product.id.ok_or_else(|| {
            RepositoryError::ConstraintViolation("cannot delete a product that was never persisted".to_string())
        })?;
        debug!("Sending request");
        let removed = self.inner.delete(id).await?;
        Ok(u64::from(removed))
    }

    #[instrument(skip(self))]
    async fn find_active_products(&self) -> Result<Vec<Product>, RepositoryError> {
        debug!("Sending request");
        Ok(self.inner.list(Product::is_active).await?)
    }
}
