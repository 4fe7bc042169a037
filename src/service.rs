//! The product catalog service: existence checks, DTO mapping and error
//! classification on top of the repository.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::{EntityKind, Product, ProductDto, ProductId};
use crate::error::{CatalogError, CatalogResult};
use crate::repository::ProductRepository;
use crate::storage::ImageStorageService;

/// Orchestrates the product lifecycle over its collaborators.
///
/// Holds no state besides the injected collaborators; clones share them.
/// Collaborator failures are returned exactly as the collaborator produced them.
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    image_storage: Arc<dyn ImageStorageService>,
}

impl ProductService {
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        image_storage: Arc<dyn ImageStorageService>,
    ) -> Self {
        Self { repository, image_storage }
    }

    pub fn image_storage(&self) -> &Arc<dyn ImageStorageService> {
        &self.image_storage
    }

    /// Fails with [`CatalogError::ResourceNotFound`] when the id is unknown.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product_by_id(&self, id: ProductId) -> CatalogResult<Product> {
        debug!("Looking up product");
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Product, id))
    }

    /// Persists a new, active product built from `dto`. The store assigns the id.
    #[instrument(skip(self, dto), fields(product_name = %dto.name))]
    pub async fn create_product(&self, dto: ProductDto) -> CatalogResult<Product> {
        let product = self.repository.persist(Product::from_dto(dto)).await?;
        info!(product_id = ?product.id, "Product created");
        Ok(product)
    }

    /// Overwrites name, description, price and stock of an existing product.
    ///
    /// The persist is only issued after the lookup has succeeded. Two concurrent
    /// updates of the same id are not serialized here: both read, both write, and
    /// whichever persist completes last wins.
    #[instrument(skip(self, dto), fields(product_id = %id))]
    pub async fn update_product(&self, id: ProductId, dto: ProductDto) -> CatalogResult<Product> {
        let mut product = self.get_product_by_id(id).await?;
        product.apply_dto(dto);
        let product = self.repository.persist(product).await?;
        info!("Product updated");
        Ok(product)
    }

    /// Deletes an existing product and reports `true`.
    ///
    /// The repository's completion token is not inspected; any non-failing
    /// completion counts as success.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: ProductId) -> CatalogResult<bool> {
        let product = self.get_product_by_id(id).await?;
        let _token = self.repository.delete(product).await?;
        info!("Product deleted");
        Ok(true)
    }

    #[instrument(skip(self))]
    pub async fn find_active_products(&self) -> CatalogResult<Vec<Product>> {
        let products = self.repository.find_active_products().await?;
        debug!(count = products.len(), "Listed active products");
        Ok(products)
    }
}
