use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, instrument};

use crate::config::{CatalogConfig, ConfigError};
use crate::domain::{Product, ProductId};
use crate::framework::ResourceActor;
use crate::repository::ActorProductRepository;
use crate::service::ProductService;
use crate::storage::InMemoryImageStorage;

/// Starts the product store and wires every collaborator into the service.
pub struct CatalogSystem {
    /// Every clone keeps the store alive. Drop them before calling
    /// [`CatalogSystem::shutdown`], or shutdown gives up after the configured timeout.
    pub product_service: ProductService,
    handle: tokio::task::JoinHandle<()>,
    shutdown_timeout: Duration,
}

impl CatalogSystem {
    /// Validates `config`, then spawns the store and builds the service.
    #[instrument(name = "catalog_system", skip(config))]
    pub fn start(config: &CatalogConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!("Starting catalog system");

        let id_counter = Arc::new(AtomicU64::new(config.store.first_id));
        let next_product_id = move || ProductId(id_counter.fetch_add(1, Ordering::SeqCst));

        let (store, client) = ResourceActor::<Product>::new(config.store.buffer_size, next_product_id);
        let handle = tokio::spawn(store.run());

        let repository = Arc::new(ActorProductRepository::new(client));
        let image_storage = Arc::new(InMemoryImageStorage::new(config.images.max_blob_bytes));
        let product_service = ProductService::new(repository, image_storage);

        info!("Catalog system started");
        Ok(Self {
            product_service,
            handle,
            shutdown_timeout: Duration::from_millis(config.store.shutdown_timeout_ms),
        })
    }

    /// Drops the system's service handle and waits for the store loop to end.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> anyhow::Result<()> {
        info!("Shutting down catalog system");
        drop(self.product_service);

        match tokio::time::timeout(self.shutdown_timeout, self.handle).await {
            Ok(Ok(())) => {
                info!("Catalog system shutdown complete");
                Ok(())
            }
            Ok(Err(e)) => {
                error!(error = ?e, "Store shutdown error");
                Err(e.into())
            }
            Err(_) => {
                error!(timeout = ?self.shutdown_timeout, "Store still referenced, giving up on shutdown");
                anyhow::bail!("store did not stop within {:?}", self.shutdown_timeout)
            }
        }
    }
}
