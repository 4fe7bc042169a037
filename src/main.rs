use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

use product_catalog::config::CatalogConfig;
use product_catalog::domain::{ProductDto, ProductId};
use product_catalog::system::CatalogSystem;
use product_catalog::telemetry::setup_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CatalogConfig::load()?;
    setup_tracing(&config.logging);

    info!("Starting product catalog demo");
    let system = CatalogSystem::start(&config)?;
    let service = system.product_service.clone();

    let dto = ProductDto::new("Test Product", "Test Description", Decimal::new(9999, 2), 10);
    let created = service
        .create_product(dto.clone())
        .instrument(tracing::info_span!("product_creation"))
        .await?;
    let id = created
        .id
        .ok_or_else(|| anyhow::anyhow!("store returned a product without an id"))?;
    info!(product_id = %id, name = %created.name, "Product created successfully");

    let fetched = service.get_product_by_id(id).await?;
    info!(product_id = %id, price = %fetched.price, "Product fetched");

    match service.get_product_by_id(ProductId(99)).await {
        Ok(product) => info!(name = %product.name, "Unexpected product"),
        Err(e) => error!(error = %e, "Lookup failed"),
    }

    let update = ProductDto { name: "Updated Name".to_string(), ..dto };
    let updated = service
        .update_product(id, update)
        .instrument(tracing::info_span!("product_update"))
        .await?;
    info!(product_id = %id, name = %updated.name, "Product updated successfully");

    let active = service.find_active_products().await?;
    info!(count = active.len(), "Active products listed");

    let deleted = service.delete_product(id).await?;
    info!(product_id = %id, deleted, "Product deleted");

    drop(service);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
