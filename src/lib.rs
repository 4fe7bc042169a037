//! # Product Catalog
//!
//! Business logic for the product catalog: create, read, update and delete
//! products, and list the active ones.
//!
//! - [`service::ProductService`] is the core. It performs existence checks, maps
//!   [`domain::ProductDto`] input onto [`domain::Product`] records, and classifies errors.
//! - [`repository::ProductRepository`] and [`storage::ImageStorageService`] are the
//!   collaborators it is constructed with.
//! - [`framework`] holds the generic store actor behind the default repository.
//! - [`system::CatalogSystem`] starts the store and wires everything together.
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use product_catalog::config::CatalogConfig;
//! use product_catalog::domain::ProductDto;
//! use product_catalog::system::CatalogSystem;
//! use rust_decimal::Decimal;
//!
//! let system = CatalogSystem::start(&CatalogConfig::default())?;
//! let dto = ProductDto::new("Lamp", "Desk lamp", Decimal::new(1250, 2), 4);
//! let created = system.product_service.create_product(dto).await?;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod framework;
pub mod repository;
pub mod service;
pub mod storage;
pub mod system;
pub mod telemetry;

#[cfg(test)]
mod mock_framework;
