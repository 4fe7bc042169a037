//! Configuration for the catalog process.
//!
//! Sources, later ones winning: built-in defaults, an optional `catalog.{toml,yaml,json}`
//! file in the working directory, then `CATALOG__*` environment variables
//! (`CATALOG__STORE__BUFFER_SIZE=64` sets `store.buffer_size`). A `.env` file is
//! loaded first if present.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub images: ImageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Capacity of the request channel in front of the store actor.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
    /// First identifier handed out to a new product.
    #[serde(default = "default_first_id")]
    pub first_id: u64,
    /// How long shutdown waits for the store loop to end.
    #[serde(default = "default_shutdown_timeout_ms")]
    pub shutdown_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageConfig {
    #[serde(default = "default_max_blob_bytes")]
    pub max_blob_bytes: usize,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("store.buffer_size must be greater than zero")]
    ZeroBufferSize,
    #[error("store.first_id must be greater than zero")]
    ZeroFirstId,
    #[error("images.max_blob_bytes must be greater than zero")]
    ZeroBlobLimit,
}

fn default_buffer_size() -> usize {
    32
}

fn default_first_id() -> u64 {
    1
}

fn default_shutdown_timeout_ms() -> u64 {
    5_000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_blob_bytes() -> usize {
    5 * 1024 * 1024 // 5 MiB
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
            first_id: default_first_id(),
            shutdown_timeout_ms: default_shutdown_timeout_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self { max_blob_bytes: default_max_blob_bytes() }
    }
}

impl CatalogConfig {
    /// Load configuration from defaults, config file and environment.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .set_default("store.buffer_size", default_buffer_size() as i64)?
            .set_default("store.first_id", default_first_id() as i64)?
            .set_default("store.shutdown_timeout_ms", default_shutdown_timeout_ms() as i64)?
            .set_default("logging.level", default_log_level())?
            .set_default("images.max_blob_bytes", default_max_blob_bytes() as i64)?
            .add_source(config::File::with_name("catalog").required(false))
            .add_source(
                config::Environment::with_prefix("CATALOG")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }
        if self.store.first_id == 0 {
            return Err(ConfigError::ZeroFirstId);
        }
        if self.images.max_blob_bytes == 0 {
            return Err(ConfigError::ZeroBlobLimit);
        }
        Ok(())
    }
}
