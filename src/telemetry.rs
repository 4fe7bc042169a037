use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Configure tracing once at startup for the entire process.
///
/// `RUST_LOG` wins over the configured level:
/// ```bash
/// RUST_LOG=debug cargo run                          # Show debug logs
/// RUST_LOG=product_catalog::service=debug cargo run # Only the service
/// ```
/// Later calls are no-ops, so tests and the binary can both call it.
pub fn setup_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
