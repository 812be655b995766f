//! Phone number metadata lookup HTTP microservice.
//!
//! # Endpoints
//!
//! - `GET /lookup?number=<value>` - Enrich a phone number with metadata
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//!
//! # Configuration
//!
//! - `SERVICE_PORT` - HTTP port (default: 8181)
//! - `CACHE_CAPACITY` - Maximum cached lookups (default: 1000)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use phonemeta_lib::OfflineResolver;
use phonemeta_service::{init_logging, router, AppState, LoggingConfig, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (reads LOG_FORMAT from environment)
    let logging_config = LoggingConfig::from_env().with_service("lookup");
    init_logging(&logging_config);

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    info!(
        port = config.port,
        cache_capacity = config.cache_capacity.get(),
        "starting lookup service"
    );

    // Construct the process-wide singletons once and hand them to the router
    let resolver = OfflineResolver::new();
    info!(plan_size = resolver.plan_size(), "offline numbering plan loaded");

    let state = AppState::new(config.cache_capacity, Arc::new(resolver));
    let app = router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
