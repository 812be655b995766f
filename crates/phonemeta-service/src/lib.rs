//! Phone number metadata lookup HTTP microservice.
//!
//! Thin axum glue over `phonemeta-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Extract and URL-decode the `number` query parameter      │
//! │  - Validate via phonemeta_lib::validate                     │
//! │  - Consult the shared ResponseCache, fall through to the    │
//! │    resolver on miss and write the result back               │
//! │  - Format the JSON response                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`router`] builds the full application for both `main` and the
//! integration tests.

#![deny(warnings)]

mod error;
mod health;
pub mod logging;
mod lookup;
mod state;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::{ApiError, ErrorBody};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use lookup::lookup_handler;
pub use state::{AppState, ServiceConfig, DEFAULT_CACHE_CAPACITY, DEFAULT_PORT};

/// Build the application router.
///
/// `/lookup` is the single supported API route; unknown paths get axum's
/// default 404. The permissive CORS layer adds
/// `Access-Control-Allow-Origin: *` for browser clients.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/lookup", get(lookup_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
