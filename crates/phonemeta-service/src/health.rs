//! Health check handlers for liveness/readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Configured cache capacity (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_capacity: Option<usize>,

    /// Current cache entry count (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_entries: Option<usize>,
}

impl HealthStatus {
    /// A healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            cache_capacity: None,
            cache_entries: None,
        }
    }

    /// A ready status with cache information.
    pub fn ready(service: &str, version: &str, capacity: usize, entries: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            cache_capacity: Some(capacity),
            cache_entries: Some(entries),
        }
    }
}

/// Liveness probe handler: 200 whenever the process is serving.
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler. The service has no external dependencies to
/// wait on, so readiness reports the cache shape alongside the ok status.
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let status = HealthStatus::ready(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        state.cache().capacity(),
        state.cache().len(),
    );
    (StatusCode::OK, Json(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_status_has_no_cache_fields() {
        let status = HealthStatus::alive("phonemeta-service", "0.1.0");
        assert_eq!(status.status, "ok");
        assert!(status.cache_capacity.is_none());

        let json = serde_json::to_string(&status).unwrap();
        assert!(!json.contains("cache_capacity"));
    }

    #[test]
    fn ready_status_reports_cache_shape() {
        let status = HealthStatus::ready("phonemeta-service", "0.1.0", 1000, 12);
        assert_eq!(status.cache_capacity, Some(1000));
        assert_eq!(status.cache_entries, Some(12));
    }
}
