//! Application state and environment configuration.
//!
//! The state holds the two process-wide singletons of the service, the
//! response cache and the resolver handle. Both are constructed once at
//! startup and passed by reference into every handler via axum's `State`
//! extractor; there is no ambient global mutable state.

use std::num::NonZeroUsize;
use std::sync::Arc;

use phonemeta_lib::{Resolve, ResponseCache};

/// Default TCP port, matching the original deployment.
pub const DEFAULT_PORT: u16 = 8181;

/// Default response cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Startup configuration read from the environment.
#[derive(Debug, Clone, Copy)]
pub struct ServiceConfig {
    /// TCP port to bind (`SERVICE_PORT`, default 8181).
    pub port: u16,
    /// Maximum cache entries (`CACHE_CAPACITY`, default 1000).
    pub cache_capacity: NonZeroUsize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            // 1000 is non-zero; checked in tests.
            cache_capacity: NonZeroUsize::new(DEFAULT_CACHE_CAPACITY)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl ServiceConfig {
    /// Read configuration from environment variables, falling back to
    /// defaults for absent or unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("SERVICE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let cache_capacity = std::env::var("CACHE_CAPACITY")
            .ok()
            .and_then(|c| c.parse::<usize>().ok())
            .and_then(NonZeroUsize::new)
            .unwrap_or(defaults.cache_capacity);

        Self {
            port,
            cache_capacity,
        }
    }
}

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable (`Arc` internally); handlers receive a clone per
/// request but all clones share the one cache and resolver.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cache: ResponseCache,
    resolver: Arc<dyn Resolve>,
}

impl AppState {
    /// Build state from a cache capacity and a resolver implementation.
    pub fn new(cache_capacity: NonZeroUsize, resolver: Arc<dyn Resolve>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cache: ResponseCache::new(cache_capacity),
                resolver,
            }),
        }
    }

    /// The shared response cache.
    pub fn cache(&self) -> &ResponseCache {
        &self.inner.cache
    }

    /// The resolver handle.
    pub fn resolver(&self) -> &dyn Resolve {
        self.inner.resolver.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("cache_capacity", &self.inner.cache.capacity())
            .field("cache_len", &self.inner.cache.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonemeta_lib::OfflineResolver;

    #[test]
    fn default_config_matches_deployment_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 8181);
        assert_eq!(config.cache_capacity.get(), 1000);
    }

    #[test]
    fn clones_share_the_same_cache() {
        let state = AppState::new(
            NonZeroUsize::new(4).unwrap(),
            Arc::new(OfflineResolver::new()),
        );
        let clone = state.clone();

        let number = phonemeta_lib::validate("+14155552671").unwrap();
        let meta = state.resolver().resolve(number.as_str()).unwrap();
        state.cache().put(number.clone(), Arc::new(meta));

        assert!(clone.cache().get(&number).is_some());
    }

    #[test]
    fn debug_reports_cache_shape() {
        let state = AppState::new(
            NonZeroUsize::new(4).unwrap(),
            Arc::new(OfflineResolver::new()),
        );
        let debug = format!("{:?}", state);
        assert!(debug.contains("cache_capacity"));
        assert!(debug.contains("cache_len"));
    }
}
