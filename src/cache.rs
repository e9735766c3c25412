//! In-memory caching using moka
//!
//! Package pricing is read on every quote but edited rarely in the back
//! office, so parsed packages are cached with a TTL.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::models::Package;

/// Application cache holding parsed packages
#[derive(Clone)]
pub struct AppCache {
    /// Packages (id -> Package with parsed options)
    pub packages: Cache<Uuid, Arc<Package>>,
}

impl AppCache {
    /// Create a new cache; entries expire after `ttl` and after half of it idle
    pub fn new(ttl: Duration) -> Self {
        Self {
            packages: Cache::builder()
                .max_capacity(500)
                .time_to_live(ttl)
                .time_to_idle(ttl / 2)
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            packages_size: self.packages.entry_count(),
        }
    }

    /// Invalidate a specific package
    pub async fn invalidate_package(&self, id: Uuid) {
        self.packages.invalidate(&id).await;
        info!("Cache invalidated for package: {}", id);
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(5 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub packages_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn package() -> Package {
        Package {
            id: Uuid::new_v4(),
            name: "James Bond Island".to_string(),
            base_price: dec!(1800),
            options: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_invalidate_package() {
        let cache = AppCache::default();
        let package = package();
        let id = package.id;

        cache.packages.insert(id, Arc::new(package)).await;
        assert!(cache.packages.get(&id).await.is_some());

        cache.invalidate_package(id).await;
        assert!(cache.packages.get(&id).await.is_none());
    }
}
