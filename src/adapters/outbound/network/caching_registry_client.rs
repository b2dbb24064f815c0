use crate::ports::outbound::PackageRegistry;
use crate::shared::Result;
use crate::stats_analysis::domain::{LatestManifest, Packument, SearchHit};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default time-to-live of cached registry documents
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// A cached lookup result, `None` meaning the package does not exist
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: Option<T>,
    stored_at: Instant,
}

impl<T: Clone> CacheEntry<T> {
    fn new(value: Option<T>) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }

    fn fresh_value(&self, ttl: Duration) -> Option<Option<T>> {
        (self.stored_at.elapsed() < ttl).then(|| self.value.clone())
    }
}

/// CachingPackageRegistry wraps a PackageRegistry and adds in-memory caching.
///
/// Decorator over any PackageRegistry. Successful lookups, including
/// "not found", are kept for `ttl`; failures are never cached so the next
/// call tries again. The maps are shared-safe, so concurrent branches of a
/// dependency tree resolution reuse each other's lookups.
pub struct CachingPackageRegistry<R: PackageRegistry> {
    inner: R,
    ttl: Duration,
    latest: Arc<DashMap<String, CacheEntry<LatestManifest>>>,
    packuments: Arc<DashMap<String, CacheEntry<Packument>>>,
}

impl<R: PackageRegistry> CachingPackageRegistry<R> {
    /// Creates a caching registry with the default one-hour time-to-live
    pub fn new(inner: R) -> Self {
        Self::with_ttl(inner, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(inner: R, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            latest: Arc::new(DashMap::new()),
            packuments: Arc::new(DashMap::new()),
        }
    }

    /// Number of cached entries across both document kinds
    pub fn cache_size(&self) -> usize {
        self.latest.len() + self.packuments.len()
    }
}

#[async_trait]
impl<R: PackageRegistry> PackageRegistry for CachingPackageRegistry<R> {
    async fn fetch_latest(&self, package_name: &str) -> Result<Option<LatestManifest>> {
        if let Some(cached) = self
            .latest
            .get(package_name)
            .and_then(|entry| entry.fresh_value(self.ttl))
        {
            return Ok(cached);
        }

        let manifest = self.inner.fetch_latest(package_name).await?;
        self.latest
            .insert(package_name.to_string(), CacheEntry::new(manifest.clone()));

        Ok(manifest)
    }

    async fn fetch_packument(&self, package_name: &str) -> Result<Option<Packument>> {
        if let Some(cached) = self
            .packuments
            .get(package_name)
            .and_then(|entry| entry.fresh_value(self.ttl))
        {
            return Ok(cached);
        }

        let packument = self.inner.fetch_packument(package_name).await?;
        self.packuments
            .insert(package_name.to_string(), CacheEntry::new(packument.clone()));

        Ok(packument)
    }

    async fn search(&self, query: &str, size: usize) -> Result<Vec<SearchHit>> {
        self.inner.search(query, size).await
    }

    async fn package_exists(&self, package_name: &str) -> Result<bool> {
        if let Some(Some(cached)) = self
            .packuments
            .get(package_name)
            .map(|entry| entry.fresh_value(self.ttl))
        {
            return Ok(cached.is_some());
        }
        self.inner.package_exists(package_name).await
    }
}
