use crate::shared::Result;
use crate::stats_analysis::domain::{LatestManifest, Packument, SearchHit};
use async_trait::async_trait;

/// PackageRegistry port for querying package documents
///
/// This port abstracts the npm registry (or a mirror of it). Lookups
/// return `Ok(None)` when the package does not exist; errors are reserved
/// for transport failures and malformed responses.
///
/// # Async Support
/// Implementations must be `Send + Sync` so one registry can serve many
/// concurrent lookups, e.g. all children of a dependency tree level.
#[async_trait]
pub trait PackageRegistry: Send + Sync {
    /// Fetches the manifest of the latest published version
    ///
    /// # Arguments
    /// * `package_name` - Name of the package, scoped names included
    ///
    /// # Returns
    /// The version and its declared dependencies, or `None` if the package is unknown
    async fn fetch_latest(&self, package_name: &str) -> Result<Option<LatestManifest>>;

    /// Fetches the full registry document of a package
    async fn fetch_packument(&self, package_name: &str) -> Result<Option<Packument>>;

    /// Full-text search over the registry
    ///
    /// # Arguments
    /// * `query` - Search text
    /// * `size` - Maximum number of hits
    async fn search(&self, query: &str, size: usize) -> Result<Vec<SearchHit>>;

    /// Whether a package with this name is published
    async fn package_exists(&self, package_name: &str) -> Result<bool> {
        Ok(self.fetch_packument(package_name).await?.is_some())
    }
}
