use crate::shared::Result;
use crate::stats_analysis::domain::BundleSize;
use async_trait::async_trait;

/// BundleSizeRepository port for bundle size measurements (Bundlephobia)
#[async_trait]
pub trait BundleSizeRepository: Send + Sync {
    /// Fetches the minified and gzipped size of the latest version
    ///
    /// # Returns
    /// `None` when the service has no measurement for the package
    async fn fetch_bundle_size(&self, package_name: &str) -> Result<Option<BundleSize>>;
}
