use crate::shared::Result;
use crate::stats_analysis::domain::{DailyDownload, DateRange};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// DownloadStatistics port for per-day download counts
///
/// The upstream API limits how many days one request may cover. Callers
/// split longer ranges with `DateRangeChunker` and call
/// [`fetch_range`](DownloadStatistics::fetch_range) once per chunk.
#[async_trait]
pub trait DownloadStatistics: Send + Sync {
    /// Fetches daily downloads for one window
    ///
    /// # Errors
    /// Returns `StatsError::PackageNotFound` when the package is unknown,
    /// and other errors for transport or parse failures.
    async fn fetch_range(
        &self,
        package_name: &str,
        range: &DateRange,
    ) -> Result<Vec<DailyDownload>>;

    /// Fetches last-week downloads per published version
    ///
    /// # Returns
    /// Version to download count. Empty when the package is unknown.
    async fn fetch_version_downloads(&self, package_name: &str) -> Result<BTreeMap<String, u64>>;
}
