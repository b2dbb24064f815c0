use crate::application::dto::{PackageStats, StatsRequest};
use crate::ports::outbound::{DownloadStatistics, PackageRegistry, ProgressReporter};
use crate::shared::Result;
use crate::stats_analysis::domain::{
    DailyDownload, DateRange, Granularity, PackageName, MAX_DAYS_PER_REQUEST,
};
use crate::stats_analysis::services::number_format::{format_date_range, format_number_full};
use crate::stats_analysis::services::{
    DateRangeChunker, DownloadAggregator, ReleaseAnalyzer, StatsCalculator,
};
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;

/// FetchPackageStatsUseCase - download statistics for one package
///
/// Orchestrates the download statistics API and the registry:
/// daily downloads for the requested period (chunked), the previous period
/// for growth, last-week downloads per version, and the releases published
/// inside the period.
///
/// # Type Parameters
/// * `D` - DownloadStatistics implementation
/// * `R` - PackageRegistry implementation
/// * `P` - ProgressReporter implementation
pub struct FetchPackageStatsUseCase<D, R, P> {
    downloads: D,
    registry: R,
    progress_reporter: P,
    today: NaiveDate,
}

impl<D, R, P> FetchPackageStatsUseCase<D, R, P>
where
    D: DownloadStatistics,
    R: PackageRegistry,
    P: ProgressReporter,
{
    pub fn new(downloads: D, registry: R, progress_reporter: P) -> Self {
        Self {
            downloads,
            registry,
            progress_reporter,
            today: Utc::now().date_naive(),
        }
    }

    /// Overrides the date used to resolve presets and reject future ranges
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub(crate) fn progress_reporter(&self) -> &P {
        &self.progress_reporter
    }

    /// Executes the statistics use case
    ///
    /// # Arguments
    /// * `request` - Package, period and presentation options
    ///
    /// # Errors
    /// Invalid names and ranges are rejected before any request is sent.
    /// An unknown package surfaces `StatsError::PackageNotFound`.
    pub async fn execute(&self, request: StatsRequest) -> Result<PackageStats> {
        let name = PackageName::new(request.package_name.as_str())?;
        let range = request.dates.resolve(self.today)?;

        let stats = self
            .fetch_stats(&name, &range, request.granularity, request.top_versions)
            .await?;

        self.progress_reporter.report_completion(&format!(
            "✅ {} downloads over {} days",
            format_number_full(stats.summary.total_downloads),
            range.days()
        ));
        Ok(stats)
    }

    /// Fetches daily downloads for a range of any length
    ///
    /// The range is split into windows the downloads API accepts, fetched
    /// one after another and concatenated in window order.
    pub async fn fetch_package_downloads(
        &self,
        package_name: &str,
        range: &DateRange,
    ) -> Result<Vec<DailyDownload>> {
        let chunks = DateRangeChunker::chunk_range(range, MAX_DAYS_PER_REQUEST);
        let mut downloads = Vec::new();

        for (index, chunk) in chunks.iter().enumerate() {
            downloads.extend(self.downloads.fetch_range(package_name, chunk).await?);

            if chunks.len() > 1 {
                self.progress_reporter.report_progress(
                    index + 1,
                    chunks.len(),
                    Some(&format!("{} {}", package_name, chunk)),
                );
            }
        }

        Ok(downloads)
    }

    /// Builds the statistics of an already-validated package and range
    pub(crate) async fn fetch_stats(
        &self,
        name: &PackageName,
        range: &DateRange,
        granularity: Option<Granularity>,
        top_versions: usize,
    ) -> Result<PackageStats> {
        self.progress_reporter.report(&format!(
            "📈 Fetching downloads for {} ({})...",
            name,
            format_date_range(range)
        ));

        let (downloads, version_downloads, packument) = tokio::join!(
            self.fetch_package_downloads(name.as_str(), range),
            self.downloads.fetch_version_downloads(name.as_str()),
            self.registry.fetch_packument(name.as_str()),
        );

        let downloads = downloads?;
        let version_downloads = version_downloads.unwrap_or_else(|e| {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Per-version downloads of {} unavailable: {}",
                name, e
            ));
            BTreeMap::new()
        });
        let packument = packument.unwrap_or_else(|e| {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Registry document of {} unavailable: {}",
                name, e
            ));
            None
        });

        let previous = self
            .fetch_package_downloads(name.as_str(), &range.previous_period())
            .await
            .unwrap_or_default();

        let summary = StatsCalculator::calculate(&downloads, &previous);

        let mut version_shares = ReleaseAnalyzer::version_shares(&version_downloads);
        version_shares.truncate(top_versions);

        let version_releases = packument
            .as_ref()
            .map(|p| ReleaseAnalyzer::extract_version_releases(p, range))
            .unwrap_or_default();

        let granularity =
            granularity.unwrap_or_else(|| DownloadAggregator::default_granularity(downloads.len()));
        let buckets = DownloadAggregator::aggregate(&downloads, granularity);

        Ok(PackageStats {
            package_name: name.to_string(),
            range: *range,
            summary,
            latest_version: packument
                .as_ref()
                .and_then(|p| p.latest_version())
                .map(str::to_string),
            last_modified: packument
                .as_ref()
                .and_then(|p| p.last_modified())
                .map(str::to_string),
            granularity,
            buckets,
            downloads,
            version_downloads: version_shares,
            version_releases,
        })
    }
}
