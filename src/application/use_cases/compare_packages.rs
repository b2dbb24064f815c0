use super::FetchPackageStatsUseCase;
use crate::application::dto::{
    ComparisonResult, DateSelection, FailedPackage, DEFAULT_TOP_VERSIONS, MAX_COMPARE_PACKAGES,
    MIN_COMPARE_PACKAGES,
};
use crate::ports::outbound::{DownloadStatistics, PackageRegistry, ProgressReporter};
use crate::shared::error::StatsError;
use crate::shared::Result;
use crate::stats_analysis::domain::{Granularity, PackageName};
use crate::stats_analysis::services::DownloadAggregator;
use futures::future::join_all;

/// ComparePackagesUseCase - side-by-side download statistics
///
/// Fetches every package's statistics concurrently over the same period.
/// Packages that fail are reported and left out, as long as at least one
/// package succeeds.
pub struct ComparePackagesUseCase<D, R, P> {
    stats: FetchPackageStatsUseCase<D, R, P>,
}

impl<D, R, P> ComparePackagesUseCase<D, R, P>
where
    D: DownloadStatistics,
    R: PackageRegistry,
    P: ProgressReporter,
{
    pub fn new(stats: FetchPackageStatsUseCase<D, R, P>) -> Self {
        Self { stats }
    }

    /// Executes the comparison
    ///
    /// # Arguments
    /// * `package_names` - 2 to 4 names; duplicates are ignored
    /// * `dates` - Shared reporting period
    /// * `granularity` - Bucket size of the merged series; picked from the period when `None`
    pub async fn execute(
        &self,
        package_names: &[String],
        dates: &DateSelection,
        granularity: Option<Granularity>,
    ) -> Result<ComparisonResult> {
        let names = Self::normalize_names(package_names)?;
        let range = dates.resolve(self.stats.today())?;
        let granularity = granularity
            .unwrap_or_else(|| DownloadAggregator::default_granularity(range.days() as usize));

        let results = join_all(names.iter().map(|name| {
            self.stats
                .fetch_stats(name, &range, Some(granularity), DEFAULT_TOP_VERSIONS)
        }))
        .await;

        let mut packages = Vec::new();
        let mut failed = Vec::new();
        let mut first_error = None;
        for (name, result) in names.iter().zip(results) {
            match result {
                Ok(stats) => packages.push(stats),
                Err(e) => {
                    self.stats.progress_reporter().report_error(&format!(
                        "⚠️  Warning: Skipping {}: {}",
                        name,
                        e.to_string().lines().next().unwrap_or_default()
                    ));
                    failed.push(FailedPackage {
                        name: name.to_string(),
                        error: e.to_string(),
                    });
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        if packages.is_empty() {
            if let Some(e) = first_error {
                return Err(e);
            }
        }

        let series: Vec<_> = packages
            .iter()
            .map(|p| (p.package_name.clone(), p.downloads.clone()))
            .collect();
        let merged = DownloadAggregator::merge_series(&series, granularity);

        self.stats.progress_reporter().report_completion(&format!(
            "✅ Compared {} package(s)",
            packages.len()
        ));

        Ok(ComparisonResult {
            range,
            granularity,
            packages,
            series: merged,
            failed,
        })
    }

    /// Validates names, drops duplicates and enforces the package count
    pub fn normalize_names(package_names: &[String]) -> Result<Vec<PackageName>> {
        let mut names: Vec<PackageName> = Vec::new();
        for raw in package_names {
            let name = PackageName::new(raw.as_str())?;
            if !names.contains(&name) {
                names.push(name);
            }
        }

        if names.len() < MIN_COMPARE_PACKAGES || names.len() > MAX_COMPARE_PACKAGES {
            return Err(StatsError::Validation {
                message: format!(
                    "Compare between {} and {} distinct packages (got {})",
                    MIN_COMPARE_PACKAGES,
                    MAX_COMPARE_PACKAGES,
                    names.len()
                ),
            }
            .into());
        }

        Ok(names)
    }
}
