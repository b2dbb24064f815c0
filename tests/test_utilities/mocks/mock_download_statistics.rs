use async_trait::async_trait;
use npm_stats::prelude::*;
use npm_stats::shared::error::StatsError;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock DownloadStatistics for testing
///
/// Every known package is downloaded `per_day` times each day.
/// Requested windows are recorded so tests can check chunking.
#[derive(Default, Clone)]
pub struct MockDownloadStatistics {
    pub per_day: HashMap<String, u64>,
    pub versions: HashMap<String, BTreeMap<String, u64>>,
    pub requests: Arc<Mutex<Vec<(String, DateRange)>>>,
}

impl MockDownloadStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, name: &str, per_day: u64) -> Self {
        self.per_day.insert(name.to_string(), per_day);
        self
    }

    pub fn with_version_downloads(mut self, name: &str, versions: &[(&str, u64)]) -> Self {
        self.versions.insert(
            name.to_string(),
            versions.iter().map(|(v, d)| (v.to_string(), *d)).collect(),
        );
        self
    }

    pub fn requested_windows(&self, name: &str) -> Vec<DateRange> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, r)| *r)
            .collect()
    }
}

#[async_trait]
impl DownloadStatistics for MockDownloadStatistics {
    async fn fetch_range(
        &self,
        package_name: &str,
        range: &DateRange,
    ) -> Result<Vec<DailyDownload>> {
        self.requests
            .lock()
            .unwrap()
            .push((package_name.to_string(), *range));

        let per_day = *self
            .per_day
            .get(package_name)
            .ok_or_else(|| StatsError::PackageNotFound {
                name: package_name.to_string(),
            })?;

        Ok(range
            .start()
            .iter_days()
            .take_while(|day| *day <= range.end())
            .map(|day| DailyDownload::new(day, per_day))
            .collect())
    }

    async fn fetch_version_downloads(&self, package_name: &str) -> Result<BTreeMap<String, u64>> {
        Ok(self.versions.get(package_name).cloned().unwrap_or_default())
    }
}
