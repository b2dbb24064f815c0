use crate::stats_analysis::domain::{
    DailyDownload, DateRange, DownloadBucket, DownloadSummary, Granularity, VersionDownload,
    VersionRelease,
};
use serde::Serialize;

/// PackageStats - response DTO of the download statistics use case
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageStats {
    pub package_name: String,
    #[serde(flatten)]
    pub range: DateRange,
    pub summary: DownloadSummary,
    pub latest_version: Option<String>,
    /// `time.modified` of the registry document, as published
    pub last_modified: Option<String>,
    pub granularity: Granularity,
    pub buckets: Vec<DownloadBucket>,
    pub downloads: Vec<DailyDownload>,
    pub version_downloads: Vec<VersionDownload>,
    pub version_releases: Vec<VersionRelease>,
}
