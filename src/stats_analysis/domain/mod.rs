pub mod date_range;
pub mod dependency_tree;
pub mod downloads;
pub mod package;
pub mod package_document;
pub mod package_metadata;
pub mod release;
pub mod report_metadata;

pub use date_range::{
    days_in_range, latest_available_date, previous_period, DatePreset, DateRange,
    MAX_DATE_RANGE_DAYS, MAX_DAYS_PER_REQUEST, NPM_DATA_DELAY_DAYS,
};
pub use dependency_tree::{DependencyNode, DependencyTreeResult};
pub use downloads::{
    ComparisonBucket, DailyDownload, DownloadBucket, DownloadSummary, Granularity, PeakDay,
    VersionDownload,
};
pub use package::PackageName;
pub use package_document::{LatestManifest, Maintainer, Packument, RepositoryField, SearchHit};
pub use package_metadata::{
    BundleSize, Contributor, GitHubData, GitHubRepo, NpmsScore, PackageMetadata,
};
pub use release::{ReleaseCadence, VersionRelease, VersionType};
pub use report_metadata::ReportMetadata;
