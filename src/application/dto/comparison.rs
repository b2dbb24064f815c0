use super::PackageStats;
use crate::stats_analysis::domain::{ComparisonBucket, DateRange, Granularity};
use serde::Serialize;

/// Most packages one comparison may include
pub const MAX_COMPARE_PACKAGES: usize = 4;

/// Fewest packages that make a comparison
pub const MIN_COMPARE_PACKAGES: usize = 2;

/// A package left out of a comparison because its statistics failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedPackage {
    pub name: String,
    pub error: String,
}

/// ComparisonResult - response DTO of the compare use case
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    #[serde(flatten)]
    pub range: DateRange,
    pub granularity: Granularity,
    pub packages: Vec<PackageStats>,
    pub series: Vec<ComparisonBucket>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<FailedPackage>,
}
