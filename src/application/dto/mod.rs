/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod comparison;
mod output_format;
mod package_stats;
mod search_results;
mod stats_request;

pub use comparison::{
    ComparisonResult, FailedPackage, MAX_COMPARE_PACKAGES, MIN_COMPARE_PACKAGES,
};
pub use output_format::OutputFormat;
pub use package_stats::PackageStats;
pub use search_results::{SearchResults, DEFAULT_SEARCH_SIZE};
pub use stats_request::{DateSelection, StatsRequest, DEFAULT_TOP_VERSIONS};
