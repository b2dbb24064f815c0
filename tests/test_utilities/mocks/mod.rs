/// Mock implementations for testing
mod mock_download_statistics;
mod mock_metadata_sources;
mod mock_package_registry;
mod mock_progress_reporter;

pub use mock_download_statistics::MockDownloadStatistics;
pub use mock_metadata_sources::{MockBundleSizeRepository, MockRepositoryHost, MockScoreRepository};
pub use mock_package_registry::MockPackageRegistry;
pub use mock_progress_reporter::MockProgressReporter;
