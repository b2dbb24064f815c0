/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the npm registry, the download statistics API, GitHub,
/// Bundlephobia, npms.io and the console.
pub mod bundle_size_repository;
pub mod download_statistics;
pub mod formatter;
pub mod output_presenter;
pub mod package_registry;
pub mod progress_reporter;
pub mod repository_host;
pub mod score_repository;

pub use bundle_size_repository::BundleSizeRepository;
pub use download_statistics::DownloadStatistics;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use package_registry::PackageRegistry;
pub use progress_reporter::ProgressReporter;
pub use repository_host::RepositoryHost;
pub use score_repository::ScoreRepository;
