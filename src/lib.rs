//! npm-stats - npm package statistics from the command line
//!
//! This library collects download statistics, dependency trees and package
//! metadata from the npm registry and related public APIs, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`stats_analysis`): Value objects, pure services and policies
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use npm_stats::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let registry = CachingPackageRegistry::new(NpmRegistryClient::new()?);
//! let resolver = DependencyTreeResolver::new(registry);
//!
//! if let Some(tree) = resolver.resolve("express", 3).await {
//!     println!(
//!         "{}@{} declares {} dependencies",
//!         tree.root().name,
//!         tree.root().version,
//!         tree.total_dependencies()
//!     );
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod stats_analysis;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{
        BundlephobiaClient, CachingPackageRegistry, GitHubClient, NpmDownloadsClient,
        NpmRegistryClient, NpmsClient,
    };
    pub use crate::application::dto::{
        ComparisonResult, DateSelection, OutputFormat, PackageStats, SearchResults, StatsRequest,
    };
    pub use crate::application::read_models::{Report, ReportBody};
    pub use crate::application::use_cases::{
        ComparePackagesUseCase, DependencyTreeResolver, FetchDependencyTreeUseCase,
        FetchPackageMetadataUseCase, FetchPackageStatsUseCase, SearchPackagesUseCase,
    };
    pub use crate::ports::outbound::{
        BundleSizeRepository, DownloadStatistics, OutputPresenter, PackageRegistry,
        ProgressReporter, ReportFormatter, RepositoryHost, ScoreRepository,
    };
    pub use crate::stats_analysis::domain::{
        DailyDownload, DateRange, DependencyNode, DependencyTreeResult, Granularity,
        PackageMetadata, PackageName,
    };
    pub use crate::stats_analysis::policies::DateRangePolicy;
    pub use crate::stats_analysis::services::{DateRangeChunker, StatsCalculator};
    pub use crate::shared::Result;
}
