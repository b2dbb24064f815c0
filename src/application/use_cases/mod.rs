/// Use cases module containing application business logic orchestration
mod compare_packages;
mod dependency_tree_resolver;
mod fetch_dependency_tree;
mod fetch_package_metadata;
mod fetch_package_stats;
mod search_packages;

#[cfg(test)]
mod test_support;

pub use compare_packages::ComparePackagesUseCase;
pub use dependency_tree_resolver::{DependencyTreeResolver, DEFAULT_MAX_DEPTH};
pub use fetch_dependency_tree::FetchDependencyTreeUseCase;
pub use fetch_package_metadata::FetchPackageMetadataUseCase;
pub use fetch_package_stats::FetchPackageStatsUseCase;
pub use search_packages::SearchPackagesUseCase;
