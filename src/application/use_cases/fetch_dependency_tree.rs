use super::dependency_tree_resolver::DependencyTreeResolver;
use crate::ports::outbound::{PackageRegistry, ProgressReporter};
use crate::shared::error::StatsError;
use crate::shared::Result;
use crate::stats_analysis::domain::{DependencyTreeResult, PackageName};

/// FetchDependencyTreeUseCase - validated entry point around the resolver
///
/// Turns the resolver's "no data" into `StatsError::PackageNotFound`
/// so the CLI can exit with a dedicated code.
pub struct FetchDependencyTreeUseCase<R, P> {
    resolver: DependencyTreeResolver<R>,
    progress_reporter: P,
}

impl<R, P> FetchDependencyTreeUseCase<R, P>
where
    R: PackageRegistry,
    P: ProgressReporter,
{
    pub fn new(registry: R, progress_reporter: P) -> Self {
        Self {
            resolver: DependencyTreeResolver::new(registry),
            progress_reporter,
        }
    }

    pub async fn execute(
        &self,
        package_name: &str,
        max_depth: usize,
    ) -> Result<DependencyTreeResult> {
        let name = PackageName::new(package_name)?;
        if max_depth == 0 {
            return Err(StatsError::Validation {
                message: "Dependency depth must be at least 1".to_string(),
            }
            .into());
        }

        self.progress_reporter.report(&format!(
            "🌳 Resolving dependency tree of {} (depth {})...",
            name, max_depth
        ));

        let tree = self
            .resolver
            .resolve(name.as_str(), max_depth)
            .await
            .ok_or_else(|| StatsError::PackageNotFound {
                name: name.to_string(),
            })?;

        self.progress_reporter.report_completion(&format!(
            "✅ {} package(s) in the tree, {} declared dependencies",
            tree.root().node_count(),
            tree.total_dependencies()
        ));
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{MockRegistry, RecordingReporter};
    use crate::stats_analysis::domain::LatestManifest;
    use std::collections::BTreeMap;

    fn registry() -> MockRegistry {
        let deps: BTreeMap<String, String> =
            [("loose-envify".to_string(), "^1.1.0".to_string())].into();
        MockRegistry::default()
            .with_latest("react", LatestManifest::new("18.3.1", deps))
            .with_latest("loose-envify", LatestManifest::new("1.4.0", BTreeMap::new()))
    }

    #[tokio::test]
    async fn test_execute_reports_tree() {
        let uc = FetchDependencyTreeUseCase::new(registry(), RecordingReporter::default());

        let tree = uc.execute("react", 3).await.unwrap();

        assert_eq!(tree.root().dependencies[0].version, "1.4.0");
        assert!(uc
            .progress_reporter
            .messages()
            .iter()
            .any(|m| m.contains("2 package(s) in the tree")));
    }

    #[tokio::test]
    async fn test_missing_root_is_not_found() {
        let uc = FetchDependencyTreeUseCase::new(registry(), RecordingReporter::default());

        let err = uc.execute("reactt", 3).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<StatsError>(),
            Some(StatsError::PackageNotFound { name }) if name == "reactt"
        ));
    }

    #[tokio::test]
    async fn test_zero_depth_is_rejected() {
        let uc = FetchDependencyTreeUseCase::new(registry(), RecordingReporter::default());
        let err = uc.execute("react", 0).await.unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }
}
