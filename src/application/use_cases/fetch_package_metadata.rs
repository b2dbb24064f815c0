use crate::ports::outbound::{
    BundleSizeRepository, PackageRegistry, ProgressReporter, RepositoryHost, ScoreRepository,
};
use crate::shared::error::StatsError;
use crate::shared::Result;
use crate::stats_analysis::domain::{
    BundleSize, GitHubData, NpmsScore, PackageMetadata, PackageName, Packument,
};
use crate::stats_analysis::services::{GitHubRepoParser, ReleaseAnalyzer};

/// FetchPackageMetadataUseCase - quality signals around a package
///
/// Collects the npms.io score, Bundlephobia size, TypeScript support and
/// the registry document concurrently, then derives the release cadence
/// and fetches GitHub data when the package declares a GitHub repository.
/// Only the registry document is required; every other source degrades to
/// "unknown" with a warning.
///
/// # Type Parameters
/// * `R` - PackageRegistry implementation
/// * `S` - ScoreRepository implementation
/// * `B` - BundleSizeRepository implementation
/// * `H` - RepositoryHost implementation
/// * `P` - ProgressReporter implementation
pub struct FetchPackageMetadataUseCase<R, S, B, H, P> {
    registry: R,
    scores: S,
    bundles: B,
    repository_host: H,
    progress_reporter: P,
}

impl<R, S, B, H, P> FetchPackageMetadataUseCase<R, S, B, H, P>
where
    R: PackageRegistry,
    S: ScoreRepository,
    B: BundleSizeRepository,
    H: RepositoryHost,
    P: ProgressReporter,
{
    pub fn new(
        registry: R,
        scores: S,
        bundles: B,
        repository_host: H,
        progress_reporter: P,
    ) -> Self {
        Self {
            registry,
            scores,
            bundles,
            repository_host,
            progress_reporter,
        }
    }

    /// Executes the metadata use case
    ///
    /// # Errors
    /// `StatsError::PackageNotFound` when the registry does not know the package;
    /// registry transport errors are propagated.
    pub async fn execute(&self, package_name: &str) -> Result<PackageMetadata> {
        let name = PackageName::new(package_name)?;
        self.progress_reporter
            .report(&format!("🔎 Collecting metadata for {}...", name));

        let (npms_score, bundle_size, has_typescript, packument) = tokio::join!(
            self.fetch_score(&name),
            self.fetch_bundle_size(&name),
            self.check_typescript_support(&name),
            self.registry.fetch_packument(name.as_str()),
        );

        let packument = packument?.ok_or_else(|| StatsError::PackageNotFound {
            name: name.to_string(),
        })?;

        let github = self.fetch_github_data(&packument).await;
        let metadata =
            Self::build_metadata(packument, npms_score, bundle_size, has_typescript, github);

        self.progress_reporter
            .report_completion(&format!("✅ Metadata collected for {}", name));
        Ok(metadata)
    }

    /// Whether the package ships type declarations
    ///
    /// True when the latest manifest declares `types`/`typings`, or when the
    /// matching `@types/` package is published. Lookup failures count as false.
    pub async fn check_typescript_support(&self, name: &PackageName) -> bool {
        if let Ok(Some(manifest)) = self.registry.fetch_latest(name.as_str()).await {
            if manifest.declares_types() {
                return true;
            }
        }

        self.registry
            .package_exists(&name.types_package_name())
            .await
            .unwrap_or(false)
    }

    async fn fetch_score(&self, name: &PackageName) -> Option<NpmsScore> {
        self.scores
            .fetch_score(name.as_str())
            .await
            .unwrap_or_else(|e| {
                self.warn("npms.io score", name, &e);
                None
            })
    }

    async fn fetch_bundle_size(&self, name: &PackageName) -> Option<BundleSize> {
        self.bundles
            .fetch_bundle_size(name.as_str())
            .await
            .unwrap_or_else(|e| {
                self.warn("Bundle size", name, &e);
                None
            })
    }

    async fn fetch_github_data(&self, packument: &Packument) -> Option<GitHubData> {
        let repo = packument.repository.as_ref().and_then(GitHubRepoParser::parse)?;

        self.repository_host
            .fetch_repository(&repo)
            .await
            .unwrap_or_else(|e| {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: GitHub data of {} unavailable: {}",
                    repo, e
                ));
                None
            })
    }

    fn warn(&self, source: &str, name: &PackageName, error: &anyhow::Error) {
        self.progress_reporter.report_error(&format!(
            "⚠️  Warning: {} of {} unavailable: {}",
            source, name, error
        ));
    }

    fn build_metadata(
        packument: Packument,
        npms_score: Option<NpmsScore>,
        bundle_size: Option<BundleSize>,
        has_typescript: bool,
        github: Option<GitHubData>,
    ) -> PackageMetadata {
        let release_cadence = ReleaseAnalyzer::calculate_release_cadence(&packument);
        let latest_version = packument.latest_version().map(str::to_string);
        let license = packument.license_name();

        PackageMetadata {
            name: packument.name,
            description: packument.description,
            latest_version,
            license,
            homepage: packument.homepage,
            keywords: packument.keywords,
            maintainers: packument.maintainers,
            repository: packument.repository,
            npms_score,
            bundle_size,
            has_typescript,
            release_cadence,
            github,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{
        packument, MockBundles, MockRegistry, MockRepositoryHost, MockScores, RecordingReporter,
    };
    use crate::stats_analysis::domain::LatestManifest;
    use std::collections::BTreeMap;

    type UseCase = FetchPackageMetadataUseCase<
        MockRegistry,
        MockScores,
        MockBundles,
        MockRepositoryHost,
        RecordingReporter,
    >;

    fn use_case(registry: MockRegistry, scores: MockScores, bundles: MockBundles) -> UseCase {
        let host = MockRepositoryHost {
            data: Some(GitHubData {
                stars: 1200,
                forks: 80,
                open_issues: 4,
                watchers: 1200,
                license: Some("MIT".to_string()),
                default_branch: "main".to_string(),
                description: None,
                homepage: None,
                contributors: vec![],
            }),
            ..Default::default()
        };
        FetchPackageMetadataUseCase::new(
            registry,
            scores,
            bundles,
            host,
            RecordingReporter::default(),
        )
    }

    fn zod() -> Packument {
        packument(
            "zod",
            "3.23.8",
            &[
                ("3.22.0", "2023-08-01T00:00:00.000Z"),
                ("3.23.0", "2024-04-21T00:00:00.000Z"),
                ("3.23.8", "2024-05-08T00:00:00.000Z"),
            ],
        )
    }

    #[tokio::test]
    async fn test_execute_collects_every_source() {
        let mut manifest = LatestManifest::new("3.23.8", BTreeMap::new());
        manifest.types = Some(serde_json::json!("index.d.ts"));
        let registry = MockRegistry::default()
            .with_packument(zod())
            .with_latest("zod", manifest);
        let scores = MockScores {
            score: Some(NpmsScore::from_fractions(0.9, 0.8, 0.7, 1.0)),
            fail: false,
        };
        let bundles = MockBundles {
            size: Some(BundleSize {
                size: 57_000,
                gzip: 13_000,
                has_js_module: true,
                has_js_next: false,
                has_side_effects: false,
            }),
            fail: false,
        };
        let uc = use_case(registry, scores, bundles);

        let metadata = uc.execute("zod").await.unwrap();

        assert_eq!(metadata.name, "zod");
        assert_eq!(metadata.latest_version.as_deref(), Some("3.23.8"));
        assert_eq!(metadata.license.as_deref(), Some("MIT"));
        assert!(metadata.has_typescript);
        assert_eq!(metadata.npms_score.unwrap().overall, 90);
        assert_eq!(metadata.bundle_size.unwrap().gzip, 13_000);
        let cadence = metadata.release_cadence.unwrap();
        assert_eq!(cadence.total_releases, 3);
        assert_eq!(metadata.github.unwrap().stars, 1200);
        let requested = uc.repository_host.requested.lock().unwrap();
        assert_eq!(requested[0].owner, "acme");
        assert_eq!(requested[0].repo, "zod");
    }

    #[tokio::test]
    async fn test_optional_sources_degrade_with_warnings() {
        let registry = MockRegistry::default().with_packument(zod());
        let uc = use_case(
            registry,
            MockScores { score: None, fail: true },
            MockBundles { size: None, fail: true },
        );

        let metadata = uc.execute("zod").await.unwrap();

        assert!(metadata.npms_score.is_none());
        assert!(metadata.bundle_size.is_none());
        assert!(!metadata.has_typescript);
        assert_eq!(uc.progress_reporter.errors().len(), 2);
    }

    #[tokio::test]
    async fn test_typescript_support_from_definitely_typed() {
        let registry = MockRegistry::default()
            .with_packument(zod())
            .with_latest("zod", LatestManifest::new("3.23.8", BTreeMap::new()))
            .with_existing("@types/zod");
        let uc = use_case(registry, MockScores::default(), MockBundles::default());

        let name = PackageName::new("zod").unwrap();
        assert!(uc.check_typescript_support(&name).await);
    }

    #[tokio::test]
    async fn test_scoped_typescript_lookup_uses_double_underscore() {
        let registry = MockRegistry::default().with_existing("@types/babel__core");
        let uc = use_case(registry, MockScores::default(), MockBundles::default());

        let name = PackageName::new("@babel/core").unwrap();
        assert!(uc.check_typescript_support(&name).await);
    }

    #[tokio::test]
    async fn test_unknown_package_is_not_found() {
        let uc = use_case(MockRegistry::default(), MockScores::default(), MockBundles::default());

        let err = uc.execute("not-a-real-package").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<StatsError>(),
            Some(StatsError::PackageNotFound { .. })
        ));
    }
}
