use async_trait::async_trait;
use npm_stats::prelude::*;
use npm_stats::stats_analysis::domain::{BundleSize, GitHubData, GitHubRepo, NpmsScore};

/// Mock ScoreRepository for testing
#[derive(Default)]
pub struct MockScoreRepository {
    pub score: Option<NpmsScore>,
    pub should_fail: bool,
}

#[async_trait]
impl ScoreRepository for MockScoreRepository {
    async fn fetch_score(&self, _package_name: &str) -> Result<Option<NpmsScore>> {
        if self.should_fail {
            anyhow::bail!("npms.io request timed out");
        }
        Ok(self.score)
    }
}

/// Mock BundleSizeRepository for testing
#[derive(Default)]
pub struct MockBundleSizeRepository {
    pub size: Option<BundleSize>,
    pub should_fail: bool,
}

#[async_trait]
impl BundleSizeRepository for MockBundleSizeRepository {
    async fn fetch_bundle_size(&self, _package_name: &str) -> Result<Option<BundleSize>> {
        if self.should_fail {
            anyhow::bail!("Bundlephobia could not build the package");
        }
        Ok(self.size)
    }
}

/// Mock RepositoryHost for testing
#[derive(Default)]
pub struct MockRepositoryHost {
    pub data: Option<GitHubData>,
}

#[async_trait]
impl RepositoryHost for MockRepositoryHost {
    async fn fetch_repository(&self, _repo: &GitHubRepo) -> Result<Option<GitHubData>> {
        Ok(self.data.clone())
    }
}
