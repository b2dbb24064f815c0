use crate::shared::Result;
use crate::stats_analysis::domain::{GitHubData, GitHubRepo};
use async_trait::async_trait;

/// RepositoryHost port for source repository statistics (GitHub)
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Fetches stars, forks, issues and top contributors of a repository
    ///
    /// # Returns
    /// `None` when the repository cannot be read. A failed contributor
    /// lookup yields an empty contributor list rather than an error.
    async fn fetch_repository(&self, repo: &GitHubRepo) -> Result<Option<GitHubData>>;
}
