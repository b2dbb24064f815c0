use crate::shared::Result;
use crate::stats_analysis::domain::NpmsScore;
use async_trait::async_trait;

/// ScoreRepository port for package quality scores (npms.io)
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    async fn fetch_score(&self, package_name: &str) -> Result<Option<NpmsScore>>;
}
