use super::http_client::{join_url, HttpClient};
use crate::ports::outbound::ScoreRepository;
use crate::shared::Result;
use crate::stats_analysis::domain::NpmsScore;
use async_trait::async_trait;
use serde::Deserialize;

pub const DEFAULT_NPMS_URL: &str = "https://api.npms.io/v2";

#[derive(Debug, Deserialize)]
struct PackageResponse {
    score: ScoreResponse,
}

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    #[serde(rename = "final")]
    overall: f64,
    detail: ScoreDetail,
}

#[derive(Debug, Deserialize)]
struct ScoreDetail {
    quality: f64,
    popularity: f64,
    maintenance: f64,
}

impl From<PackageResponse> for NpmsScore {
    fn from(r: PackageResponse) -> Self {
        NpmsScore::from_fractions(
            r.score.overall,
            r.score.detail.quality,
            r.score.detail.popularity,
            r.score.detail.maintenance,
        )
    }
}

/// NpmsClient adapter for npms.io package scores
pub struct NpmsClient {
    http: HttpClient,
    base_url: String,
}

impl NpmsClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_NPMS_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new("npms.io")?,
            base_url: base_url.into(),
        })
    }

    fn package_url(&self, package_name: &str) -> String {
        join_url(
            &self.base_url,
            &format!("package/{}", urlencoding::encode(package_name)),
        )
    }
}

#[async_trait]
impl ScoreRepository for NpmsClient {
    async fn fetch_score(&self, package_name: &str) -> Result<Option<NpmsScore>> {
        let response: Option<PackageResponse> =
            self.http.get_json(&self.package_url(package_name)).await?;
        Ok(response.map(NpmsScore::from))
    }
}
