use super::http_client::{join_url, HttpClient};
use crate::ports::outbound::DownloadStatistics;
use crate::shared::error::StatsError;
use crate::shared::Result;
use crate::stats_analysis::domain::{DailyDownload, DateRange};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;

pub const DEFAULT_DOWNLOADS_URL: &str = "https://api.npmjs.org";

#[derive(Debug, Deserialize)]
struct RangeResponse {
    #[serde(default)]
    downloads: Vec<DailyDownload>,
}

#[derive(Debug, Deserialize)]
struct VersionsResponse {
    #[serde(default)]
    downloads: BTreeMap<String, u64>,
}

/// NpmDownloadsClient adapter for the npm download counts API
///
/// One call covers one window; the API rejects windows longer than
/// about 18 months, which callers avoid by chunking.
pub struct NpmDownloadsClient {
    http: HttpClient,
    base_url: String,
}

impl NpmDownloadsClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_DOWNLOADS_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new("npm downloads")?,
            base_url: base_url.into(),
        })
    }

    fn range_url(&self, package_name: &str, range: &DateRange) -> String {
        join_url(
            &self.base_url,
            &format!("downloads/range/{}/{}", range, urlencoding::encode(package_name)),
        )
    }

    fn versions_url(&self, package_name: &str) -> String {
        join_url(
            &self.base_url,
            &format!("versions/{}/last-week", urlencoding::encode(package_name)),
        )
    }
}

#[async_trait]
impl DownloadStatistics for NpmDownloadsClient {
    async fn fetch_range(
        &self,
        package_name: &str,
        range: &DateRange,
    ) -> Result<Vec<DailyDownload>> {
        let response: Option<RangeResponse> =
            self.http.get_json(&self.range_url(package_name, range)).await?;

        match response {
            Some(body) => Ok(body.downloads),
            None => Err(StatsError::PackageNotFound {
                name: package_name.to_string(),
            }
            .into()),
        }
    }

    async fn fetch_version_downloads(&self, package_name: &str) -> Result<BTreeMap<String, u64>> {
        let response: Option<VersionsResponse> =
            self.http.get_json(&self.versions_url(package_name)).await?;

        Ok(response.map(|body| body.downloads).unwrap_or_default())
    }
}
