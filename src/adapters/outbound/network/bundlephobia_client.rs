use super::http_client::{join_url, HttpClient};
use crate::ports::outbound::BundleSizeRepository;
use crate::shared::Result;
use crate::stats_analysis::domain::BundleSize;
use async_trait::async_trait;
use serde::Deserialize;

pub const DEFAULT_BUNDLEPHOBIA_URL: &str = "https://bundlephobia.com";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SizeResponse {
    size: u64,
    gzip: u64,
    #[serde(default, rename = "hasJSModule")]
    has_js_module: Option<serde_json::Value>,
    #[serde(default, rename = "hasJSNext")]
    has_js_next: Option<serde_json::Value>,
    #[serde(default)]
    has_side_effects: Option<serde_json::Value>,
}

impl From<SizeResponse> for BundleSize {
    fn from(r: SizeResponse) -> Self {
        BundleSize {
            size: r.size,
            gzip: r.gzip,
            has_js_module: is_truthy(r.has_js_module.as_ref()),
            has_js_next: is_truthy(r.has_js_next.as_ref()),
            // Side effects are assumed unless the package declares none
            has_side_effects: !matches!(r.has_side_effects, Some(serde_json::Value::Bool(false))),
        }
    }
}

/// `hasJSModule` is either a boolean or the path of the ES module entry
fn is_truthy(value: Option<&serde_json::Value>) -> bool {
    match value {
        Some(serde_json::Value::Bool(b)) => *b,
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(serde_json::Value::Null) | None => false,
        Some(_) => true,
    }
}

/// BundlephobiaClient adapter for bundle size measurements
pub struct BundlephobiaClient {
    http: HttpClient,
    base_url: String,
}

impl BundlephobiaClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BUNDLEPHOBIA_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new("Bundlephobia")?.with_max_retries(1),
            base_url: base_url.into(),
        })
    }

    fn size_url(&self, package_name: &str) -> String {
        format!(
            "{}?package={}",
            join_url(&self.base_url, "api/size"),
            urlencoding::encode(package_name)
        )
    }
}

#[async_trait]
impl BundleSizeRepository for BundlephobiaClient {
    async fn fetch_bundle_size(&self, package_name: &str) -> Result<Option<BundleSize>> {
        let response: Option<SizeResponse> =
            self.http.get_json(&self.size_url(package_name)).await?;
        Ok(response.map(BundleSize::from))
    }
}
