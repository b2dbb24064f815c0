use super::http_client::{join_url, HttpClient};
use crate::ports::outbound::PackageRegistry;
use crate::shared::Result;
use crate::stats_analysis::domain::{LatestManifest, Packument, SearchHit};
use async_trait::async_trait;
use serde::Deserialize;

pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    objects: Vec<SearchObject>,
}

#[derive(Debug, Deserialize)]
struct SearchObject {
    package: SearchPackage,
}

#[derive(Debug, Deserialize)]
struct SearchPackage {
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    description: Option<String>,
}

impl From<SearchObject> for SearchHit {
    fn from(object: SearchObject) -> Self {
        SearchHit {
            name: object.package.name,
            version: object.package.version,
            description: object.package.description,
        }
    }
}

/// NpmRegistryClient adapter for the npm registry HTTP API
///
/// Implements the PackageRegistry port. Package names are percent-encoded
/// as a single path segment, so `@babel/core` becomes `%40babel%2Fcore`.
pub struct NpmRegistryClient {
    http: HttpClient,
    base_url: String,
}

impl NpmRegistryClient {
    /// Creates a client for the public registry
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_REGISTRY_URL)
    }

    /// Creates a client for a registry mirror
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new("npm registry")?,
            base_url: base_url.into(),
        })
    }

    fn package_url(&self, package_name: &str) -> String {
        join_url(&self.base_url, &urlencoding::encode(package_name))
    }

    fn search_url(&self, query: &str, size: usize) -> String {
        format!(
            "{}?text={}&size={}",
            join_url(&self.base_url, "-/v1/search"),
            urlencoding::encode(query),
            size
        )
    }
}

#[async_trait]
impl PackageRegistry for NpmRegistryClient {
    async fn fetch_latest(&self, package_name: &str) -> Result<Option<LatestManifest>> {
        let url = format!("{}/latest", self.package_url(package_name));
        self.http.get_json(&url).await
    }

    async fn fetch_packument(&self, package_name: &str) -> Result<Option<Packument>> {
        self.http.get_json(&self.package_url(package_name)).await
    }

    async fn search(&self, query: &str, size: usize) -> Result<Vec<SearchHit>> {
        let response: Option<SearchResponse> =
            self.http.get_json(&self.search_url(query, size)).await?;

        Ok(response
            .map(|r| r.objects.into_iter().map(SearchHit::from).collect())
            .unwrap_or_default())
    }

    async fn package_exists(&self, package_name: &str) -> Result<bool> {
        self.http.exists(&self.package_url(package_name)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(NpmRegistryClient::new().is_ok());
    }

    #[test]
    fn test_package_url_encodes_scoped_names() {
        let client = NpmRegistryClient::new().unwrap();
        assert_eq!(
            client.package_url("@babel/core"),
            "https://registry.npmjs.org/%40babel%2Fcore"
        );
        assert_eq!(client.package_url("react"), "https://registry.npmjs.org/react");
    }

    #[test]
    fn test_mirror_base_url() {
        let client = NpmRegistryClient::with_base_url("http://localhost:4873/").unwrap();
        assert_eq!(client.package_url("react"), "http://localhost:4873/react");
    }

    #[test]
    fn test_search_url() {
        let client = NpmRegistryClient::new().unwrap();
        assert_eq!(
            client.search_url("date picker", 8),
            "https://registry.npmjs.org/-/v1/search?text=date%20picker&size=8"
        );
    }

    #[test]
    fn test_search_response_mapping() {
        let json = r#"{"objects":[{"package":{"name":"react","version":"18.3.1","description":"UI"}}],"total":1}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let hits: Vec<SearchHit> = response.objects.into_iter().map(SearchHit::from).collect();
        assert_eq!(hits[0].name, "react");
        assert_eq!(hits[0].version, "18.3.1");
        assert_eq!(hits[0].description.as_deref(), Some("UI"));
    }
}
