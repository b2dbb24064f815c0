use async_trait::async_trait;
use npm_stats::prelude::*;
use npm_stats::stats_analysis::domain::{LatestManifest, Packument, SearchHit};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock PackageRegistry for testing
///
/// Packages registered with `with_package` answer both manifest and
/// document lookups. Names in `failing` return a transport error.
#[derive(Default, Clone)]
pub struct MockPackageRegistry {
    pub manifests: HashMap<String, LatestManifest>,
    pub packuments: HashMap<String, Packument>,
    pub failing: HashSet<String>,
    pub hits: Vec<SearchHit>,
    pub latest_calls: Arc<AtomicUsize>,
}

impl MockPackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(
        mut self,
        name: &str,
        version: &str,
        dependencies: &[(&str, &str)],
    ) -> Self {
        let dependencies: BTreeMap<String, String> = dependencies
            .iter()
            .map(|(n, r)| (n.to_string(), r.to_string()))
            .collect();
        self.manifests
            .insert(name.to_string(), LatestManifest::new(version, dependencies));
        self
    }

    /// Registers a registry document with publish times per version
    pub fn with_packument(mut self, name: &str, latest: &str, releases: &[(&str, &str)]) -> Self {
        let mut time: BTreeMap<String, String> = releases
            .iter()
            .map(|(v, t)| (v.to_string(), t.to_string()))
            .collect();
        time.insert("modified".to_string(), "2024-10-01T08:00:00.000Z".to_string());

        let document = serde_json::json!({
            "name": name,
            "description": format!("The {} package", name),
            "dist-tags": { "latest": latest },
            "time": time,
            "license": { "type": "MIT" },
            "keywords": ["test"],
            "maintainers": [{ "name": "octocat" }],
            "repository": { "type": "git", "url": format!("https://github.com/example/{}", name) },
        });
        self.packuments
            .insert(name.to_string(), serde_json::from_value(document).unwrap());
        self
    }

    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn with_search_hit(mut self, name: &str, version: &str, description: &str) -> Self {
        self.hits.push(SearchHit {
            name: name.to_string(),
            version: version.to_string(),
            description: Some(description.to_string()),
        });
        self
    }

    pub fn latest_call_count(&self) -> usize {
        self.latest_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PackageRegistry for MockPackageRegistry {
    async fn fetch_latest(&self, package_name: &str) -> Result<Option<LatestManifest>> {
        self.latest_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(package_name) {
            anyhow::bail!("registry unreachable for {}", package_name);
        }
        Ok(self.manifests.get(package_name).cloned())
    }

    async fn fetch_packument(&self, package_name: &str) -> Result<Option<Packument>> {
        if self.failing.contains(package_name) {
            anyhow::bail!("registry unreachable for {}", package_name);
        }
        Ok(self.packuments.get(package_name).cloned())
    }

    async fn search(&self, query: &str, size: usize) -> Result<Vec<SearchHit>> {
        if self.failing.contains(query) {
            anyhow::bail!("search unavailable");
        }
        Ok(self
            .hits
            .iter()
            .filter(|hit| hit.name.contains(query))
            .take(size)
            .cloned()
            .collect())
    }
}
