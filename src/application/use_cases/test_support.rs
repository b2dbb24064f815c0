//! In-memory port implementations shared by the use case tests

use crate::ports::outbound::{
    BundleSizeRepository, DownloadStatistics, PackageRegistry, ProgressReporter, RepositoryHost,
    ScoreRepository,
};
use crate::shared::error::StatsError;
use crate::shared::Result;
use crate::stats_analysis::domain::{
    BundleSize, DailyDownload, DateRange, GitHubData, GitHubRepo, LatestManifest, NpmsScore,
    Packument, SearchHit,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Builds a registry document with a `latest` tag and publish times
pub fn packument(name: &str, latest: &str, releases: &[(&str, &str)]) -> Packument {
    let mut time: BTreeMap<String, String> = releases
        .iter()
        .map(|(v, t)| (v.to_string(), t.to_string()))
        .collect();
    time.insert("created".to_string(), "2011-10-26T17:46:21.942Z".to_string());
    time.insert("modified".to_string(), "2024-11-20T10:00:00.000Z".to_string());

    let json = serde_json::json!({
        "name": name,
        "description": format!("{} description", name),
        "dist-tags": { "latest": latest },
        "time": time,
        "license": "MIT",
        "repository": { "type": "git", "url": format!("git+https://github.com/acme/{}.git", name) },
    });
    serde_json::from_value(json).unwrap()
}

#[derive(Default)]
pub struct MockRegistry {
    latest: HashMap<String, LatestManifest>,
    packuments: HashMap<String, Packument>,
    hits: Vec<SearchHit>,
    failing_search: bool,
    existing: HashSet<String>,
}

impl MockRegistry {
    pub fn with_latest(mut self, name: &str, manifest: LatestManifest) -> Self {
        self.latest.insert(name.to_string(), manifest);
        self
    }

    pub fn with_packument(mut self, packument: Packument) -> Self {
        self.packuments.insert(packument.name.clone(), packument);
        self
    }

    pub fn with_existing(mut self, name: &str) -> Self {
        self.existing.insert(name.to_string());
        self
    }

    pub fn with_hits(mut self, hits: &[(&str, &str)]) -> Self {
        self.hits = hits
            .iter()
            .map(|(name, version)| SearchHit {
                name: name.to_string(),
                version: version.to_string(),
                description: None,
            })
            .collect();
        self
    }

    pub fn with_failing_search(mut self) -> Self {
        self.failing_search = true;
        self
    }
}

#[async_trait]
impl PackageRegistry for MockRegistry {
    async fn fetch_latest(&self, package_name: &str) -> Result<Option<LatestManifest>> {
        Ok(self.latest.get(package_name).cloned())
    }

    async fn fetch_packument(&self, package_name: &str) -> Result<Option<Packument>> {
        Ok(self.packuments.get(package_name).cloned())
    }

    async fn search(&self, _query: &str, size: usize) -> Result<Vec<SearchHit>> {
        if self.failing_search {
            anyhow::bail!("search backend unavailable");
        }
        Ok(self.hits.iter().take(size).cloned().collect())
    }

    async fn package_exists(&self, package_name: &str) -> Result<bool> {
        Ok(self.existing.contains(package_name) || self.packuments.contains_key(package_name))
    }
}

/// Serves the same count for every day of every known package
#[derive(Default)]
pub struct MockDownloads {
    daily: HashMap<String, u64>,
    versions: HashMap<String, BTreeMap<String, u64>>,
    failing_versions: bool,
    requested: Mutex<Vec<DateRange>>,
}

impl MockDownloads {
    pub fn with_constant(mut self, name: &str, per_day: u64) -> Self {
        self.daily.insert(name.to_string(), per_day);
        self
    }

    pub fn with_versions(mut self, name: &str, versions: &[(&str, u64)]) -> Self {
        self.versions.insert(
            name.to_string(),
            versions.iter().map(|(v, d)| (v.to_string(), *d)).collect(),
        );
        self
    }

    pub fn with_failing_versions(mut self) -> Self {
        self.failing_versions = true;
        self
    }

    pub fn requested_ranges(&self) -> Vec<DateRange> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl DownloadStatistics for MockDownloads {
    async fn fetch_range(
        &self,
        package_name: &str,
        range: &DateRange,
    ) -> Result<Vec<DailyDownload>> {
        self.requested.lock().unwrap().push(*range);
        let per_day = self
            .daily
            .get(package_name)
            .ok_or_else(|| StatsError::PackageNotFound {
                name: package_name.to_string(),
            })?;
        Ok(range
            .start()
            .iter_days()
            .take_while(|day| *day <= range.end())
            .map(|day| DailyDownload::new(day, *per_day))
            .collect())
    }

    async fn fetch_version_downloads(&self, package_name: &str) -> Result<BTreeMap<String, u64>> {
        if self.failing_versions {
            anyhow::bail!("versions endpoint returned 503");
        }
        Ok(self.versions.get(package_name).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub struct MockScores {
    pub score: Option<NpmsScore>,
    pub fail: bool,
}

#[async_trait]
impl ScoreRepository for MockScores {
    async fn fetch_score(&self, _package_name: &str) -> Result<Option<NpmsScore>> {
        if self.fail {
            anyhow::bail!("npms.io timed out");
        }
        Ok(self.score)
    }
}

#[derive(Default)]
pub struct MockBundles {
    pub size: Option<BundleSize>,
    pub fail: bool,
}

#[async_trait]
impl BundleSizeRepository for MockBundles {
    async fn fetch_bundle_size(&self, _package_name: &str) -> Result<Option<BundleSize>> {
        if self.fail {
            anyhow::bail!("bundlephobia build failed");
        }
        Ok(self.size)
    }
}

#[derive(Default)]
pub struct MockRepositoryHost {
    pub data: Option<GitHubData>,
    pub requested: Mutex<Vec<GitHubRepo>>,
}

#[async_trait]
impl RepositoryHost for MockRepositoryHost {
    async fn fetch_repository(&self, repo: &GitHubRepo) -> Result<Option<GitHubData>> {
        self.requested.lock().unwrap().push(repo.clone());
        Ok(self.data.clone())
    }
}

/// Keeps every message for later assertions
#[derive(Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
