use super::package_document::{Maintainer, RepositoryField};
use super::release::ReleaseCadence;
use serde::Serialize;

/// npms.io quality scores, scaled to whole percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NpmsScore {
    pub overall: u8,
    pub quality: u8,
    pub popularity: u8,
    pub maintenance: u8,
}

impl NpmsScore {
    /// Builds a score from the API's 0-1 fractions
    pub fn from_fractions(overall: f64, quality: f64, popularity: f64, maintenance: f64) -> Self {
        Self {
            overall: to_percent(overall),
            quality: to_percent(quality),
            popularity: to_percent(popularity),
            maintenance: to_percent(maintenance),
        }
    }
}

fn to_percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Bundle size of the latest version as reported by Bundlephobia
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleSize {
    /// Minified size in bytes
    pub size: u64,
    /// Minified + gzipped size in bytes
    pub gzip: u64,
    pub has_js_module: bool,
    pub has_js_next: bool,
    pub has_side_effects: bool,
}

/// A GitHub repository reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
}

impl GitHubRepo {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }
}

impl std::fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub login: String,
    pub avatar_url: String,
    pub contributions: u64,
    pub html_url: String,
}

/// Repository statistics from the GitHub API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubData {
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub watchers: u64,
    pub license: Option<String>,
    pub default_branch: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub contributors: Vec<Contributor>,
}

/// Everything known about a package besides its downloads
///
/// Every part is optional: each upstream source may be down or may not
/// know the package.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageMetadata {
    pub name: String,
    pub description: Option<String>,
    pub latest_version: Option<String>,
    pub license: Option<String>,
    pub homepage: Option<String>,
    pub keywords: Vec<String>,
    pub maintainers: Vec<Maintainer>,
    pub repository: Option<RepositoryField>,
    pub npms_score: Option<NpmsScore>,
    pub bundle_size: Option<BundleSize>,
    pub has_typescript: bool,
    pub release_cadence: Option<ReleaseCadence>,
    pub github: Option<GitHubData>,
}
