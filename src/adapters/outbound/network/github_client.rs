use super::http_client::{join_url, HttpClient};
use crate::ports::outbound::RepositoryHost;
use crate::shared::Result;
use crate::stats_analysis::domain::{Contributor, GitHubData, GitHubRepo};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Deserialize;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Number of top contributors requested per repository
const CONTRIBUTOR_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
struct RepoResponse {
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    #[serde(default)]
    open_issues_count: u64,
    #[serde(default)]
    watchers_count: u64,
    #[serde(default)]
    license: Option<LicenseResponse>,
    #[serde(default)]
    default_branch: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    homepage: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LicenseResponse {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContributorResponse {
    login: String,
    #[serde(default)]
    avatar_url: String,
    #[serde(default)]
    contributions: u64,
    #[serde(default)]
    html_url: String,
}

impl RepoResponse {
    fn into_data(self, contributors: Vec<Contributor>) -> GitHubData {
        GitHubData {
            stars: self.stargazers_count,
            forks: self.forks_count,
            open_issues: self.open_issues_count,
            watchers: self.watchers_count,
            license: self.license.and_then(|l| l.name),
            default_branch: self
                .default_branch
                .filter(|b| !b.is_empty())
                .unwrap_or_else(|| "main".to_string()),
            description: self.description.filter(|d| !d.is_empty()),
            homepage: self.homepage.filter(|h| !h.is_empty()),
            contributors,
        }
    }
}

impl From<ContributorResponse> for Contributor {
    fn from(c: ContributorResponse) -> Self {
        Contributor {
            login: c.login,
            avatar_url: c.avatar_url,
            contributions: c.contributions,
            html_url: c.html_url,
        }
    }
}

/// GitHubClient adapter for the GitHub REST API
///
/// Unauthenticated requests are rate limited to 60 per hour; a token
/// raises that limit.
pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::with_base_url(DEFAULT_GITHUB_API_URL, token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));

        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .context("GitHub token contains characters that cannot be sent in a header")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(Self {
            http: HttpClient::with_headers("GitHub", headers)?,
            base_url: base_url.into(),
        })
    }

    fn repo_url(&self, repo: &GitHubRepo) -> String {
        join_url(
            &self.base_url,
            &format!(
                "repos/{}/{}",
                urlencoding::encode(&repo.owner),
                urlencoding::encode(&repo.repo)
            ),
        )
    }
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    async fn fetch_repository(&self, repo: &GitHubRepo) -> Result<Option<GitHubData>> {
        let repo_url = self.repo_url(repo);
        let contributors_url = format!("{}/contributors?per_page={}", repo_url, CONTRIBUTOR_LIMIT);

        let (repo_response, contributors_response) = futures::future::join(
            self.http.get_json::<RepoResponse>(&repo_url),
            self.http.get_json::<Vec<ContributorResponse>>(&contributors_url),
        )
        .await;

        let Some(repo_data) = repo_response? else {
            return Ok(None);
        };

        let contributors = contributors_response
            .ok()
            .flatten()
            .unwrap_or_default()
            .into_iter()
            .take(CONTRIBUTOR_LIMIT)
            .map(Contributor::from)
            .collect();

        Ok(Some(repo_data.into_data(contributors)))
    }
}
