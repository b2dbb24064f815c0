use crate::stats_analysis::domain::{GitHubRepo, RepositoryField};

const GITHUB_HOST: &str = "github.com";

/// GitHubRepoParser service for locating a package's GitHub repository
pub struct GitHubRepoParser;

impl GitHubRepoParser {
    /// Extracts owner and repository name from a package's `repository` field
    ///
    /// Only `git` repositories are considered. Accepts the usual URL shapes,
    /// e.g. `git+https://github.com/o/r.git` and `git@github.com:o/r.git`.
    pub fn parse(repository: &RepositoryField) -> Option<GitHubRepo> {
        if repository.kind() != Some("git") {
            return None;
        }
        Self::parse_url(repository.url())
    }

    pub fn parse_url(url: &str) -> Option<GitHubRepo> {
        let host_at = url.to_ascii_lowercase().find(GITHUB_HOST)?;
        let rest = &url[host_at + GITHUB_HOST.len()..];
        let rest = rest.strip_prefix('/').or_else(|| rest.strip_prefix(':'))?;

        let (owner, tail) = rest.split_once('/')?;
        // Repository names end at the first '.' or '/', which also drops ".git"
        let repo: String = tail.chars().take_while(|c| *c != '.' && *c != '/').collect();

        if owner.is_empty() || repo.is_empty() {
            return None;
        }
        Some(GitHubRepo::new(owner, repo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git(url: &str) -> RepositoryField {
        RepositoryField::Detailed {
            kind: Some("git".to_string()),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_parse_https_url() {
        let repo =
            GitHubRepoParser::parse(&git("git+https://github.com/facebook/react.git")).unwrap();
        assert_eq!(repo, GitHubRepo::new("facebook", "react"));
    }

    #[test]
    fn test_parse_ssh_url() {
        let repo = GitHubRepoParser::parse(&git("git@github.com:vuejs/core.git")).unwrap();
        assert_eq!(repo, GitHubRepo::new("vuejs", "core"));
    }

    #[test]
    fn test_parse_monorepo_subdirectory() {
        let url = git("https://github.com/babel/babel/tree/main/packages");
        let repo = GitHubRepoParser::parse(&url).unwrap();
        assert_eq!(repo, GitHubRepo::new("babel", "babel"));
    }

    #[test]
    fn test_parse_is_case_insensitive_on_host() {
        let repo = GitHubRepoParser::parse(&git("https://GitHub.com/Owner/Repo")).unwrap();
        assert_eq!(repo, GitHubRepo::new("Owner", "Repo"));
    }

    #[test]
    fn test_non_git_repository_is_ignored() {
        let svn = RepositoryField::Detailed {
            kind: Some("svn".to_string()),
            url: "https://github.com/a/b".to_string(),
        };
        assert!(GitHubRepoParser::parse(&svn).is_none());
        assert!(GitHubRepoParser::parse(&RepositoryField::Url("github:a/b".to_string())).is_none());
    }

    #[test]
    fn test_non_github_url() {
        assert!(GitHubRepoParser::parse(&git("https://gitlab.com/a/b.git")).is_none());
        assert!(GitHubRepoParser::parse(&git("https://github.com/only-owner")).is_none());
    }
}
