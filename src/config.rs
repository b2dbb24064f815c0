//! Configuration file support for npm-stats.
//!
//! Provides YAML-based configuration through `npm-stats.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::shared::error::StatsError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "npm-stats.config.yml";

/// Environment variable consulted when the file sets no GitHub token
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub max_depth: Option<usize>,
    pub top_versions: Option<usize>,
    pub cache_ttl_secs: Option<u64>,
    pub registry_url: Option<String>,
    pub downloads_url: Option<String>,
    pub github_api_url: Option<String>,
    pub bundlephobia_url: Option<String>,
    pub npms_url: Option<String>,
    pub github_token: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Output format from the file; validated on load
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }

    /// GitHub token from the file, falling back to `GITHUB_TOKEN`
    pub fn resolve_github_token(&self) -> Option<String> {
        self.github_token
            .clone()
            .or_else(|| std::env::var(GITHUB_TOKEN_ENV).ok())
            .filter(|token| !token.trim().is_empty())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            return Err(config_error(e, "Use format: json or format: markdown."));
        }
    }

    if config.max_depth == Some(0) {
        return Err(config_error(
            "max_depth must be at least 1".to_string(),
            "The root package is depth 1, e.g. max_depth: 3.",
        ));
    }

    if config.top_versions == Some(0) {
        return Err(config_error(
            "top_versions must be at least 1".to_string(),
            "Remove the field to list the 10 most downloaded versions.",
        ));
    }

    let urls = [
        ("registry_url", &config.registry_url),
        ("downloads_url", &config.downloads_url),
        ("github_api_url", &config.github_api_url),
        ("bundlephobia_url", &config.bundlephobia_url),
        ("npms_url", &config.npms_url),
    ];
    for (field, value) in urls {
        let Some(url) = value else { continue };
        if url.trim().is_empty() {
            return Err(config_error(
                format!("{} must not be empty", field),
                "Remove the field to use the public endpoint.",
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(config_error(
                format!("{} must be an http(s) URL, got '{}'", field, url),
                "Mirrors are addressed by their base URL, e.g. https://registry.npmmirror.com.",
            ));
        }
    }
    Ok(())
}

fn config_error(message: String, hint: &str) -> anyhow::Error {
    StatsError::ConfigError {
        message,
        hint: hint.to_string(),
    }
    .into()
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        (dir, config_path)
    }

    #[test]
    fn test_load_valid_config() {
        let (_dir, config_path) = write_config(
            r#"
format: markdown
max_depth: 2
top_versions: 5
cache_ttl_secs: 600
registry_url: https://registry.npmmirror.com
github_token: ghp_example
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Markdown));
        assert_eq!(config.max_depth, Some(2));
        assert_eq!(config.top_versions, Some(5));
        assert_eq!(config.cache_ttl_secs, Some(600));
        assert_eq!(
            config.registry_url.as_deref(),
            Some("https://registry.npmmirror.com")
        );
        assert_eq!(config.resolve_github_token().as_deref(), Some("ghp_example"));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let (_dir, config_path) = write_config("invalid: yaml: [[[broken");
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_max_depth_validation_error() {
        let (_dir, config_path) = write_config("max_depth: 0\n");
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("max_depth must be at least 1"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let (_dir, config_path) = write_config("format: xml\n");
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Invalid format: xml"));
    }

    #[test]
    fn test_empty_url_validation_error() {
        let (_dir, config_path) = write_config("downloads_url: \"  \"\n");
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("downloads_url must not be empty"));
    }

    #[test]
    fn test_non_http_url_validation_error() {
        let (_dir, config_path) = write_config("npms_url: ftp://example.com\n");
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("npms_url must be an http(s) URL"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let (_dir, config_path) = write_config(
            r#"
format: json
check_cve: true
another_unknown: value
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("check_cve"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.format.is_none());
        assert!(config.max_depth.is_none());
        assert!(config.output_format().is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
