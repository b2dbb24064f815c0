use crate::shared::error::StatsError;
use crate::shared::Result;
use serde::Serialize;

/// Maximum length for npm package names, as enforced by the registry
const MAX_PACKAGE_NAME_LENGTH: usize = 214;

/// NewType wrapper for an npm package name with validation
///
/// Accepts plain names (`react`) and scoped names (`@types/node`).
/// Uppercase letters are tolerated because the registry still serves
/// legacy packages such as `JSONStream`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(invalid(&name, "Package name is required"));
        }

        if trimmed.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(invalid(
                trimmed,
                &format!(
                    "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                    trimmed.len(),
                    MAX_PACKAGE_NAME_LENGTH
                ),
            ));
        }

        let (scope, bare) = match trimmed.strip_prefix('@') {
            Some(rest) => match rest.split_once('/') {
                Some((scope, bare)) => (Some(scope), bare),
                None => {
                    return Err(invalid(
                        trimmed,
                        "Scoped package names must look like @scope/name",
                    ))
                }
            },
            None => (None, trimmed),
        };

        if let Some(scope) = scope {
            validate_segment(trimmed, scope, "scope")?;
        }
        validate_segment(trimmed, bare, "name")?;

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_scoped(&self) -> bool {
        self.0.starts_with('@')
    }

    /// Percent-encoded form for use as a single URL path segment
    pub fn url_encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }

    /// Name of the DefinitelyTyped package that would carry this package's types
    ///
    /// `react` maps to `@types/react`, `@babel/core` to `@types/babel__core`.
    pub fn types_package_name(&self) -> String {
        match self.0.strip_prefix('@') {
            Some(rest) => format!("@types/{}", rest.replacen('/', "__", 1)),
            None => format!("@types/{}", self.0),
        }
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PackageName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        PackageName::new(s)
    }
}

fn validate_segment(full: &str, segment: &str, what: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(invalid(full, &format!("Package {} cannot be empty", what)));
    }

    if segment.starts_with('.') || segment.starts_with('_') {
        return Err(invalid(
            full,
            &format!("Package {} cannot start with '.' or '_'", what),
        ));
    }

    // URL-safe characters only, this also rules out path traversal and query injection
    if !segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~'))
    {
        return Err(invalid(
            full,
            &format!(
                "Package {} contains invalid characters. Only letters, digits, '-', '.', '_' and '~' are allowed",
                what
            ),
        ));
    }

    Ok(())
}

fn invalid(name: &str, reason: &str) -> anyhow::Error {
    StatsError::InvalidPackageName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
