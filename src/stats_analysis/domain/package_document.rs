use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Keys of the registry `time` map that are not version numbers
const NON_VERSION_TIME_KEYS: [&str; 2] = ["created", "modified"];

/// Manifest of the latest published version (`GET /{name}/latest`)
///
/// Every field accepts `null` and unexpected shapes, falling back to its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LatestManifest {
    #[serde(default = "unknown_version", deserialize_with = "version_or_unknown")]
    pub version: String,
    /// Declared runtime dependencies: name to version range
    #[serde(default, deserialize_with = "string_entries")]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub types: Option<Value>,
    #[serde(default)]
    pub typings: Option<Value>,
}

impl LatestManifest {
    pub fn new(version: impl Into<String>, dependencies: BTreeMap<String, String>) -> Self {
        Self {
            version: version.into(),
            dependencies,
            types: None,
            typings: None,
        }
    }

    /// Whether the package ships its own type declarations
    pub fn declares_types(&self) -> bool {
        names_declaration(self.types.as_ref()) || names_declaration(self.typings.as_ref())
    }
}

fn names_declaration(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(path)) => !path.trim().is_empty(),
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Array(paths)) => !paths.is_empty(),
        Some(_) => true,
    }
}

fn unknown_version() -> String {
    "unknown".to_string()
}

fn version_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let version = Option::<Value>::deserialize(deserializer)?;
    Ok(match version {
        Some(Value::String(v)) if !v.trim().is_empty() => v,
        _ => unknown_version(),
    })
}

/// String-valued entries of an object; other entries and non-objects are dropped
fn string_entries<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(map)) => map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect(),
        _ => BTreeMap::new(),
    };
    Ok(entries)
}

/// Keywords as a list, or as one comma-separated string in older documents
fn keyword_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let keywords = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        Some(Value::String(list)) => list
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };
    Ok(keywords)
}

/// Maintainers as `{ name, email }` objects or `"name <email>"` strings
fn maintainer_list<'de, D>(deserializer: D) -> Result<Vec<Maintainer>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items,
        Some(single @ (Value::Object(_) | Value::String(_))) => vec![single],
        _ => Vec::new(),
    };
    Ok(items.into_iter().filter_map(Maintainer::from_value).collect())
}

/// `repository` field of a package document
///
/// The registry usually normalizes it to `{ type, url }`, older documents
/// carry a bare URL string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RepositoryField {
    Detailed {
        #[serde(rename = "type", default)]
        kind: Option<String>,
        #[serde(default)]
        url: String,
    },
    Url(String),
}

impl RepositoryField {
    pub fn kind(&self) -> Option<&str> {
        match self {
            RepositoryField::Detailed { kind, .. } => kind.as_deref(),
            RepositoryField::Url(_) => None,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            RepositoryField::Detailed { url, .. } => url,
            RepositoryField::Url(url) => url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Maintainer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Maintainer {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(_) => serde_json::from_value(value).ok(),
            Value::String(person) => {
                let (name, email) = match person.split_once('<') {
                    Some((name, rest)) => (
                        name.trim(),
                        rest.split('>').next().map(str::trim).filter(|e| !e.is_empty()),
                    ),
                    None => (person.trim(), None),
                };
                (!name.is_empty()).then(|| Maintainer {
                    name: name.to_string(),
                    email: email.map(str::to_string),
                })
            }
            _ => None,
        }
    }
}

/// Full registry document of a package (`GET /{name}`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Packument {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "dist-tags", deserialize_with = "string_entries")]
    pub dist_tags: BTreeMap<String, String>,
    /// Publish timestamps keyed by version, plus `created` and `modified`
    #[serde(default, deserialize_with = "string_entries")]
    pub time: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "maintainer_list")]
    pub maintainers: Vec<Maintainer>,
    #[serde(default, deserialize_with = "keyword_list")]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub repository: Option<RepositoryField>,
    #[serde(default)]
    pub license: Option<serde_json::Value>,
}

impl Packument {
    pub fn latest_version(&self) -> Option<&str> {
        self.dist_tags.get("latest").map(String::as_str)
    }

    pub fn last_modified(&self) -> Option<&str> {
        self.time.get("modified").map(String::as_str)
    }

    /// License name, whether declared as a string or as `{ type }`
    pub fn license_name(&self) -> Option<String> {
        match self.license.as_ref()? {
            serde_json::Value::String(name) => Some(name.clone()),
            serde_json::Value::Object(map) => map
                .get("type")
                .and_then(|t| t.as_str())
                .map(str::to_string),
            _ => None,
        }
    }

    /// Publish times of actual versions, skipping `created`/`modified` and unparsable stamps
    pub fn release_times(&self) -> Vec<(&str, DateTime<Utc>)> {
        self.time
            .iter()
            .filter(|(key, _)| !NON_VERSION_TIME_KEYS.contains(&key.as_str()))
            .filter_map(|(version, stamp)| {
                parse_timestamp(stamp).map(|time| (version.as_str(), time))
            })
            .collect()
    }
}

/// Parses a registry timestamp, which is RFC 3339 in practice
pub fn parse_timestamp(stamp: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(stamp)
        .ok()
        .map(|time| time.with_timezone(&Utc))
}

/// Calendar day of a registry timestamp
pub fn timestamp_day(stamp: &str) -> Option<NaiveDate> {
    parse_timestamp(stamp).map(|time| time.date_naive())
}

/// One registry search hit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
