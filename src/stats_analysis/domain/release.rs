use chrono::NaiveDate;
use serde::Serialize;

/// Kind of a stable semantic version bump
///
/// At most one flag is set. Pre-releases and malformed versions have none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionType {
    pub is_major: bool,
    pub is_minor: bool,
    pub is_patch: bool,
}

impl VersionType {
    pub fn is_stable_release(&self) -> bool {
        self.is_major || self.is_minor || self.is_patch
    }

    pub fn label(&self) -> &'static str {
        if self.is_major {
            "major"
        } else if self.is_minor {
            "minor"
        } else if self.is_patch {
            "patch"
        } else {
            "other"
        }
    }
}

/// A stable version published inside the requested period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRelease {
    pub version: String,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub version_type: VersionType,
}

/// How often a package publishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseCadence {
    pub average_days_between_releases: i64,
    pub total_releases: usize,
    pub last_release_date: NaiveDate,
}
