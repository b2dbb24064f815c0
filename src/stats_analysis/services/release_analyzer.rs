use crate::stats_analysis::domain::{
    DateRange, Packument, ReleaseCadence, VersionDownload, VersionRelease, VersionType,
};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Pre-release tags that never count as a stable release
const PRE_RELEASE_TAGS: [&str; 7] = [
    "canary",
    "next",
    "experimental",
    "rc",
    "beta",
    "alpha",
    "dev",
];

/// ReleaseAnalyzer service for publish history and version popularity
///
/// Works only on registry documents already fetched, no I/O.
pub struct ReleaseAnalyzer;

impl ReleaseAnalyzer {
    /// Classifies a version string as a major, minor or patch release
    ///
    /// `X.0.0` is major, `X.Y.0` minor and `X.Y.Z` patch. Pre-releases and
    /// strings that do not start with three numeric components are none of them.
    pub fn parse_version_type(version: &str) -> VersionType {
        if Self::is_pre_release(version) {
            return VersionType::default();
        }

        match Self::parse_triplet(version) {
            Some((_, minor, patch)) => VersionType {
                is_major: minor == 0 && patch == 0,
                is_minor: patch == 0 && minor != 0,
                is_patch: patch != 0,
            },
            None => VersionType::default(),
        }
    }

    /// Stable releases published inside `range`, oldest first
    pub fn extract_version_releases(
        packument: &Packument,
        range: &DateRange,
    ) -> Vec<VersionRelease> {
        let mut releases: Vec<VersionRelease> = packument
            .release_times()
            .into_iter()
            .filter(|(_, published)| range.contains(published.date_naive()))
            .filter_map(|(version, published)| {
                let version_type = Self::parse_version_type(version);
                version_type.is_stable_release().then(|| VersionRelease {
                    version: version.to_string(),
                    date: published.date_naive(),
                    version_type,
                })
            })
            .collect();

        releases.sort_by(|a, b| a.date.cmp(&b.date));
        releases
    }

    /// Average spacing between all published versions
    ///
    /// # Returns
    /// `None` when fewer than two versions carry a publish time
    pub fn calculate_release_cadence(packument: &Packument) -> Option<ReleaseCadence> {
        let mut times: Vec<_> = packument
            .release_times()
            .into_iter()
            .map(|(_, published)| published)
            .collect();

        if times.len() < 2 {
            return None;
        }
        times.sort();

        let first = times.first()?;
        let last = times.last()?;
        let seconds_between = (*last - *first).num_seconds() as f64;
        let average_days = seconds_between / 86_400.0 / (times.len() - 1) as f64;

        Some(ReleaseCadence {
            average_days_between_releases: average_days.round() as i64,
            total_releases: times.len(),
            last_release_date: last.date_naive(),
        })
    }

    /// Per-version downloads with their share of the total, most downloaded first
    ///
    /// Versions with equal downloads are ordered newest first.
    pub fn version_shares(downloads: &BTreeMap<String, u64>) -> Vec<VersionDownload> {
        let total: u64 = downloads.values().sum();

        let mut shares: Vec<VersionDownload> = downloads
            .iter()
            .map(|(version, &count)| VersionDownload {
                version: version.clone(),
                downloads: count,
                percentage: if total > 0 {
                    count as f64 / total as f64 * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        shares.sort_by(|a, b| {
            b.downloads
                .cmp(&a.downloads)
                .then_with(|| Self::compare_semver_desc(&a.version, &b.version))
        });
        shares
    }

    /// Orders versions newest first by numeric major, minor and patch
    ///
    /// Unparsable versions sort after parsable ones, then by plain string order.
    pub fn compare_semver_desc(a: &str, b: &str) -> Ordering {
        match (Self::parse_triplet(a), Self::parse_triplet(b)) {
            (Some(x), Some(y)) => y.cmp(&x).then_with(|| a.cmp(b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }

    fn is_pre_release(version: &str) -> bool {
        let lowered = version.to_lowercase();
        PRE_RELEASE_TAGS
            .iter()
            .any(|tag| lowered.contains(&format!("-{}", tag)))
    }

    /// Leading `major.minor.patch`, ignoring anything after the patch digits
    fn parse_triplet(version: &str) -> Option<(u64, u64, u64)> {
        let mut parts = version.splitn(3, '.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let rest = parts.next()?;
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        let patch = digits.parse().ok()?;
        Some((major, minor, patch))
    }
}
