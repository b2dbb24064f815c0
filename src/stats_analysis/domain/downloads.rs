use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Download count for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyDownload {
    pub day: NaiveDate,
    pub downloads: u64,
}

impl DailyDownload {
    pub fn new(day: NaiveDate, downloads: u64) -> Self {
        Self { day, downloads }
    }
}

/// Day with the most downloads in a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeakDay {
    pub date: NaiveDate,
    pub downloads: u64,
}

/// Aggregate figures for a download series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadSummary {
    pub total_downloads: u64,
    pub daily_average: u64,
    pub peak_day: Option<PeakDay>,
    /// Percentage change against the previous period of the same length
    pub growth_rate: f64,
}

/// Last-week downloads of a single published version
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionDownload {
    pub version: String,
    pub downloads: u64,
    /// Share of the package's total last-week downloads, 0-100
    pub percentage: f64,
}

/// Chart resolution for download series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl std::str::FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "day" => Ok(Granularity::Daily),
            "weekly" | "week" => Ok(Granularity::Weekly),
            "monthly" | "month" => Ok(Granularity::Monthly),
            _ => Err(format!(
                "Invalid granularity: {}. Please specify 'daily', 'weekly' or 'monthly'",
                s
            )),
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Granularity::Daily => write!(f, "daily"),
            Granularity::Weekly => write!(f, "weekly"),
            Granularity::Monthly => write!(f, "monthly"),
        }
    }
}

/// Downloads summed over one day, week or month
///
/// `key` is the bucket's canonical date (the day, the Monday of the week or
/// the first of the month); `first_day`/`last_day` are the days actually present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadBucket {
    pub key: NaiveDate,
    pub downloads: u64,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

/// Downloads of several packages summed over the same bucket
///
/// A package with no data in the bucket has no entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonBucket {
    pub key: NaiveDate,
    pub downloads: BTreeMap<String, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_daily_download_deserializes_api_shape() {
        let json = r#"{"day":"2024-01-05","downloads":1234}"#;
        let parsed: DailyDownload = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.day, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(parsed.downloads, 1234);
    }

    #[test]
    fn test_granularity_from_str() {
        assert_eq!(Granularity::from_str("Weekly").unwrap(), Granularity::Weekly);
        assert_eq!(Granularity::from_str("month").unwrap(), Granularity::Monthly);
        assert!(Granularity::from_str("hourly").is_err());
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = DownloadSummary {
            total_downloads: 10,
            daily_average: 5,
            peak_day: None,
            growth_rate: 0.0,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalDownloads"], 10);
        assert_eq!(json["dailyAverage"], 5);
        assert!(json["peakDay"].is_null());
    }
}
