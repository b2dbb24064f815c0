use crate::stats_analysis::domain::{ComparisonBucket, DailyDownload, DownloadBucket, Granularity};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Series longer than this default to weekly buckets
const WEEKLY_DEFAULT_THRESHOLD: usize = 365;

/// Minimum number of daily points for weekly buckets to be offered
const MIN_POINTS_FOR_WEEKLY: usize = 14;

/// Minimum number of daily points for monthly buckets to be offered
const MIN_POINTS_FOR_MONTHLY: usize = 60;

/// DownloadAggregator service for grouping daily downloads into chart buckets
pub struct DownloadAggregator;

impl DownloadAggregator {
    /// Groups a daily series into buckets of the given granularity
    ///
    /// Weekly buckets are keyed by the Monday of their week and monthly
    /// buckets by the first of their month. Buckets come back sorted by key.
    pub fn aggregate(downloads: &[DailyDownload], granularity: Granularity) -> Vec<DownloadBucket> {
        let mut buckets: BTreeMap<NaiveDate, DownloadBucket> = BTreeMap::new();

        for entry in downloads {
            let key = Self::bucket_key(entry.day, granularity);
            buckets
                .entry(key)
                .and_modify(|bucket| {
                    bucket.downloads += entry.downloads;
                    bucket.first_day = bucket.first_day.min(entry.day);
                    bucket.last_day = bucket.last_day.max(entry.day);
                })
                .or_insert(DownloadBucket {
                    key,
                    downloads: entry.downloads,
                    first_day: entry.day,
                    last_day: entry.day,
                });
        }

        buckets.into_values().collect()
    }

    /// Canonical date of the bucket that `day` falls into
    pub fn bucket_key(day: NaiveDate, granularity: Granularity) -> NaiveDate {
        match granularity {
            Granularity::Daily => day,
            Granularity::Weekly => {
                day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
            }
            Granularity::Monthly => day - Duration::days(i64::from(day.day0())),
        }
    }

    pub fn default_granularity(data_points: usize) -> Granularity {
        if data_points > WEEKLY_DEFAULT_THRESHOLD {
            Granularity::Weekly
        } else {
            Granularity::Daily
        }
    }

    /// Granularities that still leave a meaningful number of buckets
    pub fn available_granularities(data_points: usize) -> Vec<Granularity> {
        let mut available = vec![Granularity::Daily];
        if data_points >= MIN_POINTS_FOR_WEEKLY {
            available.push(Granularity::Weekly);
        }
        if data_points >= MIN_POINTS_FOR_MONTHLY {
            available.push(Granularity::Monthly);
        }
        available
    }

    /// Aligns several packages' daily series on shared bucket keys
    ///
    /// # Arguments
    /// * `series` - Package name and its daily downloads, one entry per package
    /// * `granularity` - Bucket size applied to every series
    pub fn merge_series(
        series: &[(String, Vec<DailyDownload>)],
        granularity: Granularity,
    ) -> Vec<ComparisonBucket> {
        let mut merged: BTreeMap<NaiveDate, BTreeMap<String, u64>> = BTreeMap::new();

        for (name, downloads) in series {
            for entry in downloads {
                let key = Self::bucket_key(entry.day, granularity);
                *merged
                    .entry(key)
                    .or_default()
                    .entry(name.clone())
                    .or_insert(0) += entry.downloads;
            }
        }

        merged
            .into_iter()
            .map(|(key, downloads)| ComparisonBucket { key, downloads })
            .collect()
    }
}
