use crate::stats_analysis::domain::{DailyDownload, DownloadSummary, PeakDay};

/// StatsCalculator service for summarizing a download series
pub struct StatsCalculator;

impl StatsCalculator {
    /// Summarizes `downloads` and compares it with the previous period
    ///
    /// # Arguments
    /// * `downloads` - Daily series of the requested period
    /// * `previous` - Daily series of the period of the same length right before it
    ///
    /// # Returns
    /// Totals, rounded daily average, the first day with the highest count,
    /// and the growth in percent (0 when the previous period has no downloads)
    pub fn calculate(downloads: &[DailyDownload], previous: &[DailyDownload]) -> DownloadSummary {
        let total_downloads = Self::total(downloads);

        let daily_average = if downloads.is_empty() {
            0
        } else {
            (total_downloads as f64 / downloads.len() as f64).round() as u64
        };

        // First maximum wins on ties
        let peak_day = downloads
            .iter()
            .fold(None::<&DailyDownload>, |best, day| match best {
                Some(best) if best.downloads >= day.downloads => Some(best),
                _ => Some(day),
            })
            .map(|day| PeakDay {
                date: day.day,
                downloads: day.downloads,
            });

        let previous_total = Self::total(previous);
        let growth_rate = if previous_total > 0 {
            (total_downloads as f64 - previous_total as f64) / previous_total as f64 * 100.0
        } else {
            0.0
        };

        DownloadSummary {
            total_downloads,
            daily_average,
            peak_day,
            growth_rate,
        }
    }

    pub fn total(downloads: &[DailyDownload]) -> u64 {
        downloads.iter().map(|d| d.downloads).sum()
    }
}
