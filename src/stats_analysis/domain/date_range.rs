use crate::shared::error::StatsError;
use crate::shared::Result;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// The npm downloads API accepts at most 18 months per request; one year keeps a margin.
pub const MAX_DAYS_PER_REQUEST: u32 = 365;

/// Longest range a single report may cover.
pub const MAX_DATE_RANGE_DAYS: i64 = 730;

/// npm publishes download counts with a delay, today's numbers do not exist yet.
pub const NPM_DATA_DELAY_DAYS: i64 = 1;

/// Inclusive calendar date range value object
///
/// Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(StatsError::InvalidDateRange {
                reason: "Start date must be before end date".to_string(),
                max_days: MAX_DATE_RANGE_DAYS,
            }
            .into());
        }
        Ok(Self { start, end })
    }

    /// Builds a range from already-ordered bounds. Callers guarantee `start <= end`.
    pub(crate) fn from_ordered(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// A range covering a single day
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range, both ends included
    pub fn days(&self) -> i64 {
        days_in_range(self.start, self.end)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// The period of the same length that ends the day before this one starts
    pub fn previous_period(&self) -> DateRange {
        previous_period(self.start, self.end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Calculates the number of days in a date range, both ends included
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Returns the previous period of the same length, used for growth comparison
pub fn previous_period(start: NaiveDate, end: NaiveDate) -> DateRange {
    let days = days_in_range(start, end);
    DateRange::from_ordered(start - Duration::days(days), start - Duration::days(1))
}

/// Latest date that has npm download data available
pub fn latest_available_date(today: NaiveDate) -> NaiveDate {
    today - Duration::days(NPM_DATA_DELAY_DAYS)
}

/// Quick-select ranges ending at the latest available date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    Week,
    Month,
    HalfYear,
    Year,
    TwoYears,
}

impl DatePreset {
    pub fn days(self) -> i64 {
        match self {
            DatePreset::Week => 7,
            DatePreset::Month => 30,
            DatePreset::HalfYear => 180,
            DatePreset::Year => 365,
            DatePreset::TwoYears => 730,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DatePreset::Week => "7d",
            DatePreset::Month => "1m",
            DatePreset::HalfYear => "6m",
            DatePreset::Year => "1y",
            DatePreset::TwoYears => "2y",
        }
    }

    /// Resolves the preset against `today`, ending at the latest available date
    pub fn to_range(self, today: NaiveDate) -> DateRange {
        let end = latest_available_date(today);
        let start = end - Duration::days(self.days() - 1);
        DateRange::from_ordered(start, end)
    }
}

impl std::str::FromStr for DatePreset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "7d" => Ok(DatePreset::Week),
            "1m" => Ok(DatePreset::Month),
            "6m" => Ok(DatePreset::HalfYear),
            "1y" => Ok(DatePreset::Year),
            "2y" => Ok(DatePreset::TwoYears),
            _ => Err(format!(
                "Invalid preset: {}. Please specify one of 7d, 1m, 6m, 1y, 2y",
                s
            )),
        }
    }
}
