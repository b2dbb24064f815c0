use crate::shared::error::StatsError;
use crate::shared::Result;
use crate::stats_analysis::domain::{DateRange, MAX_DATE_RANGE_DAYS};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// DateRangePolicy for deciding which download windows may be requested
///
/// Rules, checked in this order:
/// 1. Both dates are `YYYY-MM-DD`
/// 2. The start is not after the end
/// 3. The span (`end - start`) is at most `MAX_DATE_RANGE_DAYS`
/// 4. The end is not in the future
pub struct DateRangePolicy;

impl DateRangePolicy {
    /// Parses and validates a user-supplied date window
    ///
    /// # Arguments
    /// * `start` - Start date as typed by the user
    /// * `end` - End date as typed by the user
    /// * `today` - Current calendar day
    pub fn validate(start: &str, end: &str, today: NaiveDate) -> Result<DateRange> {
        let start = Self::parse_date(start)?;
        let end = Self::parse_date(end)?;
        Self::validate_bounds(start, end, today)
    }

    /// Validates already-parsed bounds
    pub fn validate_bounds(
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
    ) -> Result<DateRange> {
        if start > end {
            return Err(invalid_range("Start date must be before end date"));
        }

        if (end - start).num_days() > MAX_DATE_RANGE_DAYS {
            return Err(invalid_range(&format!(
                "Date range cannot exceed {} days",
                MAX_DATE_RANGE_DAYS
            )));
        }

        if end > today {
            return Err(invalid_range("End date cannot be in the future"));
        }

        DateRange::new(start, end)
    }

    /// Parses a strict `YYYY-MM-DD` date
    pub fn parse_date(value: &str) -> Result<NaiveDate> {
        let trimmed = value.trim();
        let well_formed = trimmed.len() == 10
            && trimmed.char_indices().all(|(i, c)| match i {
                4 | 7 => c == '-',
                _ => c.is_ascii_digit(),
            });

        if !well_formed {
            return Err(invalid_range(&format!(
                "Invalid date format: \"{}\"",
                value
            )));
        }

        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map_err(|e| invalid_range(&format!("Invalid date \"{}\": {}", value, e)))
    }
}

fn invalid_range(reason: &str) -> anyhow::Error {
    StatsError::InvalidDateRange {
        reason: reason.to_string(),
        max_days: MAX_DATE_RANGE_DAYS,
    }
    .into()
}
