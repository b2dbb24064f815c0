use crate::shared::Result;
use crate::stats_analysis::domain::{DatePreset, DateRange, Granularity};
use crate::stats_analysis::policies::DateRangePolicy;
use chrono::NaiveDate;

/// Number of versions listed in the per-version download table
pub const DEFAULT_TOP_VERSIONS: usize = 10;

/// How the caller picked the reporting period
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSelection {
    /// Raw `YYYY-MM-DD` bounds, validated against the date range policy
    Explicit { start: String, end: String },
    /// A quick-select range ending at the latest available date
    Preset(DatePreset),
}

impl DateSelection {
    /// Resolves the selection into a validated range
    ///
    /// # Arguments
    /// * `today` - Current calendar date, used for presets and the future-date check
    pub fn resolve(&self, today: NaiveDate) -> Result<DateRange> {
        match self {
            DateSelection::Explicit { start, end } => DateRangePolicy::validate(start, end, today),
            DateSelection::Preset(preset) => Ok(preset.to_range(today)),
        }
    }
}

impl Default for DateSelection {
    fn default() -> Self {
        DateSelection::Preset(DatePreset::Month)
    }
}

/// StatsRequest - request DTO for the download statistics use case
#[derive(Debug, Clone)]
pub struct StatsRequest {
    /// Package name as typed by the user, validated by the use case
    pub package_name: String,
    pub dates: DateSelection,
    /// Chart resolution; picked from the series length when `None`
    pub granularity: Option<Granularity>,
    /// How many versions to keep in the per-version download table
    pub top_versions: usize,
}

impl StatsRequest {
    pub fn new(package_name: impl Into<String>, dates: DateSelection) -> Self {
        Self {
            package_name: package_name.into(),
            dates,
            granularity: None,
            top_versions: DEFAULT_TOP_VERSIONS,
        }
    }

    pub fn with_granularity(mut self, granularity: Option<Granularity>) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_top_versions(mut self, top_versions: usize) -> Self {
        self.top_versions = top_versions;
        self
    }
}
