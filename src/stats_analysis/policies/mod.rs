mod date_range_policy;

pub use date_range_policy::DateRangePolicy;
