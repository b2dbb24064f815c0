use crate::stats_analysis::domain::DateRange;
use chrono::{Duration, NaiveDate};

/// DateRangeChunker service for splitting a date range into API-sized windows
///
/// Pure function of its inputs. The range is assumed to be validated by the
/// caller; a reversed range produces no chunks.
pub struct DateRangeChunker;

impl DateRangeChunker {
    /// Splits `[start, end]` into contiguous chunks of at most `max_days_per_chunk` days
    ///
    /// # Arguments
    /// * `start` - First day, inclusive
    /// * `end` - Last day, inclusive
    /// * `max_days_per_chunk` - Window limit of the upstream API (0 is treated as 1)
    ///
    /// # Returns
    /// Chunks in chronological order. The first starts at `start`, the last
    /// ends at `end`, and each chunk starts the day after the previous one ends.
    pub fn chunk(start: NaiveDate, end: NaiveDate, max_days_per_chunk: u32) -> Vec<DateRange> {
        let span = Duration::days(i64::from(max_days_per_chunk.max(1)) - 1);
        let mut chunks = Vec::new();
        let mut cursor = start;

        while cursor <= end {
            let chunk_end = (cursor + span).min(end);
            chunks.push(DateRange::from_ordered(cursor, chunk_end));

            match chunk_end.succ_opt() {
                Some(next) => cursor = next,
                None => break,
            }
        }

        chunks
    }

    /// Chunks an already-constructed range
    pub fn chunk_range(range: &DateRange, max_days_per_chunk: u32) -> Vec<DateRange> {
        Self::chunk(range.start(), range.end(), max_days_per_chunk)
    }
}
