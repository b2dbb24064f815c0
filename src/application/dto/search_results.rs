use crate::stats_analysis::domain::SearchHit;
use serde::Serialize;

/// Number of hits returned when the caller does not ask for a size
pub const DEFAULT_SEARCH_SIZE: usize = 8;

/// SearchResults - response DTO of the search use case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub hits: Vec<SearchHit>,
}
