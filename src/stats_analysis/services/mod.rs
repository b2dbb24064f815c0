mod date_range_chunker;
mod download_aggregator;
mod github_repo_parser;
pub mod number_format;
mod release_analyzer;
mod report_generator;
mod stats_calculator;

pub use date_range_chunker::DateRangeChunker;
pub use download_aggregator::DownloadAggregator;
pub use github_repo_parser::GitHubRepoParser;
pub use release_analyzer::ReleaseAnalyzer;
pub use report_generator::ReportGenerator;
pub use stats_calculator::StatsCalculator;
