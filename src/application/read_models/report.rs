//! Report read model
//!
//! Everything a formatter needs to render one command's output: the
//! report metadata and the payload of the command that ran.

use crate::application::dto::{ComparisonResult, PackageStats, SearchResults};
use crate::stats_analysis::domain::{DependencyTreeResult, PackageMetadata, ReportMetadata};
use serde::Serialize;

/// Main read model handed to the formatters
#[derive(Debug, Clone)]
pub struct Report {
    pub metadata: ReportMetadataView,
    pub body: ReportBody,
}

impl Report {
    pub fn new(metadata: &ReportMetadata, body: ReportBody) -> Self {
        Self {
            metadata: ReportMetadataView::from(metadata),
            body,
        }
    }
}

/// View representation of report metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadataView {
    /// RFC 3339 timestamp of report generation
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
    /// `urn:uuid:` identifier, unique per report
    pub report_id: String,
}

impl From<&ReportMetadata> for ReportMetadataView {
    fn from(metadata: &ReportMetadata) -> Self {
        Self {
            generated_at: metadata.generated_at().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
        }
    }
}

/// Payload of a report, one variant per command
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ReportBody {
    Stats(PackageStats),
    DependencyTree(DependencyTreeResult),
    Metadata(Box<PackageMetadata>),
    Search(SearchResults),
    Comparison(ComparisonResult),
}

impl ReportBody {
    /// Stable identifier of the payload, written as `kind` in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            ReportBody::Stats(_) => "stats",
            ReportBody::DependencyTree(_) => "dependencyTree",
            ReportBody::Metadata(_) => "metadata",
            ReportBody::Search(_) => "search",
            ReportBody::Comparison(_) => "comparison",
        }
    }
}
