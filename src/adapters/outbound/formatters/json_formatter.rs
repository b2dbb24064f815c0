use crate::application::read_models::{Report, ReportBody, ReportMetadataView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;

/// Top-level JSON document: `{ "metadata": ..., "kind": ..., "data": ... }`
#[derive(Serialize)]
struct JsonDocument<'a> {
    metadata: &'a ReportMetadataView,
    kind: &'static str,
    data: &'a ReportBody,
}

/// JsonFormatter adapter for machine-readable reports
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let document = JsonDocument {
            metadata: &report.metadata,
            kind: report.body.kind(),
            data: &report.body,
        };
        serde_json::to_string_pretty(&document).context("Failed to serialize report to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::SearchResults;
    use crate::stats_analysis::domain::{
        DependencyNode, DependencyTreeResult, ReportMetadata, SearchHit,
    };

    fn metadata() -> ReportMetadata {
        ReportMetadata::new(
            "2024-06-01T12:00:00Z".to_string(),
            "npm-stats".to_string(),
            "0.3.0".to_string(),
            "urn:uuid:test-123".to_string(),
        )
    }

    #[test]
    fn test_format_dependency_tree() {
        let root = DependencyNode::new("express", "4.19.2").with_dependencies(vec![
            DependencyNode::new("accepts", "1.3.8"),
            DependencyNode::new("body-parser", "1.20.2"),
        ]);
        let report = Report::new(
            &metadata(),
            ReportBody::DependencyTree(DependencyTreeResult::new(root, 31, 3)),
        );

        let json = JsonFormatter::new().format(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["kind"], "dependencyTree");
        assert_eq!(value["metadata"]["reportId"], "urn:uuid:test-123");
        assert_eq!(value["data"]["totalDependencies"], 31);
        assert_eq!(value["data"]["maxDepth"], 3);
        assert_eq!(value["data"]["root"]["dependencies"][1]["name"], "body-parser");
        // leaves carry no dependencies key
        assert!(value["data"]["root"]["dependencies"][0]
            .get("dependencies")
            .is_none());
    }

    #[test]
    fn test_format_search_results() {
        let report = Report::new(
            &metadata(),
            ReportBody::Search(SearchResults {
                query: "date".to_string(),
                hits: vec![SearchHit {
                    name: "date-fns".to_string(),
                    version: "3.6.0".to_string(),
                    description: Some("Modern JavaScript date utility library".to_string()),
                }],
            }),
        );

        let json = JsonFormatter::default().format(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["kind"], "search");
        assert_eq!(value["data"]["hits"][0]["name"], "date-fns");
        assert!(json.contains("\n  \"metadata\""));
    }
}
