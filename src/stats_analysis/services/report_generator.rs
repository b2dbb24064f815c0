use crate::stats_analysis::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportGenerator service for stamping generated reports
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates report metadata with the current timestamp and a unique id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let generated_at = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            generated_at,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Generates report metadata for this tool, using the compile-time version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
