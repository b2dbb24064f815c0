use crate::application::read_models::Report;
use crate::shared::Result;

/// ReportFormatter port for rendering reports
///
/// One implementation per output format (JSON, Markdown).
pub trait ReportFormatter {
    /// Renders a report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &Report) -> Result<String>;
}
