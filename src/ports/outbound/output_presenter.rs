use crate::shared::Result;

/// OutputPresenter port for delivering a rendered report
pub trait OutputPresenter {
    /// Writes the rendered report to its destination (stdout, a file, ...)
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
