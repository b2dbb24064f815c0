/// ProgressReporter port for user feedback during network-bound work
///
/// Reports go to a side channel (stderr in the CLI) so that stdout stays
/// reserved for the report itself.
pub trait ProgressReporter: Send + Sync {
    /// Reports a status line, e.g. which package is being fetched
    fn report(&self, message: &str);

    /// Reports progress through a known number of steps
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total number of steps
    /// * `message` - Optional label for the current step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a recoverable failure
    fn report_error(&self, message: &str);

    /// Reports that an operation finished
    fn report_completion(&self, message: &str);
}
