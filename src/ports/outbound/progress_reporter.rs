/// ProgressReporter port for reporting progress during the scan
///
/// This port abstracts progress reporting (e.g., to stderr) so the
/// report on stdout stays clean.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress against a known total
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
