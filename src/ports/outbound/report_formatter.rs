use crate::application::read_models::ReportModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the version matrix report
///
/// This port abstracts the output syntax (semicolon CSV, padded pipe
/// table) over the shared tabular read model.
pub trait ReportFormatter {
    /// Renders the report model to its final textual form
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, report: &ReportModel) -> Result<String>;
}
