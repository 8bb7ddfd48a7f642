use crate::application::read_models::ReportModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Field separator for the CSV report.
///
/// Semicolon rather than comma: version strings and locale decimal
/// notation both collide with commas, semicolons keep cells unambiguous.
const SEPARATOR: char = ';';

/// CsvFormatter adapter rendering the report as semicolon-separated CSV
///
/// The header row starts with an empty field (the row-label column),
/// followed by the gem names. One row per application, one field per
/// gem, empty fields for absent versions. Fields containing the
/// separator, quotes, or line breaks are quoted per standard CSV rules.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Quotes a field when it contains characters that would break the
    /// row structure; embedded quotes are doubled.
    fn escape_field(field: &str) -> String {
        if field.contains(SEPARATOR)
            || field.contains('"')
            || field.contains('\n')
            || field.contains('\r')
        {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn render_record(fields: &[String], output: &mut String) {
        let escaped: Vec<String> = fields.iter().map(|f| Self::escape_field(f)).collect();
        output.push_str(&escaped.join(&SEPARATOR.to_string()));
        output.push('\n');
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, report: &ReportModel) -> Result<String> {
        let mut output = String::new();

        let mut header = vec![String::new()];
        header.extend(report.columns.iter().cloned());
        Self::render_record(&header, &mut output);

        for row in &report.rows {
            let mut fields = vec![row.app.clone()];
            fields.extend(row.cells.iter().cloned());
            Self::render_record(&fields, &mut output);
        }

        Ok(output)
    }
}
