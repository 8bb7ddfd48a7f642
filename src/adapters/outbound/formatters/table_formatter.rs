use crate::application::read_models::ReportModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// TableFormatter adapter rendering the report as a padded pipe table
///
/// Markdown-style: a header row, a separator row of dashes, one row per
/// application. Every column (including the row-label column) is
/// left-justified and padded to the widest cell in that column across
/// the header and all rows.
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Collects all table rows (header first) as flat field lists.
    fn collect_rows(report: &ReportModel) -> Vec<Vec<String>> {
        let mut header = vec![String::new()];
        header.extend(report.columns.iter().cloned());

        let mut rows = vec![header];
        for row in &report.rows {
            let mut fields = vec![row.app.clone()];
            fields.extend(row.cells.iter().cloned());
            rows.push(fields);
        }
        rows
    }

    /// Maximum literal width of each column across all rows.
    fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
        let mut widths = vec![0; rows.first().map_or(0, Vec::len)];
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    fn render_row(fields: &[String], widths: &[usize], output: &mut String) {
        output.push('|');
        for (cell, width) in fields.iter().zip(widths) {
            let padding = width - cell.chars().count();
            output.push(' ');
            output.push_str(cell);
            output.push_str(&" ".repeat(padding));
            output.push_str(" |");
        }
        output.push('\n');
    }

    fn render_separator(widths: &[usize], output: &mut String) {
        output.push('|');
        for width in widths {
            output.push_str(&"-".repeat(width + 2));
            output.push('|');
        }
        output.push('\n');
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, report: &ReportModel) -> Result<String> {
        let rows = Self::collect_rows(report);
        let widths = Self::column_widths(&rows);

        let mut output = String::new();
        Self::render_row(&rows[0], &widths, &mut output);
        Self::render_separator(&widths, &mut output);
        for row in &rows[1..] {
            Self::render_row(row, &widths, &mut output);
        }

        Ok(output)
    }
}
