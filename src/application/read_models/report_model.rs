use crate::scanning::domain::VersionMatrix;

/// One report row: an application and its version cells in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub app: String,
    /// One entry per gem column; empty string for an absent version
    pub cells: Vec<String>,
}

/// Tabular read model consumed by the formatters.
///
/// Rows are the applications with at least one recorded version, sorted
/// lexicographically without duplicates. Columns follow the matrix
/// column order (the gem list as given, plus the `ruby` pseudo-column
/// when enabled). Absent cells render as empty strings, so both output
/// formats agree cell-for-cell by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportModel {
    /// Gem column headers, in report order (excluding the row-label column)
    pub columns: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl ReportModel {
    /// Projects the version matrix into the tabular model.
    pub fn from_matrix(matrix: &VersionMatrix) -> Self {
        let columns = matrix.columns().to_vec();

        let rows = matrix
            .apps_with_versions()
            .into_iter()
            .map(|app| {
                let cells = columns
                    .iter()
                    .map(|gem| {
                        matrix
                            .version_of(gem, &app)
                            .unwrap_or_default()
                            .to_string()
                    })
                    .collect();
                ReportRow { app, cells }
            })
            .collect();

        Self { columns, rows }
    }
}
