use std::collections::HashMap;

/// Reserved column key for the Ruby runtime version pseudo-gem.
pub const RUBY_COLUMN: &str = "ruby";

/// Sparse result matrix: gem name -> (application name -> version).
///
/// The matrix is created with one (possibly empty) entry per requested
/// gem, so every requested gem is guaranteed a column in the report even
/// when no application locks it. Column order follows the gem list as
/// given; a duplicated input name keeps both column positions but shares
/// one cell map.
///
/// Populated only during the scan, then handed immutably to reporting.
#[derive(Debug, Clone)]
pub struct VersionMatrix {
    columns: Vec<String>,
    cells: HashMap<String, HashMap<String, String>>,
}

impl VersionMatrix {
    /// Creates an empty matrix with one column per requested gem.
    ///
    /// When `with_ruby` is set, the `ruby` pseudo-column is appended
    /// after the gem columns.
    pub fn new(gem_names: &[String], with_ruby: bool) -> Self {
        let mut columns: Vec<String> = gem_names.to_vec();
        let mut cells: HashMap<String, HashMap<String, String>> = HashMap::new();

        for name in gem_names {
            cells.entry(name.clone()).or_default();
        }

        if with_ruby {
            columns.push(RUBY_COLUMN.to_string());
            cells.entry(RUBY_COLUMN.to_string()).or_default();
        }

        Self { columns, cells }
    }

    /// Column names in report order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Records a version for a (gem, application) cell.
    ///
    /// A later write to the same cell overwrites the earlier one
    /// (last-write-wins). Writes for gems that were never requested are
    /// ignored rather than growing the matrix.
    pub fn record(&mut self, gem: &str, app: &str, version: String) {
        if let Some(apps) = self.cells.get_mut(gem) {
            apps.insert(app.to_string(), version);
        }
    }

    /// The recorded version for a (gem, application) cell, if any.
    pub fn version_of(&self, gem: &str, app: &str) -> Option<&str> {
        self.cells
            .get(gem)
            .and_then(|apps| apps.get(app))
            .map(String::as_str)
    }

    /// Applications with at least one recorded version, sorted
    /// lexicographically with duplicates removed.
    pub fn apps_with_versions(&self) -> Vec<String> {
        let mut apps: Vec<String> = self
            .cells
            .values()
            .flat_map(|apps| apps.keys().cloned())
            .collect();

        apps.sort();
        apps.dedup();
        apps
    }
}
