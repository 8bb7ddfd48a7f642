use clap::Parser;

use crate::adapters::outbound::formatters::{CsvFormatter, TableFormatter};
use crate::ports::outbound::ReportFormatter;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Csv,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'csv' or 'markdown'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
            OutputFormat::Markdown => Box::new(TableFormatter::new()),
        }
    }
}

/// Inventory gem versions across a fleet of Ruby application checkouts
#[derive(Parser, Debug)]
#[command(name = "gem-matrix")]
#[command(version)]
#[command(
    about = "Inventory gem versions across a fleet of Ruby application checkouts",
    long_about = None
)]
pub struct Args {
    /// Path to a plain-text list of gems to inventory (one name per line)
    #[arg(short, long = "gems", value_name = "FILE_PATH")]
    pub gems: String,

    /// Directory whose children are the application checkouts
    #[arg(short, long = "apps", value_name = "DIRECTORY_PATH")]
    pub apps: String,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format: csv or markdown
    #[arg(short, long, default_value = "csv")]
    pub format: OutputFormat,

    /// Also collect each application's Ruby version
    /// (.tool-versions, falling back to .ruby-version)
    #[arg(long)]
    pub ruby: bool,

    /// Skip applications without a .git directory
    #[arg(long = "require-git")]
    pub require_git: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
