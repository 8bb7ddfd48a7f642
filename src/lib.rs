//! gem-matrix - gem version inventory for Ruby application fleets
//!
//! This library scans a directory of independently-versioned application
//! checkouts and reports, for a requested list of gems, the version each
//! application has locked in its `Gemfile.lock`. The result is a sparse
//! gem/application version matrix rendered as semicolon CSV or a padded
//! markdown-style table.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scanning`): The combined line matcher, the gem
//!   list, and the version matrix
//! - **Application Layer** (`application`): The scan use case, DTOs, and
//!   the report read model
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error and result types
//!
//! # Example
//!
//! ```no_run
//! use gem_matrix::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ScanFleetUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ScanRequest::new(
//!     PathBuf::from("gems.txt"),
//!     PathBuf::from("/srv/apps"),
//!     false,
//!     false,
//! );
//! let response = use_case.execute(&request)?;
//!
//! let report = ReportModel::from_matrix(&response.matrix);
//! let output = CsvFormatter::new().format(&report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod ports;
pub mod scanning;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, TableFormatter};
    pub use crate::application::dto::{ScanRequest, ScanResponse};
    pub use crate::application::read_models::{ReportModel, ReportRow};
    pub use crate::application::use_cases::ScanFleetUseCase;
    pub use crate::ports::outbound::{
        FleetReader, GemListSource, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::scanning::domain::{GemList, LineMatcher, VersionMatrix, RUBY_COLUMN};
    pub use crate::shared::Result;
}
