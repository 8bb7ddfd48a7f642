/// Read models - formatter-facing projections of the scan result
pub mod report_model;

pub use report_model::{ReportModel, ReportRow};
