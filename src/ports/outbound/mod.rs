/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, output).
pub mod fleet_reader;
pub mod gem_list_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use fleet_reader::FleetReader;
pub use gem_list_source::GemListSource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
