mod adapters;
mod application;
mod cli;
mod ports;
mod scanning;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, StdoutPresenter};
use application::dto::ScanRequest;
use application::read_models::ReportModel;
use application::use_cases::ScanFleetUseCase;
use cli::Args;
use ports::outbound::OutputPresenter;
use shared::error::ExitCode;
use shared::Result;
use std::path::PathBuf;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("Caused by: {}", err);
            source = err.source();
        }

        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let request = ScanRequest::new(
        PathBuf::from(&args.gems),
        PathBuf::from(&args.apps),
        args.ruby,
        args.require_git,
    );

    let use_case = ScanFleetUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(&request)?;

    let report = ReportModel::from_matrix(&response.matrix);
    let formatter = args.format.create_formatter();
    let rendered = formatter.format(&report)?;

    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&rendered)?;

    eprintln!(
        "{} applications scanned, {} reported",
        response.apps_scanned,
        report.rows.len()
    );

    Ok(())
}
