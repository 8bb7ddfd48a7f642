/// Use cases - application workflows
pub mod scan_fleet;

pub use scan_fleet::ScanFleetUseCase;
