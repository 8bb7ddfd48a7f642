/// Mock implementations of the outbound ports for integration tests
mod mock_fleet_reader;
mod mock_gem_list_source;
mod mock_progress_reporter;

pub use mock_fleet_reader::MockFleetReader;
pub use mock_gem_list_source::MockGemListSource;
pub use mock_progress_reporter::MockProgressReporter;
