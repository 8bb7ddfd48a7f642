/// Domain services - the per-application scan logic
pub mod lockfile_scanner;
pub mod ruby_version;

pub use lockfile_scanner::LockfileScanner;
