/// Domain layer - core data model for fleet scanning
pub mod gem_list;
pub mod line_matcher;
pub mod version_matrix;

pub use gem_list::GemList;
pub use line_matcher::{LineMatcher, LockedGem};
pub use version_matrix::{VersionMatrix, RUBY_COLUMN};
