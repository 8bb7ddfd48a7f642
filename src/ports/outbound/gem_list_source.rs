use crate::shared::Result;
use std::path::Path;

/// GemListSource port for reading the gem list file
///
/// This port abstracts the file system access needed to read the
/// plain-text list of gem names to inventory.
pub trait GemListSource {
    /// Reads the gem list file at the given path
    ///
    /// # Returns
    /// The raw content of the gem list file as a string
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be read
    fn read_gem_list(&self, path: &Path) -> Result<String>;
}
