use crate::shared::Result;
use std::path::Path;

/// FleetReader port for reading the application fleet
///
/// This port abstracts the file system operations over the applications
/// root: enumerating checkouts and reading the per-application files the
/// scan needs. Per-application files are optional by design - a missing
/// lock file or version marker is a normal "no data" outcome, so those
/// readers return `Option` instead of an error.
pub trait FleetReader {
    /// Lists candidate application names under the fleet root
    ///
    /// Immediate children whose base name does not start with `.`, in
    /// whatever order the file system returns them.
    ///
    /// # Errors
    /// Returns an error if the root does not exist or cannot be listed
    fn list_apps(&self, root: &Path) -> Result<Vec<String>>;

    /// Reads `<app>/Gemfile.lock`, or `None` if the app has no lock file
    fn read_lockfile(&self, root: &Path, app: &str) -> Result<Option<String>>;

    /// Whether `<app>/.git` exists (the version-control marker)
    fn has_git_marker(&self, root: &Path, app: &str) -> bool;

    /// Reads `<app>/.tool-versions`, or `None` if absent
    fn read_tool_versions(&self, root: &Path, app: &str) -> Result<Option<String>>;

    /// Reads `<app>/.ruby-version`, or `None` if absent
    fn read_ruby_version_file(&self, root: &Path, app: &str) -> Result<Option<String>>;
}
