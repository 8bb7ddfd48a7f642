use std::path::PathBuf;

/// ScanRequest - immutable configuration record for one fleet scan
///
/// Built once from validated CLI options and passed by reference through
/// the scan; no mutable state is threaded between stages.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Path to the plain-text gem list file (one name per line)
    pub gem_list_path: PathBuf,
    /// Root directory whose children are the application checkouts
    pub apps_root: PathBuf,
    /// Also collect each application's Ruby runtime version
    pub include_ruby_version: bool,
    /// Skip applications without a `.git` marker directory
    pub require_git_marker: bool,
}

impl ScanRequest {
    pub fn new(
        gem_list_path: PathBuf,
        apps_root: PathBuf,
        include_ruby_version: bool,
        require_git_marker: bool,
    ) -> Self {
        Self {
            gem_list_path,
            apps_root,
            include_ruby_version,
            require_git_marker,
        }
    }
}
