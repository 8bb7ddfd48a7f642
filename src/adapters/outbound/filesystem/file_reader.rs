use crate::ports::outbound::{FleetReader, GemListSource};
use crate::shared::error::ScanError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Fixed lock file name inside each application checkout.
const LOCKFILE_NAME: &str = "Gemfile.lock";

/// Version-control marker directory checked by `--require-git`.
const GIT_MARKER: &str = ".git";

/// asdf/mise multi-tool version file.
const TOOL_VERSIONS_FILE: &str = ".tool-versions";

/// rbenv/rvm single-version file.
const RUBY_VERSION_FILE: &str = ".ruby-version";

/// FileSystemReader adapter for reading fleet data from the file system
///
/// This adapter implements both the GemListSource and FleetReader ports,
/// providing file system access for the gem list, the application
/// listing, and the per-application lock and version marker files.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads an optional per-application file.
    ///
    /// Absence is a normal outcome (`Ok(None)`); only an existing file
    /// that cannot be read is an error.
    fn read_app_file(&self, root: &Path, app: &str, file_name: &str) -> Result<Option<String>> {
        let path = root.join(app).join(file_name);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| ScanError::FileReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        Ok(Some(content))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl GemListSource for FileSystemReader {
    fn read_gem_list(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ScanError::GemListNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        fs::read_to_string(path)
            .map_err(|e| {
                ScanError::FileReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}

impl FleetReader for FileSystemReader {
    fn list_apps(&self, root: &Path) -> Result<Vec<String>> {
        if !root.is_dir() {
            return Err(ScanError::AppsRootNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }

        let entries = fs::read_dir(root).map_err(|e| ScanError::DirectoryListError {
            path: root.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut apps = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ScanError::DirectoryListError {
                path: root.to_path_buf(),
                details: e.to_string(),
            })?;

            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with('.') {
                apps.push(name);
            }
        }

        Ok(apps)
    }

    fn read_lockfile(&self, root: &Path, app: &str) -> Result<Option<String>> {
        self.read_app_file(root, app, LOCKFILE_NAME)
    }

    fn has_git_marker(&self, root: &Path, app: &str) -> bool {
        root.join(app).join(GIT_MARKER).is_dir()
    }

    fn read_tool_versions(&self, root: &Path, app: &str) -> Result<Option<String>> {
        self.read_app_file(root, app, TOOL_VERSIONS_FILE)
    }

    fn read_ruby_version_file(&self, root: &Path, app: &str) -> Result<Option<String>> {
        self.read_app_file(root, app, RUBY_VERSION_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_gem_list_success() {
        let temp_dir = TempDir::new().unwrap();
        let list_path = temp_dir.path().join("gems.txt");
        fs::write(&list_path, "rails\nrack\n").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_gem_list(&list_path).unwrap();

        assert_eq!(content, "rails\nrack\n");
    }

    #[test]
    fn test_read_gem_list_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_gem_list(&temp_dir.path().join("missing.txt"));

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("isn't found"));
    }

    #[test]
    fn test_list_apps_skips_hidden_entries() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("shop")).unwrap();
        fs::create_dir(temp_dir.path().join(".cache")).unwrap();
        fs::write(temp_dir.path().join(".DS_Store"), "").unwrap();

        let reader = FileSystemReader::new();
        let apps = reader.list_apps(temp_dir.path()).unwrap();

        assert_eq!(apps, vec!["shop"]);
    }

    #[test]
    fn test_list_apps_includes_plain_files_as_candidates() {
        // Plain files are candidates too; the missing lock file is what
        // filters them out of the results later.
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("README"), "").unwrap();

        let reader = FileSystemReader::new();
        let apps = reader.list_apps(temp_dir.path()).unwrap();

        assert_eq!(apps, vec!["README"]);
    }

    #[test]
    fn test_list_apps_root_not_found() {
        let reader = FileSystemReader::new();
        let result = reader.list_apps(Path::new("/nonexistent/fleet/root"));

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Applications directory"));
    }

    #[test]
    fn test_read_lockfile_present_and_absent() {
        let temp_dir = TempDir::new().unwrap();
        let app_dir = temp_dir.path().join("shop");
        fs::create_dir(&app_dir).unwrap();
        fs::write(app_dir.join("Gemfile.lock"), "rack (3.0.8)\n").unwrap();

        let reader = FileSystemReader::new();
        let present = reader.read_lockfile(temp_dir.path(), "shop").unwrap();
        let absent = reader.read_lockfile(temp_dir.path(), "blog").unwrap();

        assert_eq!(present.as_deref(), Some("rack (3.0.8)\n"));
        assert!(absent.is_none());
    }

    #[test]
    fn test_has_git_marker() {
        let temp_dir = TempDir::new().unwrap();
        let app_dir = temp_dir.path().join("shop");
        fs::create_dir_all(app_dir.join(".git")).unwrap();

        let reader = FileSystemReader::new();
        assert!(reader.has_git_marker(temp_dir.path(), "shop"));
        assert!(!reader.has_git_marker(temp_dir.path(), "blog"));
    }

    #[test]
    fn test_read_version_marker_files() {
        let temp_dir = TempDir::new().unwrap();
        let app_dir = temp_dir.path().join("shop");
        fs::create_dir(&app_dir).unwrap();
        fs::write(app_dir.join(".tool-versions"), "ruby 3.2.1\n").unwrap();
        fs::write(app_dir.join(".ruby-version"), "3.1.4\n").unwrap();

        let reader = FileSystemReader::new();
        assert_eq!(
            reader
                .read_tool_versions(temp_dir.path(), "shop")
                .unwrap()
                .as_deref(),
            Some("ruby 3.2.1\n")
        );
        assert_eq!(
            reader
                .read_ruby_version_file(temp_dir.path(), "shop")
                .unwrap()
                .as_deref(),
            Some("3.1.4\n")
        );
        assert!(reader
            .read_tool_versions(temp_dir.path(), "blog")
            .unwrap()
            .is_none());
    }
}
