use gem_matrix::prelude::*;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Mock FleetReader serving an in-memory fleet
///
/// Built up with the `with_*` methods: each application can carry a lock
/// file, version marker files, and a git marker.
#[derive(Default)]
pub struct MockFleetReader {
    apps: Vec<String>,
    lockfiles: HashMap<String, String>,
    git_markers: HashSet<String>,
    tool_versions: HashMap<String, String>,
    ruby_versions: HashMap<String, String>,
}

impl MockFleetReader {
    pub fn new(apps: &[&str]) -> Self {
        Self {
            apps: apps.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_lockfile(mut self, app: &str, content: &str) -> Self {
        self.lockfiles.insert(app.to_string(), content.to_string());
        self
    }

    pub fn with_git_marker(mut self, app: &str) -> Self {
        self.git_markers.insert(app.to_string());
        self
    }

    pub fn with_tool_versions(mut self, app: &str, content: &str) -> Self {
        self.tool_versions
            .insert(app.to_string(), content.to_string());
        self
    }

    pub fn with_ruby_version_file(mut self, app: &str, content: &str) -> Self {
        self.ruby_versions
            .insert(app.to_string(), content.to_string());
        self
    }
}

impl FleetReader for MockFleetReader {
    fn list_apps(&self, _root: &Path) -> Result<Vec<String>> {
        Ok(self.apps.clone())
    }

    fn read_lockfile(&self, _root: &Path, app: &str) -> Result<Option<String>> {
        Ok(self.lockfiles.get(app).cloned())
    }

    fn has_git_marker(&self, _root: &Path, app: &str) -> bool {
        self.git_markers.contains(app)
    }

    fn read_tool_versions(&self, _root: &Path, app: &str) -> Result<Option<String>> {
        Ok(self.tool_versions.get(app).cloned())
    }

    fn read_ruby_version_file(&self, _root: &Path, app: &str) -> Result<Option<String>> {
        Ok(self.ruby_versions.get(app).cloned())
    }
}
