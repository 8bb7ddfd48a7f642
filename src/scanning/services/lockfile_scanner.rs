use crate::scanning::domain::{LineMatcher, VersionMatrix};

/// Scans one application's Gemfile.lock content into the matrix.
///
/// Each line is trimmed and tested against the combined matcher; a hit
/// records the (gem, application, version) cell. Lines that do not match
/// are silently skipped - a lock file is mostly lines the inventory does
/// not care about.
pub struct LockfileScanner<'a> {
    matcher: &'a LineMatcher,
}

impl<'a> LockfileScanner<'a> {
    pub fn new(matcher: &'a LineMatcher) -> Self {
        Self { matcher }
    }

    /// Runs the line scan for `app` over the raw lock file content.
    ///
    /// A gem listed more than once keeps the last version seen in read
    /// order. A match whose gem name equals the application's own name is
    /// discarded: an app must not report itself as its own dependency
    /// when a checkout directory happens to share a requested gem's name.
    pub fn scan(&self, app: &str, lockfile_content: &str, matrix: &mut VersionMatrix) {
        for line in lockfile_content.lines() {
            let Some(hit) = self.matcher.match_line(line.trim()) else {
                continue;
            };

            if hit.name == app {
                continue;
            }

            matrix.record(&hit.name, app, hit.version);
        }
    }
}
