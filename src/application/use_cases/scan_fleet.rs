use crate::application::dto::{ScanRequest, ScanResponse};
use crate::ports::outbound::{FleetReader, GemListSource, ProgressReporter};
use crate::scanning::domain::{GemList, LineMatcher, VersionMatrix, RUBY_COLUMN};
use crate::scanning::services::{ruby_version, LockfileScanner};
use crate::shared::Result;
use std::path::Path;

/// ScanFleetUseCase - core use case building the version matrix
///
/// Orchestrates one scan over the application fleet: load the gem list,
/// compile the combined line matcher once, then walk every candidate
/// application sequentially and record its locked versions (and
/// optionally its Ruby runtime version) into the matrix.
///
/// # Type Parameters
/// * `GLS` - GemListSource implementation
/// * `FR` - FleetReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanFleetUseCase<GLS, FR, PR> {
    gem_list_source: GLS,
    fleet_reader: FR,
    progress_reporter: PR,
}

impl<GLS, FR, PR> ScanFleetUseCase<GLS, FR, PR>
where
    GLS: GemListSource,
    FR: FleetReader,
    PR: ProgressReporter,
{
    /// Creates a new ScanFleetUseCase with injected dependencies
    pub fn new(gem_list_source: GLS, fleet_reader: FR, progress_reporter: PR) -> Self {
        Self {
            gem_list_source,
            fleet_reader,
            progress_reporter,
        }
    }

    /// Access to the injected progress reporter
    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Executes the fleet scan
    ///
    /// # Arguments
    /// * `request` - Scan configuration (paths and toggles)
    ///
    /// # Returns
    /// ScanResponse containing the populated version matrix
    pub fn execute(&self, request: &ScanRequest) -> Result<ScanResponse> {
        let gem_list_content = self.gem_list_source.read_gem_list(&request.gem_list_path)?;
        let gem_list = GemList::parse(&gem_list_content);

        let apps = self.fleet_reader.list_apps(&request.apps_root)?;

        self.progress_reporter.report(&format!(
            "Scanning {} applications for {} gems...",
            apps.len(),
            gem_list.len()
        ));

        let matcher = LineMatcher::compile(gem_list.names())?;
        let scanner = LockfileScanner::new(&matcher);
        let mut matrix = VersionMatrix::new(gem_list.names(), request.include_ruby_version);

        let total = apps.len();
        for (index, app) in apps.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(app));

            if request.require_git_marker
                && !self.fleet_reader.has_git_marker(&request.apps_root, app)
            {
                continue;
            }

            if let Some(lockfile) = self.fleet_reader.read_lockfile(&request.apps_root, app)? {
                scanner.scan(app, &lockfile, &mut matrix);
            }

            if request.include_ruby_version {
                self.collect_ruby_version(&request.apps_root, app, &mut matrix)?;
            }
        }

        self.progress_reporter
            .report_completion(&format!("Scanned {} applications", total));

        Ok(ScanResponse {
            matrix,
            apps_scanned: total,
        })
    }

    /// Records the application's Ruby runtime version, if discoverable.
    ///
    /// `.tool-versions` takes priority; `.ruby-version` is the fallback
    /// when the former is absent or carries no ruby line. No entry is
    /// recorded when neither source yields a version.
    fn collect_ruby_version(
        &self,
        root: &Path,
        app: &str,
        matrix: &mut VersionMatrix,
    ) -> Result<()> {
        let from_tool_versions = self
            .fleet_reader
            .read_tool_versions(root, app)?
            .and_then(|content| ruby_version::from_tool_versions(&content));

        let version = match from_tool_versions {
            Some(version) => Some(version),
            None => self
                .fleet_reader
                .read_ruby_version_file(root, app)?
                .and_then(|content| ruby_version::from_ruby_version_file(&content)),
        };

        if let Some(version) = version {
            matrix.record(RUBY_COLUMN, app, version);
        }

        Ok(())
    }
}
