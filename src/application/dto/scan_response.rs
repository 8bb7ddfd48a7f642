use crate::scanning::domain::VersionMatrix;

/// ScanResponse - result of one fleet scan
#[derive(Debug, Clone)]
pub struct ScanResponse {
    /// The populated version matrix
    pub matrix: VersionMatrix,
    /// Number of candidate applications found under the fleet root
    pub apps_scanned: usize,
}
