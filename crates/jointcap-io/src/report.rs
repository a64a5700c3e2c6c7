use std::path::PathBuf;

use crate::error::ExportError;

/// An artifact that could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedArtifact {
    /// The path that was attempted.
    pub path: PathBuf,
    /// Why the write failed.
    pub reason: String,
}

/// Outcome of writing a group of sibling artifacts.
///
/// Every artifact is attempted on its own; a failure is recorded and logged, and the
/// remaining artifacts are still written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Files that were written.
    pub written: Vec<PathBuf>,
    /// Files that failed.
    pub failed: Vec<FailedArtifact>,
}

impl ExportReport {
    /// Record the result of writing one artifact and log it.
    ///
    /// # Arguments
    ///
    /// * `what` - Human readable description used in the log line.
    /// * `path` - The path the artifact was meant to land at.
    /// * `result` - The outcome of the write.
    pub fn record(&mut self, what: &str, path: PathBuf, result: Result<PathBuf, ExportError>) {
        match result {
            Ok(written) => {
                log::info!("Successfully saved {} to: {}", what, written.display());
                self.written.push(written);
            }
            Err(e) => {
                log::error!("Failed to save {} to: {}. {}", what, path.display(), e);
                self.failed.push(FailedArtifact {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Record an artifact that was skipped before any write was attempted.
    pub fn record_failure(&mut self, what: &str, path: PathBuf, reason: impl Into<String>) {
        let reason = reason.into();
        log::error!("Skipped {} at {}: {}", what, path.display(), reason);
        self.failed.push(FailedArtifact { path, reason });
    }

    /// Append the entries of another report.
    pub fn merge(&mut self, other: ExportReport) {
        self.written.extend(other.written);
        self.failed.extend(other.failed);
    }

    /// True when no artifact failed.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
