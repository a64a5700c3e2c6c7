use std::path::{Path, PathBuf};

/// The owner of an export pass: who is being exported and where files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportContext {
    display_name: String,
    output_root: PathBuf,
}

impl ExportContext {
    /// Create a new context for the given owner name and output root.
    pub fn new(display_name: impl Into<String>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            display_name: display_name.into(),
            output_root: output_root.into(),
        }
    }

    /// A context for another owner sharing the same output root.
    pub fn for_owner(&self, display_name: impl Into<String>) -> Self {
        Self::new(display_name, self.output_root.clone())
    }

    /// The display name of the owning actor.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The configured output root.
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }
}
