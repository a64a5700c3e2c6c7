use std::path::{Path, PathBuf};

/// Where a single exported file lands: an output root, an optional sub folder and a file name.
///
/// Targets are plain values so naming policy can be tested without touching the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    root: PathBuf,
    sub_folder: Option<String>,
    file_name: String,
}

impl ExportTarget {
    /// Create a target directly under `root`.
    pub fn new(root: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            sub_folder: None,
            file_name: file_name.into(),
        }
    }

    /// Place the target in a sub folder of the root. An empty name means no sub folder.
    pub fn with_sub_folder(mut self, sub_folder: impl Into<String>) -> Self {
        let sub_folder = sub_folder.into();
        self.sub_folder = (!sub_folder.is_empty()).then_some(sub_folder);
        self
    }

    /// The output root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The sub folder, if any.
    pub fn sub_folder(&self) -> Option<&str> {
        self.sub_folder.as_deref()
    }

    /// The file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The directory the file is written into.
    pub fn directory(&self) -> PathBuf {
        match &self.sub_folder {
            Some(sub_folder) => self.root.join(sub_folder),
            None => self.root.clone(),
        }
    }

    /// The full path of the file.
    pub fn path(&self) -> PathBuf {
        self.directory().join(&self.file_name)
    }
}
