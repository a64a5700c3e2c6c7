use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{error::ExportError, target::ExportTarget};

/// Create a directory and all of its parents if they do not exist yet.
pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if !dir.is_dir() {
        log::debug!("Creating directory tree: {}", dir.display());
    }
    fs::create_dir_all(dir).map_err(|source| ExportError::FileWriteFailure {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write a string to the target, creating its directory first. Existing files are overwritten.
///
/// # Returns
///
/// The path that was written.
pub fn write_text(target: &ExportTarget, contents: &str) -> Result<PathBuf, ExportError> {
    ensure_directory(&target.directory())?;
    let path = target.path();
    fs::write(&path, contents).map_err(|source| ExportError::FileWriteFailure {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Serialize a document as pretty-printed JSON.
///
/// Field order follows the declaration order of the serialized structs, so the same input
/// always yields the same bytes.
pub fn to_json_string<T: Serialize + ?Sized>(document: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Serialize a document as JSON and write it to the target.
pub fn write_json<T: Serialize + ?Sized>(
    target: &ExportTarget,
    document: &T,
) -> Result<PathBuf, ExportError> {
    let contents = to_json_string(document)?;
    write_text(target, &contents)
}
