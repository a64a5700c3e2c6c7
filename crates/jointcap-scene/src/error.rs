use std::path::PathBuf;

/// An error type for loading scene descriptions.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("Failed to read scene file {}", path.display())]
    FileRead {
        /// The scene file path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The scene description is not valid JSON or does not match the schema.
    #[error("Invalid scene description")]
    Parse(#[from] serde_json::Error),
}
