use std::path::PathBuf;

/// An error type for the export writers.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// The file or its parent directory could not be written.
    #[error("Failed to write file {path}. {source}")]
    FileWriteFailure {
        /// The path that failed.
        path: PathBuf,
        /// The underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// Error to serialize a JSON document.
    #[error("Failed to serialize json document. {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error to encode the PNG image.
    #[error("Failed to encode the png image. {0}")]
    PngEncoding(String),

    /// The pixel buffer does not match the frame size.
    #[error("Frame buffer has {actual} bytes, expected {expected} for {width}x{height} rgba8")]
    InvalidFrameBuffer {
        /// Frame width in pixels.
        width: u32,
        /// Frame height in pixels.
        height: u32,
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes.
        actual: usize,
    },
}
