use std::path::PathBuf;

use jointcap_io::{frame::write_frame_png, writer, ExportError, ExportTarget, RgbaFrame};

/// Writes a captured frame to disk.
pub trait FrameExporter {
    /// Write the frame at the target and return the written path.
    fn export_frame(&self, target: &ExportTarget, frame: &RgbaFrame) -> Result<PathBuf, ExportError>;
}

/// Writes frames as 8-bit RGBA PNG files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngFrameExporter;

impl FrameExporter for PngFrameExporter {
    fn export_frame(&self, target: &ExportTarget, frame: &RgbaFrame) -> Result<PathBuf, ExportError> {
        writer::ensure_directory(&target.directory())?;
        let path = target.path();
        write_frame_png(&path, frame)?;
        Ok(path)
    }
}
