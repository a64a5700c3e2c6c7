use std::{fs::File, path::Path};

use png::{BitDepth, ColorType, Encoder};

use crate::error::ExportError;

/// A captured frame as tightly packed 8-bit RGBA pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaFrame {
    /// Wrap a pixel buffer, checking that its length matches the frame size.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ExportError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(ExportError::InvalidFrameBuffer {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A frame where every pixel has the same color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let num_pixels = width as usize * height as usize;
        Self {
            width,
            height,
            data: rgba.repeat(num_pixels),
        }
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw pixel data.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

/// Writes the given frame as an 8-bit RGBA PNG to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `frame` - The captured frame.
pub fn write_frame_png(file_path: impl AsRef<Path>, frame: &RgbaFrame) -> Result<(), ExportError> {
    let file_path = file_path.as_ref();
    let file = File::create(file_path).map_err(|source| ExportError::FileWriteFailure {
        path: file_path.to_path_buf(),
        source,
    })?;

    let mut encoder = Encoder::new(file, frame.width, frame.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| ExportError::PngEncoding(e.to_string()))?;
    writer
        .write_image_data(&frame.data)
        .map_err(|e| ExportError::PngEncoding(e.to_string()))?;
    Ok(())
}
