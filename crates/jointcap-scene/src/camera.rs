use jointcap_camera::{CameraExportSettings, CameraSource, ImageSize};
use jointcap_io::RgbaFrame;

use crate::capture::CaptureSource;

/// A scene camera that can be captured on demand.
pub trait SceneCamera: CameraSource {
    /// The camera's export settings, or `None` if the camera is not set up for export.
    fn export_settings(&self) -> Option<&CameraExportSettings>;

    /// Size of the camera's render target, or `None` if it has none.
    fn render_target_size(&self) -> Option<ImageSize>;

    /// True if the camera has a render target to capture into.
    fn has_render_target(&self) -> bool {
        self.render_target_size().is_some()
    }

    /// Select what the next capture writes into the render target.
    fn set_capture_source(&mut self, source: CaptureSource);

    /// Render the scene into the render target now and read the pixels back.
    ///
    /// Returns `None` if the camera has no render target.
    fn capture_scene(&mut self) -> Option<RgbaFrame>;
}
