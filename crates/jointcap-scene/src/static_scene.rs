use std::path::Path;

use jointcap_camera::{CameraExportSettings, CameraKind, CameraSource, ImageSize};
use jointcap_geometry::{DVec3, Pose, Rotator};
use jointcap_io::RgbaFrame;
use jointcap_skeleton::{SkeletalActor, SkeletalBody};
use serde::{Deserialize, Serialize};

use crate::{camera::SceneCamera, capture::CaptureSource, error::SceneError, scene::Scene};

fn default_scale() -> DVec3 {
    DVec3::ONE
}

fn default_capture_source() -> CaptureSource {
    CaptureSource::SceneColorHdr
}

fn default_clear_color() -> [u8; 4] {
    [0, 0, 0, 255]
}

/// A camera described in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticCamera {
    /// Display label. May be empty.
    #[serde(default)]
    pub label: String,
    /// Object name, used when the label is empty.
    pub object_name: String,
    /// Camera kind and native parameters.
    pub kind: CameraKind,
    /// World location.
    #[serde(default)]
    pub location: DVec3,
    /// World rotation in degrees.
    #[serde(default)]
    pub rotation: Rotator,
    /// Per-axis scale.
    #[serde(default = "default_scale")]
    pub scale: DVec3,
    /// Render target size, if the camera has one.
    #[serde(default)]
    pub render_target: Option<ImageSize>,
    /// Export settings, if the camera is exported.
    #[serde(default)]
    pub export: Option<CameraExportSettings>,
    /// What a capture writes.
    #[serde(default = "default_capture_source")]
    pub capture_source: CaptureSource,
    /// Colour every captured pixel gets.
    #[serde(default = "default_clear_color")]
    pub clear_color: [u8; 4],
    /// Number of captures taken so far.
    #[serde(skip)]
    pub capture_count: usize,
}

impl CameraSource for StaticCamera {
    fn name(&self) -> String {
        if self.label.is_empty() {
            self.object_name.clone()
        } else {
            self.label.clone()
        }
    }

    fn kind(&self) -> CameraKind {
        self.kind.clone()
    }

    fn world_pose(&self) -> Pose {
        Pose::from_rotator(self.location, self.rotation, self.scale)
    }
}

impl SceneCamera for StaticCamera {
    fn export_settings(&self) -> Option<&CameraExportSettings> {
        self.export.as_ref()
    }

    fn render_target_size(&self) -> Option<ImageSize> {
        self.render_target
    }

    fn set_capture_source(&mut self, source: CaptureSource) {
        self.capture_source = source;
    }

    fn capture_scene(&mut self) -> Option<RgbaFrame> {
        let size = self.render_target?;
        self.capture_count += 1;
        Some(RgbaFrame::filled(size.width, size.height, self.clear_color))
    }
}

/// One joint of a [`StaticBody`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticBone {
    /// Joint name.
    pub name: String,
    /// World location.
    pub location: DVec3,
}

/// A posed skeletal body described in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticBody {
    /// Component name, e.g. `"Body"` or `"Face"`.
    pub component: String,
    /// The joints in skeleton order.
    #[serde(default)]
    pub bones: Vec<StaticBone>,
}

impl SkeletalBody for StaticBody {
    fn component_name(&self) -> &str {
        &self.component
    }

    fn bone_names(&self) -> Vec<String> {
        self.bones.iter().map(|b| b.name.clone()).collect()
    }

    fn bone_world_location(&self, bone_name: &str) -> Option<DVec3> {
        self.bones
            .iter()
            .find(|b| b.name == bone_name)
            .map(|b| b.location)
    }
}

/// An actor described in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticActor {
    /// Actor name.
    pub name: String,
    /// The actor's skeletal bodies.
    #[serde(default)]
    pub bodies: Vec<StaticBody>,
}

impl SkeletalActor for StaticActor {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn skeletal_bodies(&self) -> Vec<&dyn SkeletalBody> {
        self.bodies.iter().map(|b| b as &dyn SkeletalBody).collect()
    }
}

/// A fixed scene loaded from a JSON description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticScene {
    /// Scene cameras.
    #[serde(default)]
    pub cameras: Vec<StaticCamera>,
    /// Scene actors.
    #[serde(default)]
    pub actors: Vec<StaticActor>,
}

impl StaticScene {
    /// Parse a scene description.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scene description file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON scene file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SceneError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

impl Scene for StaticScene {
    fn cameras_mut(&mut self) -> Vec<&mut dyn SceneCamera> {
        self.cameras
            .iter_mut()
            .map(|c| c as &mut dyn SceneCamera)
            .collect()
    }

    fn skeletal_actors(&self) -> Vec<&dyn SkeletalActor> {
        self.actors.iter().map(|a| a as &dyn SkeletalActor).collect()
    }
}
