use serde::{Deserialize, Serialize};

/// Native parameters of a cinematic camera: lens focal length and filmback, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CineCameraParams {
    /// Current lens focal length in mm.
    pub focal_length_mm: f64,
    /// Filmback sensor width in mm.
    pub sensor_width_mm: f64,
    /// Filmback sensor height in mm.
    pub sensor_height_mm: f64,
}

impl Default for CineCameraParams {
    fn default() -> Self {
        // 16:9 DSLR filmback with a 35mm lens
        Self {
            focal_length_mm: 35.0,
            sensor_width_mm: 23.76,
            sensor_height_mm: 13.365,
        }
    }
}

/// Native parameters of a scene capture: its horizontal field of view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneCaptureParams {
    /// Horizontal field of view in degrees.
    pub fov_degrees: f64,
}

impl Default for SceneCaptureParams {
    fn default() -> Self {
        Self { fov_degrees: 90.0 }
    }
}

/// The camera representations a scene can hand us.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CameraKind {
    /// A cinematic camera with a physical lens and filmback.
    CineCamera(CineCameraParams),
    /// A scene capture described by its field of view.
    SceneCapture(SceneCaptureParams),
    /// Any other camera object; it has no intrinsics formula.
    Unsupported {
        /// The scene's name for the object type.
        type_name: String,
    },
}

impl CameraKind {
    /// A short name for logs and errors.
    pub fn name(&self) -> &str {
        match self {
            CameraKind::CineCamera(_) => "CineCamera",
            CameraKind::SceneCapture(_) => "SceneCapture",
            CameraKind::Unsupported { type_name } => type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_json() -> Result<(), Box<dyn std::error::Error>> {
        let kind: CameraKind = serde_json::from_str(
            r#"{"type": "cine_camera", "focal_length_mm": 50.0, "sensor_width_mm": 36.0, "sensor_height_mm": 24.0}"#,
        )?;
        assert_eq!(
            kind,
            CameraKind::CineCamera(CineCameraParams {
                focal_length_mm: 50.0,
                sensor_width_mm: 36.0,
                sensor_height_mm: 24.0,
            })
        );

        let kind: CameraKind = serde_json::from_str(r#"{"type": "scene_capture", "fov_degrees": 60.0}"#)?;
        assert_eq!(kind.name(), "SceneCapture");
        Ok(())
    }
}
