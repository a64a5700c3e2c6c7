use jointcap_geometry::Pose;

use crate::{
    error::CameraError,
    intrinsics::{CameraIntrinsics, ImageSize},
    kind::{CameraKind, CineCameraParams, SceneCaptureParams},
};

/// Image size assumed for a cinematic camera that has no render target.
pub const DEFAULT_IMAGE_SIZE: ImageSize = ImageSize::new(1920, 1080);

/// Read access to a camera object owned by the scene.
pub trait CameraSource {
    /// The camera's display label, falling back to its object name when the label is empty.
    fn name(&self) -> String;

    /// The kind of camera and its native parameters.
    fn kind(&self) -> CameraKind;

    /// The camera's current world pose.
    fn world_pose(&self) -> Pose;
}

/// Return the camera's current world pose, unmodified.
pub fn get_extrinsics<C: CameraSource + ?Sized>(camera: &C) -> Pose {
    camera.world_pose()
}

/// Compute pinhole intrinsics for a camera.
///
/// # Arguments
///
/// * `kind` - The camera kind with its native parameters.
/// * `render_target_size` - The size of the camera's render target, if it has one.
///
/// # Returns
///
/// The intrinsics in pixel units, with the principal point at the image centre.
///
/// # Errors
///
/// * [`CameraError::InvalidSensorDimensions`] if the sensor or image size is not positive.
/// * [`CameraError::MissingRenderTarget`] for a scene capture without a render target.
/// * [`CameraError::InvalidFieldOfView`] for a scene capture FOV outside (0, 180) degrees.
/// * [`CameraError::UnsupportedCameraKind`] for any other camera kind.
pub fn compute_intrinsics(
    kind: &CameraKind,
    render_target_size: Option<ImageSize>,
) -> Result<CameraIntrinsics, CameraError> {
    match kind {
        CameraKind::CineCamera(params) => {
            let image_size = render_target_size.unwrap_or_else(|| {
                log::warn!(
                    "No render target provided for a CineCamera. Using default image dimensions ({}).",
                    DEFAULT_IMAGE_SIZE
                );
                DEFAULT_IMAGE_SIZE
            });
            cine_camera_intrinsics(params, image_size)
        }
        CameraKind::SceneCapture(params) => {
            let image_size = render_target_size
                .ok_or_else(|| CameraError::MissingRenderTarget(kind.name().to_string()))?;
            scene_capture_intrinsics(params, image_size)
        }
        CameraKind::Unsupported { type_name } => {
            Err(CameraError::UnsupportedCameraKind(type_name.clone()))
        }
    }
}

/// fx = f_mm * width / sensor_width_mm, fy = f_mm * height / sensor_height_mm
fn cine_camera_intrinsics(
    params: &CineCameraParams,
    image_size: ImageSize,
) -> Result<CameraIntrinsics, CameraError> {
    // NOTE: negated comparisons so that NaN is rejected as well
    if !(params.sensor_width_mm > 0.0 && params.sensor_height_mm > 0.0)
        || image_size.width == 0
        || image_size.height == 0
    {
        return Err(CameraError::InvalidSensorDimensions(format!(
            "sensor {}x{} mm, image {}",
            params.sensor_width_mm, params.sensor_height_mm, image_size
        )));
    }

    let width = image_size.width as f64;
    let height = image_size.height as f64;

    let intrinsics = CameraIntrinsics {
        focal_length_x: params.focal_length_mm * width / params.sensor_width_mm,
        focal_length_y: params.focal_length_mm * height / params.sensor_height_mm,
        principal_point_x: width / 2.0,
        principal_point_y: height / 2.0,
        image_width: image_size.width,
        image_height: image_size.height,
    };

    if !intrinsics.is_valid() {
        return Err(CameraError::InvalidSensorDimensions(format!(
            "focal length {} mm gives non-positive focal lengths ({}, {})",
            params.focal_length_mm, intrinsics.focal_length_x, intrinsics.focal_length_y
        )));
    }

    Ok(intrinsics)
}

/// f = (width / 2) / tan(fov / 2) on both axes, assuming square pixels.
fn scene_capture_intrinsics(
    params: &SceneCaptureParams,
    image_size: ImageSize,
) -> Result<CameraIntrinsics, CameraError> {
    if image_size.width == 0 || image_size.height == 0 {
        return Err(CameraError::InvalidSensorDimensions(format!(
            "render target {}",
            image_size
        )));
    }
    if !(params.fov_degrees > 0.0 && params.fov_degrees < 180.0) {
        return Err(CameraError::InvalidFieldOfView(params.fov_degrees));
    }

    let width = image_size.width as f64;
    let height = image_size.height as f64;
    let focal_length = (width / 2.0) / (params.fov_degrees.to_radians() / 2.0).tan();

    Ok(CameraIntrinsics {
        focal_length_x: focal_length,
        focal_length_y: focal_length,
        principal_point_x: width / 2.0,
        principal_point_y: height / 2.0,
        image_width: image_size.width,
        image_height: image_size.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use jointcap_geometry::{DQuat, DVec3};

    fn full_hd() -> Option<ImageSize> {
        Some(ImageSize::new(1920, 1080))
    }

    #[test]
    fn test_cine_camera_formula() -> Result<(), CameraError> {
        let kind = CameraKind::CineCamera(CineCameraParams {
            focal_length_mm: 35.0,
            sensor_width_mm: 23.76,
            sensor_height_mm: 13.365,
        });
        let intrinsics = compute_intrinsics(&kind, full_hd())?;
        assert_relative_eq!(intrinsics.focal_length_x, 35.0 * 1920.0 / 23.76);
        assert_relative_eq!(intrinsics.focal_length_y, 35.0 * 1080.0 / 13.365);
        assert_relative_eq!(intrinsics.focal_length_x, 2828.28, epsilon = 0.01);
        assert_relative_eq!(intrinsics.focal_length_y, 2828.28, epsilon = 0.01);
        assert_eq!(intrinsics.principal_point_x, 960.0);
        assert_eq!(intrinsics.principal_point_y, 540.0);
        assert_eq!(intrinsics.image_size(), ImageSize::new(1920, 1080));
        Ok(())
    }

    #[test]
    fn test_cine_camera_defaults_to_full_hd() -> Result<(), CameraError> {
        let kind = CameraKind::CineCamera(CineCameraParams::default());
        let intrinsics = compute_intrinsics(&kind, None)?;
        assert_eq!(intrinsics.image_size(), DEFAULT_IMAGE_SIZE);
        assert_eq!(intrinsics.principal_point_x, 960.0);
        assert_eq!(intrinsics.principal_point_y, 540.0);
        Ok(())
    }

    #[test]
    fn test_scene_capture_formula() -> Result<(), CameraError> {
        let kind = CameraKind::SceneCapture(SceneCaptureParams { fov_degrees: 90.0 });
        let intrinsics = compute_intrinsics(&kind, full_hd())?;
        assert_relative_eq!(intrinsics.focal_length_x, 960.0, epsilon = 1e-9);
        assert_relative_eq!(intrinsics.focal_length_y, 960.0, epsilon = 1e-9);
        assert_eq!(intrinsics.principal_point_x, 960.0);
        assert_eq!(intrinsics.principal_point_y, 540.0);
        Ok(())
    }

    #[test]
    fn test_zero_sensor_width_is_rejected() {
        let kind = CameraKind::CineCamera(CineCameraParams {
            sensor_width_mm: 0.0,
            ..Default::default()
        });
        let result = compute_intrinsics(&kind, full_hd());
        assert!(matches!(
            result,
            Err(CameraError::InvalidSensorDimensions(_))
        ));
    }

    #[test]
    fn test_zero_image_width_is_rejected() {
        let kind = CameraKind::CineCamera(CineCameraParams::default());
        let result = compute_intrinsics(&kind, Some(ImageSize::new(0, 1080)));
        assert!(matches!(
            result,
            Err(CameraError::InvalidSensorDimensions(_))
        ));
    }

    #[test]
    fn test_zero_focal_length_is_rejected() {
        let kind = CameraKind::CineCamera(CineCameraParams {
            focal_length_mm: 0.0,
            ..Default::default()
        });
        assert!(matches!(
            compute_intrinsics(&kind, full_hd()),
            Err(CameraError::InvalidSensorDimensions(_))
        ));
    }

    #[test]
    fn test_scene_capture_needs_render_target() {
        let kind = CameraKind::SceneCapture(SceneCaptureParams::default());
        assert_eq!(
            compute_intrinsics(&kind, None),
            Err(CameraError::MissingRenderTarget("SceneCapture".to_string()))
        );
    }

    #[test]
    fn test_scene_capture_rejects_bad_fov() {
        for fov in [0.0, 180.0, -10.0, f64::NAN] {
            let kind = CameraKind::SceneCapture(SceneCaptureParams { fov_degrees: fov });
            assert!(matches!(
                compute_intrinsics(&kind, full_hd()),
                Err(CameraError::InvalidFieldOfView(_))
            ));
        }
    }

    #[test]
    fn test_unsupported_kind() {
        let kind = CameraKind::Unsupported {
            type_name: "OrthographicCamera".to_string(),
        };
        assert_eq!(
            compute_intrinsics(&kind, full_hd()),
            Err(CameraError::UnsupportedCameraKind(
                "OrthographicCamera".to_string()
            ))
        );
    }

    struct FixedCamera(Pose);

    impl CameraSource for FixedCamera {
        fn name(&self) -> String {
            "Fixed".to_string()
        }

        fn kind(&self) -> CameraKind {
            CameraKind::SceneCapture(SceneCaptureParams::default())
        }

        fn world_pose(&self) -> Pose {
            self.0
        }
    }

    #[test]
    fn test_get_extrinsics_returns_pose() {
        let pose = Pose::new(
            DVec3::new(1.0, 2.0, 3.0),
            DQuat::from_rotation_z(0.3),
            DVec3::ONE,
        );
        assert_eq!(get_extrinsics(&FixedCamera(pose)), pose);
    }
}
