use jointcap_geometry::{
    matrix::{mat3_to_rows, mat4_to_rows},
    DMat4, Pose, Rotator, XyzRecord,
};
use jointcap_io::{writer, ExportContext, ExportReport, ExportTarget};
use serde::{Deserialize, Serialize};

use crate::intrinsics::CameraIntrinsics;

/// Directory under the output root holding camera reports and JSON documents.
pub const CAMERA_DATA_DIR: &str = "CameraData";

/// Directory under the output root holding captured frames.
pub const CAMERA_FRAMES_DIR: &str = "CameraFrames";

/// Per-camera export capability. Cameras without it are not exported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraExportSettings {
    /// File name of the text report. Defaults to `<CameraName>.txt`.
    pub camera_data_filename: Option<String>,
    /// File name of the captured frame. Defaults to `<CameraName>_Frame.png`.
    pub frame_filename: Option<String>,
}

impl CameraExportSettings {
    /// The report file name for a camera.
    pub fn report_filename(&self, camera_name: &str) -> String {
        non_empty(&self.camera_data_filename).unwrap_or_else(|| format!("{camera_name}.txt"))
    }

    /// The frame file name for a camera.
    pub fn frame_filename(&self, camera_name: &str) -> String {
        non_empty(&self.frame_filename).unwrap_or_else(|| format!("{camera_name}_Frame.png"))
    }
}

fn non_empty(name: &Option<String>) -> Option<String> {
    name.as_ref().filter(|s| !s.is_empty()).cloned()
}

/// `{"fx": .., "fy": ..}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocalLength {
    /// Focal length along x in pixels.
    pub fx: f64,
    /// Focal length along y in pixels.
    pub fy: f64,
}

/// `{"cx": .., "cy": ..}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipalPoint {
    /// Principal point x in pixels.
    pub cx: f64,
    /// Principal point y in pixels.
    pub cy: f64,
}

/// `{"Width": .., "Height": ..}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageDimensions {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

/// The `Intrinsics` section of the intrinsics document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IntrinsicsSection {
    /// Focal lengths.
    pub focal_length: FocalLength,
    /// Principal point.
    pub principal_point: PrincipalPoint,
    /// Image size.
    pub image_dimensions: ImageDimensions,
    /// The 3x3 matrix K, row-major.
    pub intrinsic_matrix: [[f64; 3]; 3],
}

/// The intrinsics JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IntrinsicsDocument {
    /// The camera name.
    pub camera_name: String,
    /// The intrinsic parameters.
    pub intrinsics: IntrinsicsSection,
}

impl IntrinsicsDocument {
    /// Build the document for a camera.
    pub fn new(camera_name: &str, intrinsics: &CameraIntrinsics) -> Self {
        Self {
            camera_name: camera_name.to_string(),
            intrinsics: IntrinsicsSection {
                focal_length: FocalLength {
                    fx: intrinsics.focal_length_x,
                    fy: intrinsics.focal_length_y,
                },
                principal_point: PrincipalPoint {
                    cx: intrinsics.principal_point_x,
                    cy: intrinsics.principal_point_y,
                },
                image_dimensions: ImageDimensions {
                    width: intrinsics.image_width,
                    height: intrinsics.image_height,
                },
                intrinsic_matrix: mat3_to_rows(&intrinsics.intrinsic_matrix()),
            },
        }
    }
}

/// The `Extrinsics` section of the extrinsics document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtrinsicsSection {
    /// World location.
    pub location: XyzRecord,
    /// World rotation in degrees.
    pub rotation: Rotator,
    /// Per-axis scale.
    pub scale: XyzRecord,
    /// The 4x4 world-to-camera matrix, row-major.
    pub extrinsic_matrix: [[f64; 4]; 4],
}

/// The extrinsics JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtrinsicsDocument {
    /// The camera name.
    pub camera_name: String,
    /// The extrinsic parameters.
    pub extrinsics: ExtrinsicsSection,
}

impl ExtrinsicsDocument {
    /// Build the document for a camera from its pose and world-to-camera matrix.
    pub fn new(camera_name: &str, pose: &Pose, world_to_camera: &DMat4) -> Self {
        Self {
            camera_name: camera_name.to_string(),
            extrinsics: ExtrinsicsSection {
                location: pose.location.into(),
                rotation: pose.rotator(),
                scale: pose.scale.into(),
                extrinsic_matrix: mat4_to_rows(world_to_camera),
            },
        }
    }
}

/// Format the combined human readable report.
pub fn format_camera_report(
    camera_name: &str,
    pose: &Pose,
    world_to_camera: &DMat4,
    intrinsics: &CameraIntrinsics,
) -> String {
    let location = pose.location;
    let rotation = pose.rotator();
    let scale = pose.scale;

    let extrinsics = format!(
        "Extrinsics:\n  Location: X={:.6}, Y={:.6}, Z={:.6}\n  Rotation: Pitch={:.6}, Yaw={:.6}, Roll={:.6}\n  Scale: X={:.6}, Y={:.6}, Z={:.6}",
        location.x, location.y, location.z,
        rotation.pitch, rotation.yaw, rotation.roll,
        scale.x, scale.y, scale.z,
    );

    let mut extrinsic_matrix =
        String::from("Extrinsic Matrix (World to Camera, 4x4 homogenous):\n");
    for row in mat4_to_rows(world_to_camera) {
        extrinsic_matrix.push_str(&format!(
            "  {:.6} {:.6} {:.6} {:.6}\n",
            row[0], row[1], row[2], row[3]
        ));
    }

    let intrinsic_params = format!(
        "Intrinsics:\n  Focal Length (fx, fy): {:.6}, {:.6}\n  Principal Point (cx, cy): {:.6}, {:.6}\n  Image Dimensions: Width={}, Height={}",
        intrinsics.focal_length_x, intrinsics.focal_length_y,
        intrinsics.principal_point_x, intrinsics.principal_point_y,
        intrinsics.image_width, intrinsics.image_height,
    );

    let mut intrinsic_matrix = String::from("Intrinsic Matrix (3x3):\n");
    for row in mat3_to_rows(&intrinsics.intrinsic_matrix()) {
        intrinsic_matrix.push_str(&format!("  {:.6} {:.6} {:.6}\n", row[0], row[1], row[2]));
    }

    format!(
        "Camera Name: {camera_name}\n\n{extrinsics}\n\n{extrinsic_matrix}\n\n{intrinsic_params}\n\n{intrinsic_matrix}"
    )
}

/// `<root>/CameraData/<filename>`
pub fn report_target(ctx: &ExportContext, filename: &str) -> ExportTarget {
    ExportTarget::new(ctx.output_root(), filename).with_sub_folder(CAMERA_DATA_DIR)
}

/// `<root>/CameraData/<CameraName>/Intrinsics_<CameraName>.json`
pub fn intrinsics_target(ctx: &ExportContext) -> ExportTarget {
    let name = ctx.display_name();
    ExportTarget::new(ctx.output_root(), format!("Intrinsics_{name}.json"))
        .with_sub_folder(format!("{CAMERA_DATA_DIR}/{name}"))
}

/// `<root>/CameraData/<CameraName>/Extrinsics_<CameraName>.json`
pub fn extrinsics_target(ctx: &ExportContext) -> ExportTarget {
    let name = ctx.display_name();
    ExportTarget::new(ctx.output_root(), format!("Extrinsics_{name}.json"))
        .with_sub_folder(format!("{CAMERA_DATA_DIR}/{name}"))
}

/// `<root>/CameraFrames/<filename>`
pub fn frame_target(ctx: &ExportContext, filename: &str) -> ExportTarget {
    ExportTarget::new(ctx.output_root(), filename).with_sub_folder(CAMERA_FRAMES_DIR)
}

/// Write the text report and both JSON documents for one camera.
///
/// The three artifacts are written independently: a failure in one is logged and
/// recorded in the returned report, and the others are still attempted.
///
/// # Arguments
///
/// * `ctx` - The export context; its display name is the camera name.
/// * `pose` - The camera's world pose.
/// * `intrinsics` - The camera's intrinsics.
/// * `settings` - File naming overrides.
pub fn export_camera_data(
    ctx: &ExportContext,
    pose: &Pose,
    intrinsics: &CameraIntrinsics,
    settings: &CameraExportSettings,
) -> ExportReport {
    let camera_name = ctx.display_name();
    let mut report = ExportReport::default();

    let report_target = report_target(ctx, &settings.report_filename(camera_name));
    let intrinsics_target = intrinsics_target(ctx);
    let extrinsics_target = extrinsics_target(ctx);

    let world_to_camera = pose.world_to_camera();

    match &world_to_camera {
        Ok(m) => {
            let contents = format_camera_report(camera_name, pose, m, intrinsics);
            report.record(
                "camera data",
                report_target.path(),
                writer::write_text(&report_target, &contents),
            );
        }
        Err(e) => report.record_failure("camera data", report_target.path(), e.to_string()),
    }

    let document = IntrinsicsDocument::new(camera_name, intrinsics);
    report.record(
        "intrinsic data",
        intrinsics_target.path(),
        writer::write_json(&intrinsics_target, &document),
    );

    match &world_to_camera {
        Ok(m) => {
            let document = ExtrinsicsDocument::new(camera_name, pose, m);
            report.record(
                "extrinsic data",
                extrinsics_target.path(),
                writer::write_json(&extrinsics_target, &document),
            );
        }
        Err(e) => report.record_failure("extrinsic data", extrinsics_target.path(), e.to_string()),
    }

    report
}
