#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the camera module.
pub mod error;

/// Text report and JSON documents for camera data.
pub mod export;

/// Computation of intrinsics and extrinsics from scene cameras.
pub mod extractor;

/// The pinhole camera model and its 3x3 matrix.
pub mod intrinsics;

/// The supported camera kinds and their native parameters.
pub mod kind;

pub use error::CameraError;
pub use export::{export_camera_data, CameraExportSettings};
pub use extractor::{compute_intrinsics, get_extrinsics, CameraSource};
pub use intrinsics::{to_intrinsic_matrix, CameraIntrinsics, ImageSize};
pub use kind::{CameraKind, CineCameraParams, SceneCaptureParams};
