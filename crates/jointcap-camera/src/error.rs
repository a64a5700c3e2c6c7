/// An error type for the camera module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    /// The sensor or image dimensions cannot produce a positive focal length.
    #[error("Invalid sensor or image dimensions: {0}")]
    InvalidSensorDimensions(String),

    /// The camera kind needs a render target for its image size, and none was given.
    #[error("A render target is required to compute the intrinsics of a {0} camera")]
    MissingRenderTarget(String),

    /// The camera kind has no intrinsics formula.
    #[error("Unsupported camera kind: {0}")]
    UnsupportedCameraKind(String),

    /// The field of view is outside (0, 180) degrees.
    #[error("Invalid field of view: {0} degrees")]
    InvalidFieldOfView(f64),
}
