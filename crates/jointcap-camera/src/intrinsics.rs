use jointcap_geometry::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

/// Image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Create a new image size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The intrinsic parameters of a pinhole camera, in pixel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntrinsics {
    /// The focal length in the x direction (fx).
    pub focal_length_x: f64,
    /// The focal length in the y direction (fy).
    pub focal_length_y: f64,
    /// The x coordinate of the principal point (cx).
    pub principal_point_x: f64,
    /// The y coordinate of the principal point (cy).
    pub principal_point_y: f64,
    /// The image width in pixels.
    pub image_width: u32,
    /// The image height in pixels.
    pub image_height: u32,
}

impl CameraIntrinsics {
    /// True when the image size and both focal lengths are strictly positive and finite.
    pub fn is_valid(&self) -> bool {
        self.image_width > 0
            && self.image_height > 0
            && self.focal_length_x.is_finite()
            && self.focal_length_y.is_finite()
            && self.focal_length_x > 0.0
            && self.focal_length_y > 0.0
    }

    /// The image size.
    pub fn image_size(&self) -> ImageSize {
        ImageSize::new(self.image_width, self.image_height)
    }

    /// The 3x3 camera matrix K.
    pub fn intrinsic_matrix(&self) -> DMat3 {
        to_intrinsic_matrix(self)
    }
}

/// Build the pinhole intrinsic matrix.
///
/// ```text
/// K = | fx  0 cx |
///     |  0 fy cy |
///     |  0  0  1 |
/// ```
pub fn to_intrinsic_matrix(intrinsics: &CameraIntrinsics) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(intrinsics.focal_length_x, 0.0, 0.0),
        DVec3::new(0.0, intrinsics.focal_length_y, 0.0),
        DVec3::new(intrinsics.principal_point_x, intrinsics.principal_point_y, 1.0),
    )
}
