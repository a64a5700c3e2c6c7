use glam::{DMat4, DQuat, DVec3};

use crate::{error::GeometryError, rotator::Rotator};

/// The world pose of a scene object: location, rotation and per-axis scale.
///
/// The pose is read from the scene as-is and never mutated by the exporters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space location.
    pub location: DVec3,
    /// World-space rotation.
    pub rotation: DQuat,
    /// Per-axis scale.
    pub scale: DVec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// The identity pose: at the origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        location: DVec3::ZERO,
        rotation: DQuat::IDENTITY,
        scale: DVec3::ONE,
    };

    /// Create a new pose.
    pub fn new(location: DVec3, rotation: DQuat, scale: DVec3) -> Self {
        Self {
            location,
            rotation,
            scale,
        }
    }

    /// Create a pose from a location, a rotator in degrees and a scale.
    pub fn from_rotator(location: DVec3, rotator: Rotator, scale: DVec3) -> Self {
        Self::new(location, rotator.to_quat(), scale)
    }

    /// The rotation as pitch, yaw and roll in degrees.
    pub fn rotator(&self) -> Rotator {
        Rotator::from_quat(self.rotation)
    }

    /// The forward transform, mapping camera-local points to world points.
    pub fn camera_to_world(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scale, self.rotation, self.location)
    }

    /// The inverse transform including scale, mapping world points into the camera frame.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateScale`] if any scale axis is exactly zero.
    pub fn world_to_camera(&self) -> Result<DMat4, GeometryError> {
        if self.scale.x == 0.0 || self.scale.y == 0.0 || self.scale.z == 0.0 {
            return Err(GeometryError::DegenerateScale {
                scale: self.scale.to_array(),
            });
        }

        // (T * R * S)^-1 = S^-1 * R^T * T^-1
        let inv_scale = DMat4::from_scale(self.scale.recip());
        let inv_rotation = DMat4::from_quat(self.rotation.normalize().conjugate());
        let inv_translation = DMat4::from_translation(-self.location);

        Ok(inv_scale * inv_rotation * inv_translation)
    }
}

/// Compute the world-to-camera (extrinsic) matrix of a pose.
///
/// This is the inverse of the pose's world transform, scale included, in the column-vector
/// convention `x_cam = M * x_world`.
///
/// # Arguments
///
/// * `pose` - The camera pose in world space.
///
/// # Returns
///
/// The 4x4 homogeneous world-to-camera matrix.
pub fn to_world_to_camera_matrix(pose: &Pose) -> Result<DMat4, GeometryError> {
    pose.world_to_camera()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_mat4_eq(a: &DMat4, b: &DMat4) {
        for (x, y) in a.to_cols_array().iter().zip(b.to_cols_array().iter()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_identity_pose_gives_identity_matrix() -> Result<(), GeometryError> {
        let m = to_world_to_camera_matrix(&Pose::IDENTITY)?;
        assert_eq!(m, DMat4::IDENTITY);
        Ok(())
    }

    #[test]
    fn test_inverse_of_forward_transform() -> Result<(), GeometryError> {
        let pose = Pose::from_rotator(
            DVec3::new(120.0, -40.0, 250.0),
            Rotator::new(-15.0, 30.0, 5.0),
            DVec3::new(1.0, 2.0, 0.5),
        );
        let product = pose.world_to_camera()? * pose.camera_to_world();
        assert_mat4_eq(&product, &DMat4::IDENTITY);
        Ok(())
    }

    #[test]
    fn test_translation_only() -> Result<(), GeometryError> {
        let pose = Pose::new(DVec3::new(1.0, 2.0, 3.0), DQuat::IDENTITY, DVec3::ONE);
        let m = pose.world_to_camera()?;
        let p = m.transform_point3(DVec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(p.length(), 0.0);
        assert_relative_eq!(m.w_axis.x, -1.0);
        assert_relative_eq!(m.w_axis.y, -2.0);
        assert_relative_eq!(m.w_axis.z, -3.0);
        Ok(())
    }

    #[test]
    fn test_non_uniform_scale_is_inverted() -> Result<(), GeometryError> {
        let pose = Pose::new(DVec3::ZERO, DQuat::IDENTITY, DVec3::new(2.0, 4.0, 0.5));
        let p = pose.world_to_camera()?.transform_point3(DVec3::new(2.0, 4.0, 0.5));
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 1.0);
        assert_relative_eq!(p.z, 1.0);
        Ok(())
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        let pose = Pose::new(DVec3::ZERO, DQuat::IDENTITY, DVec3::new(1.0, 0.0, 1.0));
        assert_eq!(
            pose.world_to_camera(),
            Err(GeometryError::DegenerateScale {
                scale: [1.0, 0.0, 1.0]
            })
        );
    }
}
