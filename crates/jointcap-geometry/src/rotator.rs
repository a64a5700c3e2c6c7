use glam::{DQuat, EulerRot};
use serde::{Deserialize, Serialize};

use crate::matrix::positive_zero;

/// A rotation expressed as pitch, yaw and roll angles in degrees.
///
/// Yaw turns about the Z axis, pitch about Y and roll about X. The angles are applied
/// intrinsically in Z-Y-X order, i.e. yaw first.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rotator {
    /// Rotation about the Y axis in degrees.
    pub pitch: f64,
    /// Rotation about the Z axis in degrees.
    pub yaw: f64,
    /// Rotation about the X axis in degrees.
    pub roll: f64,
}

impl Rotator {
    /// The zero rotation.
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    /// Create a new rotator from angles in degrees.
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Convert the rotator into a unit quaternion.
    pub fn to_quat(&self) -> DQuat {
        DQuat::from_euler(
            EulerRot::ZYX,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    /// Decompose a quaternion into pitch, yaw and roll.
    ///
    /// The quaternion is normalized first, so slightly drifted inputs are accepted.
    pub fn from_quat(q: DQuat) -> Self {
        let (yaw, pitch, roll) = q.normalize().to_euler(EulerRot::ZYX);
        Self {
            pitch: positive_zero(pitch.to_degrees()),
            yaw: positive_zero(yaw.to_degrees()),
            roll: positive_zero(roll.to_degrees()),
        }
    }
}
