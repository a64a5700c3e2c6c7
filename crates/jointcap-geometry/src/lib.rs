#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the geometry module.
pub mod error;

/// Row-major export of glam matrices.
pub mod matrix;

/// Rigid-plus-scale poses and the world-to-camera transform.
pub mod pose;

/// Serializable vector records.
pub mod record;

/// Pitch/yaw/roll rotations in degrees.
pub mod rotator;

pub use error::GeometryError;
pub use pose::{to_world_to_camera_matrix, Pose};
pub use record::XyzRecord;
pub use rotator::Rotator;

// re-export the math types so downstream crates agree on one glam version
pub use glam::{DMat3, DMat4, DQuat, DVec3};
