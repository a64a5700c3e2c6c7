use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A vector serialized as `{"X": .., "Y": .., "Z": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XyzRecord {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl From<DVec3> for XyzRecord {
    fn from(v: DVec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<XyzRecord> for DVec3 {
    fn from(r: XyzRecord) -> Self {
        DVec3::new(r.x, r.y, r.z)
    }
}
