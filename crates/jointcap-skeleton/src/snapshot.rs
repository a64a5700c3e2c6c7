use std::collections::HashMap;

use jointcap_geometry::DVec3;

use crate::{
    body::{resolve_world_position, SkeletalBody},
    partition::{Partition, PartitionKind},
};

/// The world positions of every joint of a body, read once.
///
/// All partitions of a body are cut from the same snapshot, so they agree on every shared
/// joint even if the body keeps animating.
#[derive(Debug, Clone, PartialEq)]
pub struct BonePoseSnapshot {
    region_tag: String,
    names: Vec<String>,
    positions: Vec<DVec3>,
    index: HashMap<String, usize>,
}

impl BonePoseSnapshot {
    /// Read the current pose of every joint of the reference skeleton.
    ///
    /// # Arguments
    ///
    /// * `body` - The skeletal body to read.
    /// * `region_tag` - Label of the body in output files, e.g. `"Body"` or `"Face"`.
    pub fn capture(body: &dyn SkeletalBody, region_tag: &str) -> Self {
        let mut names = Vec::new();
        let mut positions = Vec::new();
        for name in body.bone_names() {
            let position = resolve_world_position(body, &name).unwrap_or_else(|| {
                log::warn!(
                    "Bone '{}' is listed by '{}' but has no pose. Using the origin.",
                    name,
                    body.component_name()
                );
                DVec3::ZERO
            });
            names.push(name);
            positions.push(position);
        }
        Self::from_parts(region_tag, names, positions)
    }

    fn from_parts(region_tag: &str, names: Vec<String>, positions: Vec<DVec3>) -> Self {
        // first occurrence wins on duplicate names
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }
        Self {
            region_tag: region_tag.to_string(),
            names,
            positions,
            index,
        }
    }

    /// The region tag of the body the snapshot was taken from.
    pub fn region_tag(&self) -> &str {
        &self.region_tag
    }

    /// Number of joints in the snapshot.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the body has no joints.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of a joint in the snapshot.
    pub fn resolve(&self, joint_name: &str) -> Option<DVec3> {
        self.index.get(joint_name).map(|&i| self.positions[i])
    }

    /// Cut one partition from the snapshot.
    ///
    /// Catalog joints missing from the body keep their slot, at the origin, and are listed
    /// in [`Partition::unresolved`].
    pub fn partition(&self, kind: PartitionKind) -> Partition {
        let Some(catalog) = kind.catalog() else {
            return Partition {
                kind,
                names: self.names.clone(),
                positions: self.positions.clone(),
                unresolved: Vec::new(),
            };
        };

        let joints = catalog.joints();
        let mut names = Vec::with_capacity(joints.len());
        let mut positions = Vec::with_capacity(joints.len());
        let mut unresolved = Vec::new();
        for &joint in joints {
            let position = self.resolve(joint).unwrap_or_else(|| {
                unresolved.push(joint.to_string());
                DVec3::ZERO
            });
            names.push(joint.to_string());
            positions.push(position);
        }

        Partition {
            kind,
            names,
            positions,
            unresolved,
        }
    }

    /// Every partition that applies to the snapshot's region.
    pub fn partitions(&self) -> Vec<Partition> {
        PartitionKind::for_region(&self.region_tag)
            .into_iter()
            .map(|kind| self.partition(kind))
            .collect()
    }
}
