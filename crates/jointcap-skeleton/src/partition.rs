use crate::{body::BODY_COMPONENT, body::FACE_COMPONENT, catalog::KeypointCatalog};

/// One named selection of joints that is exported as its own pair of files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartitionKind {
    /// Every joint of a body, written directly under the output root.
    AllBones {
        /// The body's region tag, e.g. `"Body"` or `"Face"`.
        region_tag: String,
    },
    /// The facial keypoint catalog.
    FaceSubset,
    /// The upper body keypoint catalog.
    UpperBodySubset,
    /// The lower body keypoint catalog.
    LowerBodySubset,
}

impl PartitionKind {
    /// The partitions exported for a body with the given region tag.
    ///
    /// Every body gets its full bone list. Faces additionally get the facial subset and
    /// bodies the upper and lower body subsets.
    pub fn for_region(region_tag: &str) -> Vec<PartitionKind> {
        let mut kinds = vec![PartitionKind::AllBones {
            region_tag: region_tag.to_string(),
        }];
        match region_tag {
            FACE_COMPONENT => kinds.push(PartitionKind::FaceSubset),
            BODY_COMPONENT => {
                kinds.push(PartitionKind::UpperBodySubset);
                kinds.push(PartitionKind::LowerBodySubset);
            }
            _ => {}
        }
        kinds
    }

    /// The keypoint catalog selecting the joints, or `None` for all bones.
    pub fn catalog(&self) -> Option<KeypointCatalog> {
        match self {
            PartitionKind::AllBones { .. } => None,
            PartitionKind::FaceSubset => Some(KeypointCatalog::Face),
            PartitionKind::UpperBodySubset => Some(KeypointCatalog::UpperBody),
            PartitionKind::LowerBodySubset => Some(KeypointCatalog::LowerBody),
        }
    }

    /// The label written as `MeshType` in the JSON document.
    pub fn mesh_type(&self) -> &str {
        match self {
            PartitionKind::AllBones { region_tag } => region_tag,
            PartitionKind::FaceSubset => "FaceSubset",
            PartitionKind::UpperBodySubset => "UpperBodySubset",
            PartitionKind::LowerBodySubset => "LowerBodySubset",
        }
    }

    /// The sub-folder under the output root, if any.
    pub fn sub_folder(&self) -> Option<&'static str> {
        match self {
            PartitionKind::AllBones { .. } => None,
            PartitionKind::FaceSubset => Some("FaceSubset"),
            PartitionKind::UpperBodySubset => Some("UpperBodySubset"),
            PartitionKind::LowerBodySubset => Some("LowerBodySubset"),
        }
    }

    /// The first line of the text file, followed by a blank line.
    pub fn text_header(&self) -> String {
        match self {
            PartitionKind::AllBones { region_tag } => format!("{region_tag} Bone Locations:\n\n"),
            PartitionKind::FaceSubset => {
                format!("{FACE_COMPONENT} YoloPose Keypoint Locations:\n\n")
            }
            PartitionKind::UpperBodySubset => {
                format!("{BODY_COMPONENT} YoloPose Upper Body Keypoint Locations:\n\n")
            }
            PartitionKind::LowerBodySubset => {
                format!("{BODY_COMPONENT} YoloPose Lower Body Keypoint Locations:\n\n")
            }
        }
    }

    /// The text file name for an actor.
    ///
    /// # Arguments
    ///
    /// * `actor_name` - The owning actor's display name.
    /// * `text_base` - The configured base name for full bone lists.
    pub fn text_file_name(&self, actor_name: &str, text_base: &str) -> String {
        match self {
            PartitionKind::AllBones { region_tag } => {
                format!("{actor_name}_{region_tag}_{text_base}")
            }
            PartitionKind::FaceSubset => format!("{actor_name}_FaceSubset.txt"),
            PartitionKind::UpperBodySubset => {
                format!("{actor_name}_UpperBodySubset_UpperBodyKeypoints.txt")
            }
            PartitionKind::LowerBodySubset => {
                format!("{actor_name}_LowerBodySubset_LowerBodyKeypoints.txt")
            }
        }
    }

    /// The JSON file name for an actor: `<Actor>_<MeshType>_<JsonBase>`.
    pub fn json_file_name(&self, actor_name: &str, json_base: &str) -> String {
        format!("{}_{}_{}", actor_name, self.mesh_type(), json_base)
    }
}

/// The joints and positions selected for one partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Which partition this is.
    pub kind: PartitionKind,
    /// Joint names, in export order.
    pub names: Vec<String>,
    /// World positions, parallel to `names`.
    pub positions: Vec<jointcap_geometry::DVec3>,
    /// Catalog joints that the body does not have. They are exported at the origin.
    pub unresolved: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partitions_per_region() {
        assert_eq!(
            PartitionKind::for_region("Face"),
            vec![
                PartitionKind::AllBones {
                    region_tag: "Face".to_string()
                },
                PartitionKind::FaceSubset
            ]
        );
        assert_eq!(PartitionKind::for_region("Body").len(), 3);
        assert_eq!(PartitionKind::for_region("Hair").len(), 1);
    }

    #[test]
    fn test_file_names() {
        let all = PartitionKind::AllBones {
            region_tag: "Body".to_string(),
        };
        assert_eq!(
            all.text_file_name("Hero", "BoneLocations.txt"),
            "Hero_Body_BoneLocations.txt"
        );
        assert_eq!(
            all.json_file_name("Hero", "BoneLocations.json"),
            "Hero_Body_BoneLocations.json"
        );
        assert_eq!(
            PartitionKind::FaceSubset.text_file_name("Hero", "BoneLocations.txt"),
            "Hero_FaceSubset.txt"
        );
        assert_eq!(
            PartitionKind::FaceSubset.json_file_name("Hero", "BoneLocations.json"),
            "Hero_FaceSubset_BoneLocations.json"
        );
        assert_eq!(
            PartitionKind::LowerBodySubset.text_file_name("Hero", "ignored.txt"),
            "Hero_LowerBodySubset_LowerBodyKeypoints.txt"
        );
    }

    #[test]
    fn test_headers() {
        let all = PartitionKind::AllBones {
            region_tag: "Face".to_string(),
        };
        assert_eq!(all.text_header(), "Face Bone Locations:\n\n");
        assert_eq!(
            PartitionKind::UpperBodySubset.text_header(),
            "Body YoloPose Upper Body Keypoint Locations:\n\n"
        );
        assert_eq!(all.sub_folder(), None);
        assert_eq!(PartitionKind::FaceSubset.sub_folder(), Some("FaceSubset"));
    }
}
