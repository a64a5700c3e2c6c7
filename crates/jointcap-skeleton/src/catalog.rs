/// Facial keypoints: ears, eyes and nose tip.
pub const FACE_KEYPOINTS: &[&str] = &[
    // left ear
    "FACIAL_L_Ear1",
    "FACIAL_L_Ear2",
    "FACIAL_L_Ear3",
    "FACIAL_L_Ear4",
    // right ear
    "FACIAL_R_Ear1",
    "FACIAL_R_Ear2",
    "FACIAL_R_Ear3",
    "FACIAL_R_Ear4",
    // eyes
    "FACIAL_L_EyeParallel",
    "FACIAL_R_EyeParallel",
    // nose tip
    "FACIAL_C_12IPV_NoseTip1",
    "FACIAL_C_12IPV_NoseTip2",
    "FACIAL_C_12IPV_NoseTip3",
    "FACIAL_L_12IPV_NoseTip1",
    "FACIAL_L_12IPV_NoseTip2",
    "FACIAL_L_12IPV_NoseTip3",
    "FACIAL_R_12IPV_NoseTip1",
    "FACIAL_R_12IPV_NoseTip2",
    "FACIAL_R_12IPV_NoseTip3",
];

/// Upper body keypoints: spine, clavicles and both arms.
pub const UPPER_BODY_KEYPOINTS: &[&str] = &[
    // spine
    "spine_01",
    "spine_02",
    "spine_03",
    "spine_04",
    "spine_05",
    // left arm
    "wrist_inner_l",
    "wrist_outer_l",
    "hand_l",
    "middle_01_mcp_l",
    "clavicle_l",
    "upperarm_l",
    "upperarm_correctiveRoot_l",
    "upperarm_bck_l",
    "upperarm_fwd_l",
    "upperarm_in_l",
    "upperarm_out_l",
    "lowerarm_l",
    "lowerarm_twist_02_l",
    "lowerarm_twist_01_l",
    "lowerarm_correctiveRoot_l",
    "lowerarm_in_l",
    "lowerarm_out_l",
    "lowerarm_fwd_l",
    "lowerarm_bck_l",
    "upperarm_twist_01_l",
    "upperarm_twistCor_01_l",
    "upperarm_twist_02_l",
    "upperarm_tricep_l",
    "upperarm_bicep_l",
    "upperarm_twistCor_02_l",
    "clavicle_out_l",
    "clavicle_scap_l",
    // right arm
    "wrist_inner_r",
    "wrist_outer_r",
    "hand_r",
    "middle_01_mcp_r",
    "clavicle_r",
    "upperarm_r",
    "upperarm_correctiveRoot_r",
    "upperarm_bck_r",
    "upperarm_in_r",
    "upperarm_fwd_r",
    "upperarm_out_r",
    "lowerarm_r",
    "lowerarm_twist_02_r",
    "lowerarm_twist_01_r",
    "lowerarm_correctiveRoot_r",
    "lowerarm_out_r",
    "lowerarm_in_r",
    "lowerarm_fwd_r",
    "lowerarm_bck_r",
    "upperarm_twist_01_r",
    "upperarm_twistCor_01_r",
    "upperarm_twist_02_r",
    "upperarm_tricep_r",
    "upperarm_bicep_r",
    "upperarm_twistCor_02_r",
    "clavicle_out_r",
    "clavicle_scap_r",
];

/// Lower body keypoints: thighs, calves, feet and toes.
pub const LOWER_BODY_KEYPOINTS: &[&str] = &[
    "thigh_r",
    "bigtoe_01_r",
    "bigtoe_01_l",
    "bigtoe_02_r",
    "bigtoe_02_l",
    // right leg
    "calf_r",
    "foot_r",
    "ankle_bck_r",
    "ankle_fwd_r",
    "calf_twist_02_r",
    "calf_twist_01_r",
    "calf_correctiveRoot_r",
    "calf_kneeBack_r",
    "calf_knee_r",
    "thigh_twist_01_r",
    "thigh_twistCor_01_r",
    "thigh_twist_02_r",
    "thigh_twistCor_02_r",
    "thigh_correctiveRoot_r",
    "thigh_fwd_r",
    "thigh_bck_r",
    "thigh_out_r",
    "thigh_in_r",
    "thigh_bck_lwr_r",
    "thigh_fwd_lwr_r",
    // left leg
    "thigh_l",
    "calf_l",
    "foot_l",
    "ankle_bck_l",
    "ankle_fwd_l",
    "calf_twist_02_l",
    "calf_twistCor_02_l",
    "calf_twist_01_l",
    "calf_correctiveRoot_l",
    "calf_kneeBack_l",
    "calf_knee_l",
    "thigh_twist_01_l",
    "thigh_twistCor_01_l",
    "thigh_twist_02_l",
    "thigh_twistCor_02_l",
    "thigh_correctiveRoot_l",
    "thigh_bck_l",
    "thigh_fwd_l",
    "thigh_out_l",
    "thigh_bck_lwr_l",
    "thigh_in_l",
    "thigh_fwd_lwr_l",
];

/// A curated, ordered list of joint names for one body region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypointCatalog {
    /// [`FACE_KEYPOINTS`]
    Face,
    /// [`UPPER_BODY_KEYPOINTS`]
    UpperBody,
    /// [`LOWER_BODY_KEYPOINTS`]
    LowerBody,
}

impl KeypointCatalog {
    /// The joint names, in export order.
    pub fn joints(&self) -> &'static [&'static str] {
        match self {
            KeypointCatalog::Face => FACE_KEYPOINTS,
            KeypointCatalog::UpperBody => UPPER_BODY_KEYPOINTS,
            KeypointCatalog::LowerBody => LOWER_BODY_KEYPOINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(KeypointCatalog::Face.joints().len(), 19);
        assert_eq!(KeypointCatalog::UpperBody.joints().len(), 59);
        assert_eq!(KeypointCatalog::LowerBody.joints().len(), 47);
    }

    #[test]
    fn test_catalogs_have_no_duplicates() {
        for catalog in [
            KeypointCatalog::Face,
            KeypointCatalog::UpperBody,
            KeypointCatalog::LowerBody,
        ] {
            let unique: HashSet<_> = catalog.joints().iter().collect();
            assert_eq!(unique.len(), catalog.joints().len(), "{catalog:?}");
        }
    }

    #[test]
    fn test_upper_body_is_bilateral() {
        let joints = UPPER_BODY_KEYPOINTS;
        for name in joints.iter().filter(|n| n.ends_with("_l")) {
            let mirrored = format!("{}_r", &name[..name.len() - 2]);
            assert!(joints.contains(&mirrored.as_str()), "missing {mirrored}");
        }
    }
}
