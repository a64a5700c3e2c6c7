use jointcap_io::{ExportContext, ExportReport};

use crate::{
    body::{SkeletalActor, SkeletalBody, BODY_COMPONENT, FACE_COMPONENT},
    export::{BoneDataExporter, BoneExportConfig},
    partition::PartitionKind,
    snapshot::BonePoseSnapshot,
};

/// The outcome of exporting one body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyExportReport {
    /// The region tag the body was exported under.
    pub region_tag: String,
    /// Number of joints in the body.
    pub bone_count: usize,
    /// Per-file outcome of every partition.
    pub files: ExportReport,
    /// Catalog joints the body lacks, per subset partition.
    pub unresolved: Vec<(PartitionKind, Vec<String>)>,
}

/// The outcome of exporting one actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorExportReport {
    /// The actor's display name.
    pub actor: String,
    /// One entry per body found.
    pub bodies: Vec<BodyExportReport>,
    /// Expected bodies the actor does not have.
    pub missing_bodies: Vec<String>,
}

impl ActorExportReport {
    /// True when neither the `Body` nor the `Face` body was found.
    pub fn has_no_known_bodies(&self) -> bool {
        self.bodies.is_empty() && !self.missing_bodies.is_empty()
    }

    /// True when every expected body was found and every file was written.
    pub fn is_complete(&self) -> bool {
        self.missing_bodies.is_empty() && self.bodies.iter().all(|b| b.files.is_complete())
    }
}

/// Reads skeletal bodies and exports their joints, full and per keypoint catalog.
#[derive(Debug, Clone, Default)]
pub struct SkeletalExtractor {
    exporter: BoneDataExporter,
}

impl SkeletalExtractor {
    /// Create an extractor with the given export configuration.
    pub fn new(config: BoneExportConfig) -> Self {
        Self {
            exporter: BoneDataExporter::new(config),
        }
    }

    /// The underlying bone exporter.
    pub fn exporter(&self) -> &BoneDataExporter {
        &self.exporter
    }

    /// Export every joint of a body, then the keypoint subsets for its region.
    ///
    /// The body is read once and all partitions are cut from that single snapshot.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The owning actor and output root.
    /// * `body` - The body to read.
    /// * `region_tag` - `"Face"` adds the facial subset, `"Body"` the upper and lower body
    ///   subsets. Any other tag only exports the full list.
    pub fn extract_and_export(
        &self,
        ctx: &ExportContext,
        body: &dyn SkeletalBody,
        region_tag: &str,
    ) -> BodyExportReport {
        let snapshot = BonePoseSnapshot::capture(body, region_tag);
        log::info!(
            "Listing all bones of '{}' ({}) on actor {} (total bones: {})",
            body.component_name(),
            region_tag,
            ctx.display_name(),
            snapshot.len()
        );

        let mut report = BodyExportReport {
            region_tag: region_tag.to_string(),
            bone_count: snapshot.len(),
            files: ExportReport::default(),
            unresolved: Vec::new(),
        };

        for partition in snapshot.partitions() {
            if !partition.unresolved.is_empty() {
                log::warn!(
                    "{} of {} {} keypoints not found on actor {}, exported at the origin: {}",
                    partition.unresolved.len(),
                    partition.names.len(),
                    partition.kind.mesh_type(),
                    ctx.display_name(),
                    partition.unresolved.join(", ")
                );
                report
                    .unresolved
                    .push((partition.kind.clone(), partition.unresolved.clone()));
            }

            match self.exporter.export_partition(ctx, &partition) {
                Ok(files) => report.files.merge(files),
                Err(e) => log::error!(
                    "Failed to export {} on actor {}: {}",
                    partition.kind.mesh_type(),
                    ctx.display_name(),
                    e
                ),
            }
        }

        report
    }

    /// Export the `Body` and `Face` bodies of an actor.
    ///
    /// A missing body is logged and listed in the report; the other one is still exported.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Export context whose output root is used. The display name is replaced by
    ///   the actor's name.
    /// * `actor` - The actor to export.
    pub fn process_actor(&self, ctx: &ExportContext, actor: &dyn SkeletalActor) -> ActorExportReport {
        let actor_ctx = ctx.for_owner(actor.name());
        let mut report = ActorExportReport {
            actor: actor.name(),
            bodies: Vec::new(),
            missing_bodies: Vec::new(),
        };

        let bodies = actor.skeletal_bodies();
        if bodies.is_empty() {
            log::error!("No skeletal bodies found on actor {}", report.actor);
        }

        for region in [BODY_COMPONENT, FACE_COMPONENT] {
            match actor.find_body(region) {
                Some(body) => report
                    .bodies
                    .push(self.extract_and_export(&actor_ctx, body, region)),
                None => {
                    log::error!(
                        "'{}' skeletal body not found on actor {}. Bone extraction for {} skipped.",
                        region,
                        report.actor,
                        region
                    );
                    report.missing_bodies.push(region.to_string());
                }
            }
        }

        if report.has_no_known_bodies() {
            log::error!(
                "Neither '{}' nor '{}' skeletal bodies were found on actor {}",
                BODY_COMPONENT,
                FACE_COMPONENT,
                report.actor
            );
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FACE_KEYPOINTS, LOWER_BODY_KEYPOINTS, UPPER_BODY_KEYPOINTS};
    use jointcap_geometry::DVec3;
    use std::cell::Cell;

    struct TestBody {
        name: &'static str,
        bones: Vec<(String, DVec3)>,
        reads: Cell<usize>,
    }

    impl TestBody {
        fn new(name: &'static str, bones: &[&str]) -> Self {
            let bones = bones
                .iter()
                .enumerate()
                .map(|(i, b)| (b.to_string(), DVec3::new(i as f64, 1.0, 2.0)))
                .collect();
            Self {
                name,
                bones,
                reads: Cell::new(0),
            }
        }
    }

    impl SkeletalBody for TestBody {
        fn component_name(&self) -> &str {
            self.name
        }

        fn bone_names(&self) -> Vec<String> {
            self.bones.iter().map(|(n, _)| n.clone()).collect()
        }

        fn bone_world_location(&self, bone_name: &str) -> Option<DVec3> {
            self.reads.set(self.reads.get() + 1);
            self.bones
                .iter()
                .find(|(n, _)| n == bone_name)
                .map(|(_, p)| *p)
        }
    }

    struct TestActor {
        bodies: Vec<TestBody>,
    }

    impl SkeletalActor for TestActor {
        fn name(&self) -> String {
            "Hero".to_string()
        }

        fn skeletal_bodies(&self) -> Vec<&dyn SkeletalBody> {
            self.bodies.iter().map(|b| b as &dyn SkeletalBody).collect()
        }
    }

    #[test]
    fn test_face_partitions_are_independent() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let ctx = ExportContext::new("Hero", tmp_dir.path());
        // every face keypoint except the last one
        let present = &FACE_KEYPOINTS[..FACE_KEYPOINTS.len() - 1];
        let body = TestBody::new("Face", present);

        let report = SkeletalExtractor::default().extract_and_export(&ctx, &body, "Face");

        assert!(report.files.is_complete());
        assert_eq!(report.files.written.len(), 4);
        assert_eq!(report.bone_count, present.len());
        assert_eq!(
            report.unresolved,
            vec![(
                PartitionKind::FaceSubset,
                vec![FACE_KEYPOINTS[FACE_KEYPOINTS.len() - 1].to_string()]
            )]
        );

        let all = std::fs::read_to_string(tmp_dir.path().join("Hero_Face_BoneLocations.txt"))?;
        assert_eq!(all.lines().count(), 2 + present.len());

        let subset = std::fs::read_to_string(
            tmp_dir.path().join("FaceSubset").join("Hero_FaceSubset.txt"),
        )?;
        assert!(subset.starts_with("Face YoloPose Keypoint Locations:\n\n"));
        assert_eq!(subset.lines().count(), 2 + FACE_KEYPOINTS.len());
        assert!(subset.ends_with("X=0.0000, Y=0.0000, Z=0.0000\n"));
        Ok(())
    }

    #[test]
    fn test_body_gets_upper_and_lower_subsets() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let ctx = ExportContext::new("Hero", tmp_dir.path());
        let bones: Vec<&str> = UPPER_BODY_KEYPOINTS
            .iter()
            .chain(LOWER_BODY_KEYPOINTS.iter())
            .copied()
            .collect();
        let body = TestBody::new("Body", &bones);

        let report = SkeletalExtractor::default().extract_and_export(&ctx, &body, "Body");

        assert!(report.unresolved.is_empty());
        assert_eq!(report.files.written.len(), 6);
        // one read per bone; the subsets reuse the snapshot
        assert_eq!(body.reads.get(), bones.len());
        assert!(tmp_dir
            .path()
            .join("LowerBodySubset")
            .join("Hero_LowerBodySubset_BoneLocations.json")
            .exists());
        assert!(tmp_dir
            .path()
            .join("UpperBodySubset")
            .join("Hero_UpperBodySubset_UpperBodyKeypoints.txt")
            .exists());
        Ok(())
    }

    #[test]
    fn test_process_actor_with_missing_face() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let ctx = ExportContext::new("ignored", tmp_dir.path());
        let actor = TestActor {
            bodies: vec![TestBody::new("Body", &["root", "pelvis"])],
        };

        let report = SkeletalExtractor::default().process_actor(&ctx, &actor);

        assert_eq!(report.actor, "Hero");
        assert_eq!(report.missing_bodies, vec!["Face".to_string()]);
        assert_eq!(report.bodies.len(), 1);
        assert!(!report.is_complete());
        assert!(!report.has_no_known_bodies());
        assert!(tmp_dir.path().join("Hero_Body_BoneLocations.txt").exists());
        Ok(())
    }

    #[test]
    fn test_text_only_config() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let ctx = ExportContext::new("Hero", tmp_dir.path());
        let extractor = SkeletalExtractor::new(BoneExportConfig {
            write_json: false,
            ..Default::default()
        });
        let body = TestBody::new("Hair", &["strand_01"]);

        let report = extractor.extract_and_export(&ctx, &body, "Hair");

        assert_eq!(
            report.files.written,
            vec![tmp_dir.path().join("Hero_Hair_BoneLocations.txt")]
        );
        Ok(())
    }

    #[test]
    fn test_actor_with_only_unknown_bodies() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let ctx = ExportContext::new("ignored", tmp_dir.path());
        let actor = TestActor {
            bodies: vec![TestBody::new("Hair", &["strand_01"])],
        };

        let report = SkeletalExtractor::default().process_actor(&ctx, &actor);

        assert!(report.has_no_known_bodies());
        assert_eq!(
            report.missing_bodies,
            vec!["Body".to_string(), "Face".to_string()]
        );
        assert!(report.bodies.is_empty());
        assert_eq!(std::fs::read_dir(tmp_dir.path())?.count(), 0);
        Ok(())
    }
}
