use jointcap_geometry::{DVec3, XyzRecord};
use jointcap_io::{writer, ExportContext, ExportReport, ExportTarget};
use serde::{Deserialize, Serialize};

use crate::{
    error::SkeletonError,
    partition::{Partition, PartitionKind},
};

/// Which files the bone exporter writes and how they are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoneExportConfig {
    /// Write the plain-text listing.
    pub write_text: bool,
    /// Write the JSON document.
    pub write_json: bool,
    /// Suffix of the text file for full bone lists.
    pub text_file_name_base: String,
    /// Suffix of every JSON file.
    pub json_file_name_base: String,
}

impl Default for BoneExportConfig {
    fn default() -> Self {
        Self {
            write_text: true,
            write_json: true,
            text_file_name_base: "BoneLocations.txt".to_string(),
            json_file_name_base: "BoneLocations.json".to_string(),
        }
    }
}

/// One joint in a [`KeypointsDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeypointEntry {
    /// The joint name.
    pub bone_name: String,
    /// The joint's world position.
    pub world_location: XyzRecord,
}

/// The JSON document written for one partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeypointsDocument {
    /// Region tag or subset name.
    pub mesh_type: String,
    /// The joints, in export order.
    pub keypoints: Vec<KeypointEntry>,
}

impl KeypointsDocument {
    /// Build the document from parallel name and position slices.
    pub fn new(mesh_type: &str, names: &[String], positions: &[DVec3]) -> Self {
        Self {
            mesh_type: mesh_type.to_string(),
            keypoints: names
                .iter()
                .zip(positions)
                .map(|(name, position)| KeypointEntry {
                    bone_name: name.clone(),
                    world_location: XyzRecord::from(*position),
                })
                .collect(),
        }
    }
}

/// Format the text listing: the header, then one line per joint with 4 decimals.
pub fn format_bone_text(header: &str, names: &[String], positions: &[DVec3]) -> String {
    let mut out = header.to_string();
    for (name, p) in names.iter().zip(positions) {
        out.push_str(&format!(
            "Bone Name: {}, World Location: X={:.4}, Y={:.4}, Z={:.4}\n",
            name, p.x, p.y, p.z
        ));
    }
    out
}

/// Writes bone partitions as text and JSON files.
#[derive(Debug, Clone, Default)]
pub struct BoneDataExporter {
    config: BoneExportConfig,
}

impl BoneDataExporter {
    /// Create an exporter with the given configuration.
    pub fn new(config: BoneExportConfig) -> Self {
        Self { config }
    }

    /// The exporter configuration.
    pub fn config(&self) -> &BoneExportConfig {
        &self.config
    }

    /// Where the text file of a partition goes.
    pub fn text_target(&self, ctx: &ExportContext, kind: &PartitionKind) -> ExportTarget {
        let file_name = kind.text_file_name(ctx.display_name(), &self.config.text_file_name_base);
        with_partition_folder(ExportTarget::new(ctx.output_root(), file_name), kind)
    }

    /// Where the JSON file of a partition goes.
    pub fn json_target(&self, ctx: &ExportContext, kind: &PartitionKind) -> ExportTarget {
        let file_name = kind.json_file_name(ctx.display_name(), &self.config.json_file_name_base);
        with_partition_folder(ExportTarget::new(ctx.output_root(), file_name), kind)
    }

    /// Write one list of joints.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The owning actor and output root.
    /// * `kind` - The partition, which decides file names, header and sub-folder.
    /// * `names` - Joint names, in export order.
    /// * `positions` - World positions, parallel to `names`.
    ///
    /// # Returns
    ///
    /// The per-file outcome. The text and JSON files are written independently.
    ///
    /// # Errors
    ///
    /// Returns [`SkeletonError::InconsistentArrayLength`] without writing anything if the
    /// slices differ in length.
    pub fn export(
        &self,
        ctx: &ExportContext,
        kind: &PartitionKind,
        names: &[String],
        positions: &[DVec3],
    ) -> Result<ExportReport, SkeletonError> {
        if names.len() != positions.len() {
            return Err(SkeletonError::InconsistentArrayLength {
                names: names.len(),
                positions: positions.len(),
            });
        }

        let mut report = ExportReport::default();
        let what = format!("{} bone data", kind.mesh_type());

        if self.config.write_text {
            let target = self.text_target(ctx, kind);
            let contents = format_bone_text(&kind.text_header(), names, positions);
            report.record(&what, target.path(), writer::write_text(&target, &contents));
        }

        if self.config.write_json {
            let target = self.json_target(ctx, kind);
            let document = KeypointsDocument::new(kind.mesh_type(), names, positions);
            report.record(&what, target.path(), writer::write_json(&target, &document));
        }

        Ok(report)
    }

    /// Write a partition cut from a snapshot.
    pub fn export_partition(
        &self,
        ctx: &ExportContext,
        partition: &Partition,
    ) -> Result<ExportReport, SkeletonError> {
        self.export(ctx, &partition.kind, &partition.names, &partition.positions)
    }
}

fn with_partition_folder(target: ExportTarget, kind: &PartitionKind) -> ExportTarget {
    match kind.sub_folder() {
        Some(folder) => target.with_sub_folder(folder),
        None => target,
    }
}
