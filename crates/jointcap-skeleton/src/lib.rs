#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Skeletal bodies and actors as seen by the extractor.
pub mod body;

/// Curated keypoint catalogs.
pub mod catalog;

/// Error types for the skeleton module.
pub mod error;

/// Text and JSON export of bone lists.
pub mod export;

/// Per-body and per-actor extraction.
pub mod extractor;

/// Debug markers for catalogued keypoints.
pub mod overlay;

/// Named joint selections and their output locations.
pub mod partition;

/// One-shot reads of a body's pose.
pub mod snapshot;

pub use body::{resolve_world_position, SkeletalActor, SkeletalBody};
pub use catalog::KeypointCatalog;
pub use error::SkeletonError;
pub use export::{BoneDataExporter, BoneExportConfig, KeypointsDocument};
pub use extractor::{ActorExportReport, BodyExportReport, SkeletalExtractor};
pub use overlay::{DebugColor, DebugPoint, KeypointOverlay};
pub use partition::{Partition, PartitionKind};
pub use snapshot::BonePoseSnapshot;
