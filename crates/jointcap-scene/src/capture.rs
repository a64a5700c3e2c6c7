use serde::{Deserialize, Serialize};

/// What a scene capture writes into its render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureSource {
    /// Final colour after tone mapping, in LDR.
    FinalColorLdr,
    /// Final colour in HDR.
    FinalColorHdr,
    /// Scene colour before post-processing, in HDR.
    SceneColorHdr,
    /// Scene depth.
    SceneDepth,
}

impl CaptureSource {
    /// The source the coordinator switches every camera to before capturing.
    pub const EXPORT: Self = CaptureSource::FinalColorLdr;
}
