#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Cameras that can be captured on demand.
pub mod camera;

/// Render target capture sources.
pub mod capture;

/// The camera extraction coordinator.
pub mod coordinator;

/// Error types for the scene module.
pub mod error;

/// Frame writers.
pub mod frame;

/// The scene queries used by an extraction pass.
pub mod scene;

/// One-shot delayed callbacks.
pub mod scheduler;

/// A scene loaded from a JSON description.
pub mod static_scene;

pub use camera::SceneCamera;
pub use capture::CaptureSource;
pub use coordinator::{
    CameraCoordinator, CameraOutcome, CoordinatorConfig, CoordinatorState, ExtractionReport,
    SkipReason,
};
pub use error::SceneError;
pub use frame::{FrameExporter, PngFrameExporter};
pub use scene::{export_skeletons, Scene};
pub use scheduler::{DelayScheduler, ManualScheduler, TimerHandle};
pub use static_scene::{StaticActor, StaticBody, StaticBone, StaticCamera, StaticScene};
