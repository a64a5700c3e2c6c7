use std::time::Duration;

use jointcap_camera::{
    compute_intrinsics,
    export::{export_camera_data, frame_target},
    get_extrinsics, CameraError, CameraKind,
};
use jointcap_io::{ExportContext, ExportReport};
use serde::{Deserialize, Serialize};

use crate::{
    camera::SceneCamera,
    capture::CaptureSource,
    frame::{FrameExporter, PngFrameExporter},
    scene::Scene,
    scheduler::{DelayScheduler, TimerHandle},
};

/// Settings of the camera coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Fallback delay between scene start and the extraction pass, used when the host
    /// never signals readiness.
    pub extraction_delay: Duration,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            extraction_delay: Duration::from_secs(1),
        }
    }
}

/// Where the coordinator is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    /// Nothing scheduled.
    Idle,
    /// Waiting for the readiness signal or the fallback timer.
    Armed {
        /// The pending fallback timer.
        timer: TimerHandle,
    },
    /// A pass is running.
    Extracting,
}

/// Why a camera produced no export.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The camera has no export settings.
    NotExportable,
    /// A scene capture camera has no render target to capture into.
    NotReady,
    /// The intrinsics could not be computed.
    Intrinsics(CameraError),
}

/// The outcome of one camera in a pass.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraOutcome {
    /// The camera was captured and its files attempted.
    Exported {
        /// Camera name.
        name: String,
        /// Per-file outcome, including the frame.
        files: ExportReport,
    },
    /// The camera was skipped.
    Skipped {
        /// Camera name.
        name: String,
        /// Why it was skipped.
        reason: SkipReason,
    },
}

/// The outcome of one extraction pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionReport {
    /// One entry per camera, in scene order.
    pub cameras: Vec<CameraOutcome>,
}

impl ExtractionReport {
    /// Number of cameras that were exported.
    pub fn exported(&self) -> usize {
        self.cameras
            .iter()
            .filter(|c| matches!(c, CameraOutcome::Exported { .. }))
            .count()
    }

    /// Number of cameras that were skipped.
    pub fn skipped(&self) -> usize {
        self.cameras.len() - self.exported()
    }
}

/// Captures every scene camera once and exports its parameters and frame.
///
/// The pass runs once per arming, either on the host's readiness signal or, as a fallback,
/// when the delay timer fires. It never re-arms itself.
pub struct CameraCoordinator<F: FrameExporter = PngFrameExporter> {
    config: CoordinatorConfig,
    state: CoordinatorState,
    frame_exporter: F,
}

impl Default for CameraCoordinator {
    fn default() -> Self {
        Self::new(CoordinatorConfig::default(), PngFrameExporter)
    }
}

impl<F: FrameExporter> CameraCoordinator<F> {
    /// Create an idle coordinator.
    pub fn new(config: CoordinatorConfig, frame_exporter: F) -> Self {
        Self {
            config,
            state: CoordinatorState::Idle,
            frame_exporter,
        }
    }

    /// The coordinator settings.
    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// The current lifecycle state.
    pub fn state(&self) -> CoordinatorState {
        self.state
    }

    /// Arm the coordinator at scene start by scheduling the fallback timer.
    ///
    /// Returns the timer handle, or `None` if the coordinator is not idle.
    pub fn begin_play(&mut self, scheduler: &mut dyn DelayScheduler) -> Option<TimerHandle> {
        if self.state != CoordinatorState::Idle {
            log::warn!("begin_play ignored, coordinator is {:?}", self.state);
            return None;
        }
        let timer = scheduler.schedule_once(self.config.extraction_delay);
        log::info!(
            "Camera extraction scheduled in {:?} unless the scene signals readiness first",
            self.config.extraction_delay
        );
        self.state = CoordinatorState::Armed { timer };
        Some(timer)
    }

    /// The scene is ready: cancel the fallback timer and run the pass.
    ///
    /// Returns `None` if the coordinator was not armed.
    pub fn notify_ready(
        &mut self,
        scheduler: &mut dyn DelayScheduler,
        scene: &mut dyn Scene,
        ctx: &ExportContext,
    ) -> Option<ExtractionReport> {
        let CoordinatorState::Armed { timer } = self.state else {
            log::debug!("Readiness signal ignored, coordinator is {:?}", self.state);
            return None;
        };
        scheduler.cancel(timer);
        Some(self.extract_all(scene, ctx))
    }

    /// The fallback timer fired.
    ///
    /// Runs the pass only if the coordinator is still armed with this timer, so a pass runs
    /// at most once per arming.
    pub fn on_timer_fired(
        &mut self,
        handle: TimerHandle,
        scene: &mut dyn Scene,
        ctx: &ExportContext,
    ) -> Option<ExtractionReport> {
        match self.state {
            CoordinatorState::Armed { timer } if timer == handle => {
                Some(self.extract_all(scene, ctx))
            }
            _ => {
                log::debug!("Stale timer {:?} ignored", handle);
                None
            }
        }
    }

    /// Run one extraction pass over every camera in the scene.
    ///
    /// Each camera is captured before its pose and intrinsics are read, so the exported
    /// matrices and frame describe the same instant. A cine camera without a render target
    /// is exported at the default image size without a frame. A camera that fails is
    /// skipped and the pass continues. The coordinator is idle afterwards.
    pub fn extract_all(&mut self, scene: &mut dyn Scene, ctx: &ExportContext) -> ExtractionReport {
        self.state = CoordinatorState::Extracting;

        let cameras = scene.cameras_mut();
        log::info!("Found {} cameras", cameras.len());

        let mut report = ExtractionReport::default();
        for camera in cameras {
            report.cameras.push(self.process_camera(camera, ctx));
        }

        log::info!(
            "Camera extraction done: {} exported, {} skipped",
            report.exported(),
            report.skipped()
        );
        self.state = CoordinatorState::Idle;
        report
    }

    fn process_camera(&self, camera: &mut dyn SceneCamera, ctx: &ExportContext) -> CameraOutcome {
        let name = camera.name();

        let Some(settings) = camera.export_settings().cloned() else {
            log::warn!("Camera {} has no export settings. Skipping.", name);
            return CameraOutcome::Skipped {
                name,
                reason: SkipReason::NotExportable,
            };
        };

        let kind = camera.kind();
        if let CameraKind::Unsupported { type_name } = &kind {
            log::warn!("Camera {} is a {}, which is not supported. Skipping.", name, type_name);
            return CameraOutcome::Skipped {
                name,
                reason: SkipReason::Intrinsics(CameraError::UnsupportedCameraKind(
                    type_name.clone(),
                )),
            };
        }

        let has_render_target = camera.has_render_target();
        if !has_render_target && matches!(kind, CameraKind::SceneCapture(_)) {
            log::warn!("Camera {} has no render target yet. Skipping.", name);
            return CameraOutcome::Skipped {
                name,
                reason: SkipReason::NotReady,
            };
        }

        // a cine camera without a render target is exported without a frame
        let frame = if has_render_target {
            camera.set_capture_source(CaptureSource::EXPORT);
            let frame = camera.capture_scene();
            log::debug!("Captured scene for camera {}", name);
            frame
        } else {
            log::warn!("Camera {} has no render target. Exporting without a frame.", name);
            None
        };

        let pose = get_extrinsics(&*camera);
        let intrinsics = match compute_intrinsics(&camera.kind(), camera.render_target_size()) {
            Ok(intrinsics) => intrinsics,
            Err(e) => {
                log::error!("Failed to compute intrinsics for camera {}: {}", name, e);
                return CameraOutcome::Skipped {
                    name,
                    reason: SkipReason::Intrinsics(e),
                };
            }
        };

        let camera_ctx = ctx.for_owner(name.as_str());
        let mut files = export_camera_data(&camera_ctx, &pose, &intrinsics, &settings);

        let target = frame_target(&camera_ctx, &settings.frame_filename(&name));
        match frame {
            Some(frame) => files.record(
                "frame",
                target.path(),
                self.frame_exporter.export_frame(&target, &frame),
            ),
            None if has_render_target => {
                files.record_failure("frame", target.path(), "capture returned no image")
            }
            None => files.record_failure("frame", target.path(), "no render target"),
        }

        CameraOutcome::Exported { name, files }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use jointcap_skeleton::SkeletalActor;

    struct EmptyScene;

    impl Scene for EmptyScene {
        fn cameras_mut(&mut self) -> Vec<&mut dyn SceneCamera> {
            Vec::new()
        }

        fn skeletal_actors(&self) -> Vec<&dyn SkeletalActor> {
            Vec::new()
        }
    }

    #[test]
    fn test_ready_signal_cancels_timer() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let ctx = ExportContext::new("", tmp_dir.path());
        let mut scheduler = ManualScheduler::new();
        let mut coordinator = CameraCoordinator::default();

        let timer = coordinator.begin_play(&mut scheduler);
        assert!(timer.is_some());
        assert_eq!(scheduler.pending(), 1);

        let report = coordinator.notify_ready(&mut scheduler, &mut EmptyScene, &ctx);
        assert_eq!(report, Some(ExtractionReport::default()));
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(coordinator.state(), CoordinatorState::Idle);
        Ok(())
    }

    #[test]
    fn test_timer_runs_pass_once() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let ctx = ExportContext::new("", tmp_dir.path());
        let mut scheduler = ManualScheduler::new();
        let mut coordinator = CameraCoordinator::default();
        coordinator.begin_play(&mut scheduler);

        let fired = scheduler.advance(coordinator.config().extraction_delay);
        assert_eq!(fired.len(), 1);
        assert!(coordinator
            .on_timer_fired(fired[0], &mut EmptyScene, &ctx)
            .is_some());
        // no re-arm: a repeated fire and a late readiness signal do nothing
        assert!(coordinator
            .on_timer_fired(fired[0], &mut EmptyScene, &ctx)
            .is_none());
        assert!(coordinator
            .notify_ready(&mut scheduler, &mut EmptyScene, &ctx)
            .is_none());
        assert_eq!(scheduler.pending(), 0);
        Ok(())
    }

    #[test]
    fn test_begin_play_only_from_idle() {
        let mut scheduler = ManualScheduler::new();
        let mut coordinator = CameraCoordinator::default();
        assert!(coordinator.begin_play(&mut scheduler).is_some());
        assert!(coordinator.begin_play(&mut scheduler).is_none());
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_unknown_timer_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let ctx = ExportContext::new("", tmp_dir.path());
        let mut scheduler = ManualScheduler::new();
        let mut coordinator = CameraCoordinator::default();
        coordinator.begin_play(&mut scheduler);

        assert!(coordinator
            .on_timer_fired(TimerHandle(42), &mut EmptyScene, &ctx)
            .is_none());
        assert!(matches!(
            coordinator.state(),
            CoordinatorState::Armed { .. }
        ));
        Ok(())
    }
}
