use jointcap_io::ExportContext;
use jointcap_skeleton::{ActorExportReport, SkeletalActor, SkeletalExtractor};

use crate::camera::SceneCamera;

/// The scene queries the extraction pass needs.
pub trait Scene {
    /// Every camera in the scene, of any kind.
    fn cameras_mut(&mut self) -> Vec<&mut dyn SceneCamera>;

    /// Every actor that carries skeletal bodies.
    fn skeletal_actors(&self) -> Vec<&dyn SkeletalActor>;
}

/// Export the skeletons of every actor in the scene.
///
/// # Arguments
///
/// * `scene` - The scene to read.
/// * `ctx` - Output root. Each actor is exported under its own name.
/// * `extractor` - The configured skeletal extractor.
pub fn export_skeletons(
    scene: &dyn Scene,
    ctx: &ExportContext,
    extractor: &SkeletalExtractor,
) -> Vec<ActorExportReport> {
    let actors = scene.skeletal_actors();
    log::info!("Found {} skeletal actors", actors.len());
    actors
        .into_iter()
        .map(|actor| extractor.process_actor(ctx, actor))
        .collect()
}
