use std::{path::PathBuf, time::Duration};

use argh::FromArgs;
use jointcap::{
    io::ExportContext,
    scene::{
        export_skeletons, CameraCoordinator, CoordinatorConfig, ManualScheduler,
        PngFrameExporter, Scene, StaticScene,
    },
    skeleton::{BoneExportConfig, KeypointOverlay, SkeletalExtractor},
};

/// Export camera parameters, frames and skeletal keypoints of a scene
#[derive(FromArgs)]
struct Args {
    /// path to the JSON scene description
    #[argh(option, short = 's')]
    scene: PathBuf,

    /// output root directory
    #[argh(option, short = 'o', default = "PathBuf::from(\"Saved\")")]
    output: PathBuf,

    /// do not write bone text files
    #[argh(switch)]
    no_text: bool,

    /// do not write bone JSON files
    #[argh(switch)]
    no_json: bool,

    /// wait this many milliseconds and run the camera pass from the fallback timer
    #[argh(option)]
    delay_ms: Option<u64>,

    /// log the keypoint overlay markers of every actor
    #[argh(switch)]
    overlay: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Args = argh::from_env();

    let mut scene = StaticScene::from_file(&args.scene)?;
    let ctx = ExportContext::new("", &args.output);

    let extractor = SkeletalExtractor::new(BoneExportConfig {
        write_text: !args.no_text,
        write_json: !args.no_json,
        ..Default::default()
    });
    let actors = export_skeletons(&scene, &ctx, &extractor);

    let mut config = CoordinatorConfig::default();
    if let Some(ms) = args.delay_ms {
        config.extraction_delay = Duration::from_millis(ms);
    }
    let delay = config.extraction_delay;

    let mut scheduler = ManualScheduler::new();
    let mut coordinator = CameraCoordinator::new(config, PngFrameExporter);
    coordinator.begin_play(&mut scheduler);

    let report = match args.delay_ms {
        Some(_) => {
            std::thread::sleep(delay);
            scheduler
                .advance(delay)
                .into_iter()
                .find_map(|timer| coordinator.on_timer_fired(timer, &mut scene, &ctx))
        }
        None => coordinator.notify_ready(&mut scheduler, &mut scene, &ctx),
    }
    .unwrap_or_default();

    if args.overlay {
        let overlay = KeypointOverlay::default();
        for actor in scene.skeletal_actors() {
            for point in overlay.points(actor) {
                log::info!(
                    "{}: {:?} at ({:.4}, {:.4}, {:.4})",
                    actor.name(),
                    point.color.rgba,
                    point.position.x,
                    point.position.y,
                    point.position.z
                );
            }
        }
    }

    let incomplete_actors = actors.iter().filter(|a| !a.is_complete()).count();
    log::info!(
        "Done: {} cameras exported, {} skipped, {} actors ({} incomplete) to {}",
        report.exported(),
        report.skipped(),
        actors.len(),
        incomplete_actors,
        args.output.display()
    );

    Ok(())
}
