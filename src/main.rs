//=========================================================================
// googly-stage — Demo Runner
//
// Loads a RON config, sets up an intro scene with a googly-eyed
// character and a video player, and runs it headless for a few seconds.
//
// Usage:
//   googly-stage [config.ron] [seconds]
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::{info, warn};

//=== Internal Dependencies ===============================================

use googly_stage::core::ConfigError;
use googly_stage::prelude::*;

//=== Constants ===========================================================

const DEFAULT_CONFIG: &str = "assets/demo.ron";
const DEFAULT_SECONDS: f64 = 5.0;
const INTRO_CLIP_SECONDS: f32 = 3.0;

//=========================================================================

fn main() -> Result<(), ConfigError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let config = GameConfig::load(&config_path)?;
    let intro_scene = config.scenes.first().map(|path| {
        googly_stage::core::scene::scene_name_from_path(path)
    });

    let eyeball_config = config.eyeball.clone();
    let intro_config = config.intro.clone();

    let mut engine = EngineBuilder::from_config(&config.engine)
        .build()
        .init(|systems, context| {
            context.scene_registry = SceneRegistry::from_paths(config.scenes.iter().cloned());

            let Some(intro_name) = intro_scene.clone() else {
                warn!("No scenes configured, nothing to run");
                return;
            };

            systems
                .scene_loader
                .register_builder(intro_name, move |behaviours, context| {
                    let body = context.world.spawn_body(Vec2::ZERO, Vec2::new(4.0, 0.0));
                    let eyeball = context.world.spawn(Vec2::new(0.0, 1.0));
                    let pupil = context.world.spawn(Vec2::new(0.0, 1.0));
                    behaviours.register(EyeballController::new(
                        eyeball,
                        pupil,
                        body,
                        eyeball_config.clone(),
                    ));

                    let screen = context.world.spawn(Vec2::ZERO);
                    context.media.attach(screen, INTRO_CLIP_SECONDS);
                    behaviours.register(IntroVideoController::new(screen, &intro_config));
                });
        });

    if let Some(name) = intro_scene {
        engine.request_scene(name);
    }

    let frames = (seconds * engine.tps()).ceil() as u64;
    engine.run_frames(frames);

    let context = engine.context();
    info!(
        "Ran {} frames; active scene: {:?}; {} diagnostics",
        engine.frame_count(),
        context.active_scene.as_ref().map(|e| e.name.as_str()),
        context.diagnostics.len()
    );

    Ok(())
}
