//=========================================================================
// Intro Video Controller
//=========================================================================
//
// Plays an intro clip and moves on to the next scene when it ends.
//
// Setup (on_start) can fail in two ways, each reported once and leaving
// the controller inert with no subscription:
//   - no media player attached to the configured entity
//   - the configured video file does not exist
//
// Otherwise the controller holds a single-shot subscription. The first
// PlaybackFinished drops it and hands over to EndOfPlaybackTransition.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{EndOfPlaybackTransition, MediaLibrary, PlaybackFinished, TransitionState};
use crate::core::behaviour::Behaviour;
use crate::core::config::IntroConfig;
use crate::core::error::BehaviourError;
use crate::core::globals::GlobalContext;
use crate::core::world::EntityId;

//=== IntroVideoController ================================================

pub struct IntroVideoController {
    player: EntityId,
    video_file_name: String,
    library: MediaLibrary,
    completion: Option<Receiver<PlaybackFinished>>,
    transition: EndOfPlaybackTransition,
}

impl IntroVideoController {
    /// Creates a controller for the media player attached to `player`.
    pub fn new(player: EntityId, config: &IntroConfig) -> Self {
        Self {
            player,
            video_file_name: config.video_file_name.clone(),
            library: MediaLibrary::new(&config.media_root),
            completion: None,
            transition: EndOfPlaybackTransition::new(&config.next_scene_name),
        }
    }

    /// True while waiting for the clip to finish.
    pub fn is_subscribed(&self) -> bool {
        self.completion.is_some()
    }

    pub fn transition_state(&self) -> TransitionState {
        self.transition.state()
    }

    fn setup(&mut self, context: &mut GlobalContext) -> Result<(), BehaviourError> {
        let Some(player) = context.media.get_mut(self.player) else {
            return Err(BehaviourError::MissingCollaborator {
                behaviour: self.name(),
                collaborator: format!("media player on entity {:?}", self.player),
            });
        };

        let path = self.library.resolve(&self.video_file_name)?;

        info!("Intro video {} playing", path.display());
        player.set_url(&path);
        self.completion = Some(player.subscribe_finished());
        player.play();
        Ok(())
    }
}

impl Behaviour for IntroVideoController {
    fn name(&self) -> &'static str {
        "IntroVideoController"
    }

    fn on_start(&mut self, context: &mut GlobalContext) {
        if let Err(err) = self.setup(context) {
            context.diagnostics.report(err);
        }
    }

    fn update(&mut self, context: &mut GlobalContext, _dt: f32) {
        let Some(completion) = &self.completion else {
            return;
        };

        match completion.try_recv() {
            Ok(event) => {
                debug!("Playback finished on {:?} ({:?})", event.player, event.url);
                self.completion = None;
                self.transition.on_playback_finished(
                    &context.scene_registry,
                    &mut context.message_bus,
                    &mut context.diagnostics,
                );
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                warn!("Media player on {:?} went away before finishing", self.player);
                self.completion = None;
            }
        }
    }

    fn on_destroy(&mut self, _context: &mut GlobalContext) {
        // Unsubscribe so the player never notifies a destroyed controller
        self.completion = None;
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::{LoadScene, SceneRegistry};
    use glam::Vec2;
    use std::fs;
    use tempfile::TempDir;

    const DT: f32 = 1.0 / 60.0;

    fn media_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Intro.mp4"), b"clip").unwrap();
        dir
    }

    fn context_with_player(duration: f32) -> (GlobalContext, EntityId) {
        let mut context = GlobalContext::new();
        context.scene_registry = SceneRegistry::from_paths(["Menu", "Level1"]);
        let entity = context.world.spawn(Vec2::ZERO);
        context.media.attach(entity, duration);
        (context, entity)
    }

    fn run_frames(controller: &mut IntroVideoController, context: &mut GlobalContext, n: usize) {
        for _ in 0..n {
            context.media.advance(DT);
            controller.update(context, DT);
        }
    }

    #[test]
    fn setup_subscribes_and_plays() {
        let dir = media_dir();
        let (mut context, entity) = context_with_player(1.0);
        let config = IntroConfig::new("Intro.mp4", "Level1").with_media_root(dir.path());
        let mut controller = IntroVideoController::new(entity, &config);

        controller.on_start(&mut context);

        assert!(controller.is_subscribed());
        let player = context.media.get(entity).unwrap();
        assert!(player.is_playing());
        assert_eq!(player.url(), Some(dir.path().join("Intro.mp4").as_path()));
    }

    #[test]
    fn finished_clip_requests_next_scene() {
        let dir = media_dir();
        let (mut context, entity) = context_with_player(0.5);
        let config = IntroConfig::new("Intro.mp4", "Level1").with_media_root(dir.path());
        let mut controller = IntroVideoController::new(entity, &config);
        controller.on_start(&mut context);

        run_frames(&mut controller, &mut context, 60);

        assert_eq!(controller.transition_state(), TransitionState::Loading);
        assert!(!controller.is_subscribed());
        assert_eq!(context.message_bus.read::<LoadScene>(), &[LoadScene::new("Level1")]);
    }

    #[test]
    fn unknown_scene_is_rejected() {
        let dir = media_dir();
        let (mut context, entity) = context_with_player(0.5);
        let config = IntroConfig::new("Intro.mp4", "Level9").with_media_root(dir.path());
        let mut controller = IntroVideoController::new(entity, &config);
        controller.on_start(&mut context);

        run_frames(&mut controller, &mut context, 60);

        assert_eq!(controller.transition_state(), TransitionState::Rejected);
        assert!(!context.message_bus.has_messages::<LoadScene>());
        assert_eq!(context.diagnostics.len(), 1);
    }

    #[test]
    fn missing_player_leaves_controller_inert() {
        let dir = media_dir();
        let (mut context, _) = context_with_player(0.5);
        let other = context.world.spawn(Vec2::ZERO);
        let config = IntroConfig::new("Intro.mp4", "Level1").with_media_root(dir.path());
        let mut controller = IntroVideoController::new(other, &config);

        controller.on_start(&mut context);
        run_frames(&mut controller, &mut context, 60);

        assert!(!controller.is_subscribed());
        assert_eq!(controller.transition_state(), TransitionState::Idle);
        assert!(matches!(
            context.diagnostics.reported(),
            [BehaviourError::MissingCollaborator { .. }]
        ));
    }

    #[test]
    fn missing_video_leaves_controller_inert() {
        let dir = tempfile::tempdir().unwrap();
        let (mut context, entity) = context_with_player(0.5);
        let config = IntroConfig::new("Nope.mp4", "Level1").with_media_root(dir.path());
        let mut controller = IntroVideoController::new(entity, &config);

        controller.on_start(&mut context);

        // Something else plays the clip to the end; nobody is listening
        let player = context.media.get_mut(entity).unwrap();
        assert_eq!(player.subscriber_count(), 0);
        player.play();
        run_frames(&mut controller, &mut context, 60);

        assert_eq!(controller.transition_state(), TransitionState::Idle);
        assert!(!context.message_bus.has_messages::<LoadScene>());
        assert_eq!(
            context.diagnostics.reported(),
            &[BehaviourError::MissingResource {
                path: dir.path().join("Nope.mp4")
            }]
        );
    }

    #[test]
    fn looping_clip_transitions_once() {
        let dir = media_dir();
        let (mut context, entity) = context_with_player(0.25);
        context.media.get_mut(entity).unwrap().set_looping(true);
        let config = IntroConfig::new("Intro.mp4", "Level1").with_media_root(dir.path());
        let mut controller = IntroVideoController::new(entity, &config);
        controller.on_start(&mut context);

        run_frames(&mut controller, &mut context, 120);

        assert_eq!(context.message_bus.count::<LoadScene>(), 1);
    }

    #[test]
    fn destroy_unsubscribes() {
        let dir = media_dir();
        let (mut context, entity) = context_with_player(0.5);
        let config = IntroConfig::new("Intro.mp4", "Level1").with_media_root(dir.path());
        let mut controller = IntroVideoController::new(entity, &config);
        controller.on_start(&mut context);

        controller.on_destroy(&mut context);
        context.media.advance(1.0);

        assert!(!controller.is_subscribed());
        assert_eq!(context.media.get(entity).unwrap().subscriber_count(), 0);
    }
}
