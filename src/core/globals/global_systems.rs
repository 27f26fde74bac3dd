//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains the systems that run behaviours and apply scene loads.
// Systems operate on GlobalContext data.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::behaviour::BehaviourRegistry;
use crate::core::scene::{LoadScene, SceneLoader};

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `behaviours`: registered per-frame behaviours
/// - `scene_loader`: frame-boundary scene loading
#[derive(Default)]
pub struct GlobalSystems {
    /// Behaviours updated every frame, in registration order.
    pub behaviours: BehaviourRegistry,

    /// Applies `LoadScene` requests and runs scene builders.
    pub scene_loader: SceneLoader,
}

impl GlobalSystems {
    /// Creates a systems container with empty systems.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one frame.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Playback**: advance media clocks, firing finished notifications
    /// 2. **Behaviours**: start new behaviours, update all of them
    /// 3. **Messages**: collect `LoadScene` requests, drop the rest
    /// 4. **Scene Loading**: apply requests in order
    pub fn update(&mut self, context: &mut GlobalContext, dt: f32) {
        // 1. Advance playback
        context.media.advance(dt);

        // 2. Run behaviours
        self.behaviours.update(context, dt);

        // 3. Collect requests, clear this frame's messages
        let requests = context.message_bus.take::<LoadScene>();
        context.message_bus.clear_all();

        // 4. Apply scene loads (publishes SceneLoaded for the next frame)
        self.scene_loader
            .process_requests(requests, &mut self.behaviours, context);
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::behaviour::Behaviour;
    use crate::core::scene::{SceneLoaded, SceneRegistry};

    struct Requester {
        scene: &'static str,
        sent: bool,
    }

    impl Behaviour for Requester {
        fn update(&mut self, context: &mut GlobalContext, _dt: f32) {
            if !self.sent {
                self.sent = true;
                context.message_bus.push(LoadScene::new(self.scene));
            }
        }
    }

    #[test]
    fn load_request_applies_at_frame_end() {
        let mut systems = GlobalSystems::new();
        let mut context = GlobalContext::with_registry(SceneRegistry::from_paths(["Menu"]));
        systems.behaviours.register(Requester {
            scene: "Menu",
            sent: false,
        });

        systems.update(&mut context, 0.016);

        assert_eq!(context.active_scene.as_ref().map(|e| e.index), Some(0));
        assert!(systems.behaviours.is_empty());
        assert!(!context.message_bus.has_messages::<LoadScene>());
        assert_eq!(context.message_bus.count::<SceneLoaded>(), 1);

        // Scene-loaded events last one frame
        systems.update(&mut context, 0.016);
        assert!(!context.message_bus.has_messages::<SceneLoaded>());
    }
}
