//=========================================================================
// Engine
//
// Explicit frame driver for behaviours.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──tick(dt) / run()──>  [Frames]
//         │                          │
//         ├─ with_tps()              ├─ GlobalSystems  (behaviours, scene loader)
//         └─ with_max_frame_delta()  └─ GlobalContext  (world, media, scenes, bus)
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use log::info;

//=== Internal Dependencies ===============================================

use crate::core::config::EngineConfig;
use crate::core::globals::{GlobalContext, GlobalSystems};
use crate::core::scene::LoadScene;

//=== FrameControl ========================================================

/// Whether the run loop continues after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Exit,
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (frames per second for [`Engine::run`])
/// - **Max frame delta**: 0.1 seconds
///
/// # Examples
///
/// ```no_run
/// use googly_stage::EngineBuilder;
///
/// let mut engine = EngineBuilder::new()
///     .with_tps(120.0)
///     .build();
/// engine.run();
/// ```
pub struct EngineBuilder {
    tps: f64,
    max_frame_delta: f32,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        let defaults = EngineConfig::default();
        Self {
            tps: defaults.tps,
            max_frame_delta: defaults.max_frame_delta,
        }
    }

    /// Creates a builder from an [`EngineConfig`].
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`EngineBuilder::with_tps`] and
    /// [`EngineBuilder::with_max_frame_delta`].
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new()
            .with_tps(config.tps)
            .with_max_frame_delta(config.max_frame_delta)
    }

    /// Sets the target frames per second for [`Engine::run`].
    ///
    /// # Panics
    ///
    /// Panics unless `tps` is positive and finite.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0 && tps.is_finite(), "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Caps the delta time a single frame may report, in seconds.
    ///
    /// # Panics
    ///
    /// Panics if `max_frame_delta <= 0.0`.
    pub fn with_max_frame_delta(mut self, max_frame_delta: f32) -> Self {
        assert!(
            max_frame_delta > 0.0,
            "Max frame delta must be positive, got {}",
            max_frame_delta
        );
        self.max_frame_delta = max_frame_delta;
        self
    }

    /// Builds the engine with empty systems and context.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, max frame delta: {})",
            self.tps, self.max_frame_delta
        );

        let (shutdown_tx, shutdown_rx) = bounded(1);
        Engine {
            systems: GlobalSystems::new(),
            context: GlobalContext::new(),
            tps: self.tps,
            max_frame_delta: self.max_frame_delta,
            frame: 0,
            shutdown_tx,
            shutdown_rx,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Frame driver owning the behaviour systems and their shared context.
///
/// Frames can be stepped manually with [`Engine::tick`] (tests, embedding
/// in a host loop) or run at a fixed rate with [`Engine::run`].
pub struct Engine {
    systems: GlobalSystems,
    context: GlobalContext,
    tps: f64,
    max_frame_delta: f32,
    frame: u64,
    shutdown_tx: Sender<()>,
    shutdown_rx: Receiver<()>,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Gives mutable access to systems and context before running.
    ///
    /// ```no_run
    /// # use googly_stage::prelude::*;
    /// # use glam::Vec2;
    /// let engine = EngineBuilder::new().build().init(|systems, context| {
    ///     let body = context.world.spawn_body(Vec2::ZERO, Vec2::ZERO);
    ///     let eye = context.world.spawn(Vec2::ZERO);
    ///     let pupil = context.world.spawn(Vec2::ZERO);
    ///     systems
    ///         .behaviours
    ///         .register(EyeballController::new(eye, pupil, body, PupilConfig::default()));
    /// });
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems, &mut GlobalContext),
    {
        info!("Initializing engine systems");
        init_fn(&mut self.systems, &mut self.context);
        info!(
            "Engine initialization complete ({} behaviours)",
            self.systems.behaviours.len()
        );
        self
    }

    //--- Accessors --------------------------------------------------------

    pub fn systems(&self) -> &GlobalSystems {
        &self.systems
    }

    pub fn systems_mut(&mut self) -> &mut GlobalSystems {
        &mut self.systems
    }

    pub fn context(&self) -> &GlobalContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut GlobalContext {
        &mut self.context
    }

    /// Number of frames run so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn tps(&self) -> f64 {
        self.tps
    }

    /// Queues a scene load, applied at the end of the next frame.
    pub fn request_scene(&mut self, name: impl Into<String>) {
        self.context.message_bus.push(LoadScene::new(name));
    }

    /// Returns a sender that stops [`Engine::run`] when signalled.
    ///
    /// Can be moved to another thread.
    pub fn shutdown_handle(&self) -> Sender<()> {
        self.shutdown_tx.clone()
    }

    //--- Execution --------------------------------------------------------

    /// Runs one frame with the given delta time in seconds.
    ///
    /// Negative deltas become zero; deltas above the configured maximum
    /// are capped.
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, self.max_frame_delta);
        self.systems.update(&mut self.context, dt);
        self.frame += 1;
    }

    /// Runs `frames` frames at the fixed delta `1 / tps`.
    pub fn run_frames(&mut self, frames: u64) {
        let dt = (1.0 / self.tps) as f32;
        for _ in 0..frames {
            self.tick(dt);
        }
    }

    /// Runs frames at the configured rate until a shutdown signal arrives.
    ///
    /// Each frame receives the wall-clock time since the previous one.
    /// The wait between frames doubles as the shutdown check.
    pub fn run(&mut self) {
        info!("Starting engine run loop (TPS: {})", self.tps);

        let frame_duration = Duration::from_secs_f64(1.0 / self.tps);
        let mut last = Instant::now();

        loop {
            let frame_start = Instant::now();
            let dt = frame_start.duration_since(last).as_secs_f32();
            last = frame_start;

            self.tick(dt);

            let remaining = frame_duration.saturating_sub(frame_start.elapsed());
            if self.wait_for_shutdown(remaining) == FrameControl::Exit {
                break;
            }
        }

        info!("Engine run loop exited after {} frames", self.frame);
    }

    fn wait_for_shutdown(&self, timeout: Duration) -> FrameControl {
        match self.shutdown_rx.recv_timeout(timeout) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => FrameControl::Exit,
            Err(RecvTimeoutError::Timeout) => FrameControl::Continue,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
