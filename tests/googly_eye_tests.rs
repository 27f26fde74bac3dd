//! End-to-end tests for googly-eye pupils driven by the engine.

use glam::Vec2;
use googly_stage::prelude::*;

const RADIUS: f32 = 0.35;

struct Rig {
    engine: Engine,
    body: EntityId,
    eyeball: EntityId,
    pupil: EntityId,
}

fn rig(config: PupilConfig, velocity: Vec2) -> Rig {
    let mut ids = None;
    let engine = EngineBuilder::new().build().init(|systems, context| {
        let body = context.world.spawn_body(Vec2::ZERO, velocity);
        let eyeball = context.world.spawn(Vec2::new(0.2, 0.8));
        let pupil = context.world.spawn(Vec2::new(0.2, 0.8));
        systems
            .behaviours
            .register(EyeballController::new(eyeball, pupil, body, config));
        ids = Some((body, eyeball, pupil));
    });

    let (body, eyeball, pupil) = ids.unwrap();
    Rig {
        engine,
        body,
        eyeball,
        pupil,
    }
}

fn pupil_offset(rig: &Rig) -> Vec2 {
    let world = &rig.engine.context().world;
    world.position(rig.pupil).unwrap() - world.position(rig.eyeball).unwrap()
}

#[test]
fn resting_pupil_hangs_at_bottom_of_eye() {
    let mut rig = rig(PupilConfig::default(), Vec2::ZERO);

    rig.engine.run_frames(300);

    assert!(pupil_offset(&rig).abs_diff_eq(Vec2::new(0.0, -RADIUS), 1e-3));
}

#[test]
fn pupil_follows_body_velocity_changes() {
    let mut rig = rig(PupilConfig::default(), Vec2::new(5.0, 0.0));
    rig.engine.run_frames(300);
    let right = pupil_offset(&rig);
    assert!(right.x > 0.0);

    rig.engine
        .context_mut()
        .world
        .set_velocity(rig.body, Vec2::new(-5.0, 0.0));
    rig.engine.run_frames(300);
    let left = pupil_offset(&rig);

    assert!(left.x < 0.0);
    assert!((left.length() - RADIUS).abs() < 1e-3);
}

#[test]
fn eye_follows_moving_eyeball() {
    let mut rig = rig(PupilConfig::default(), Vec2::ZERO);
    rig.engine.run_frames(300);

    rig.engine
        .context_mut()
        .world
        .set_position(rig.eyeball, Vec2::new(10.0, -3.0));
    rig.engine.run_frames(300);

    let pupil = rig.engine.context().world.position(rig.pupil).unwrap();
    assert!(pupil.abs_diff_eq(Vec2::new(10.0, -3.0 - RADIUS), 1e-3));
}

#[test]
fn small_offsets_are_not_clamped() {
    let config = PupilConfig {
        radius: 1.0,
        gravity_strength: 0.25,
        ..PupilConfig::default()
    };
    let mut rig = rig(config, Vec2::new(2.0, 0.0));

    rig.engine.run_frames(300);

    // raw target offset (0.2, -0.25) lies inside the eyeball
    assert!(pupil_offset(&rig).abs_diff_eq(Vec2::new(0.2, -0.25), 1e-3));
}

#[test]
fn despawned_body_is_reported_once_and_pupil_freezes() {
    let mut rig = rig(PupilConfig::default(), Vec2::ZERO);
    rig.engine.run_frames(10);
    let frozen = rig.engine.context().world.position(rig.pupil).unwrap();

    rig.engine.context_mut().world.despawn(rig.body);
    rig.engine.run_frames(30);

    let context = rig.engine.context();
    assert_eq!(context.diagnostics.len(), 1);
    assert_eq!(context.world.position(rig.pupil), Some(frozen));
}
