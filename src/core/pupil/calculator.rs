//=========================================================================
// Pupil Offset Calculator
//=========================================================================
//
// Per-frame pupil position for a googly eye.
//
//   target  = center + (0, -gravity) + body_velocity * inertia_scale
//   clamped = target pulled back onto the eyeball circle if outside it
//   pupil   = smooth_damp(pupil, clamped)
//
// Only the target is clamped. The smoothed pupil may lag outside the
// circle for a few frames while it converges.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::config::PupilConfig;
use crate::core::math::smooth_damp_vec2;

//=== PupilOffsetCalculator ===============================================

#[derive(Debug, Clone)]
pub struct PupilOffsetCalculator {
    config: PupilConfig,
    smoothing_velocity: Vec2,
}

impl PupilOffsetCalculator {
    pub fn new(config: PupilConfig) -> Self {
        Self {
            config,
            smoothing_velocity: Vec2::ZERO,
        }
    }

    pub fn config(&self) -> &PupilConfig {
        &self.config
    }

    /// Velocity carried between frames by the smoothing step.
    pub fn smoothing_velocity(&self) -> Vec2 {
        self.smoothing_velocity
    }

    //--- Target -----------------------------------------------------------

    /// Unclamped target: gravity bias plus velocity-driven inertia.
    pub fn raw_target(&self, eyeball_center: Vec2, body_velocity: Vec2) -> Vec2 {
        let gravity_offset = Vec2::new(0.0, -self.config.gravity_strength);
        let inertia_offset = body_velocity * self.config.inertia_scale;
        eyeball_center + gravity_offset + inertia_offset
    }

    /// Target clamped to the eyeball circle.
    ///
    /// A non-positive radius collapses the target onto the center.
    pub fn clamped_target(&self, eyeball_center: Vec2, body_velocity: Vec2) -> Vec2 {
        let target = self.raw_target(eyeball_center, body_velocity);
        let offset = target - eyeball_center;
        let radius = self.config.radius.max(0.0);

        if offset.length() > radius {
            eyeball_center + offset.normalize_or_zero() * radius
        } else {
            target
        }
    }

    //--- Update -----------------------------------------------------------

    /// Advances the pupil one frame and returns its new position.
    pub fn update(
        &mut self,
        eyeball_center: Vec2,
        current_pupil: Vec2,
        body_velocity: Vec2,
        dt: f32,
    ) -> Vec2 {
        let body_velocity = self.sanitize_velocity(body_velocity);
        let target = self.clamped_target(eyeball_center, body_velocity);

        smooth_damp_vec2(
            current_pupil,
            target,
            &mut self.smoothing_velocity,
            self.config.smoothing_time,
            self.config.max_speed.unwrap_or(f32::INFINITY),
            dt,
        )
    }

    fn sanitize_velocity(&self, velocity: Vec2) -> Vec2 {
        if !self.config.reject_non_finite || velocity.is_finite() {
            return velocity;
        }
        warn!("Ignoring non-finite body velocity {:?}", velocity);
        Vec2::ZERO
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const EPS: f32 = 1e-5;

    fn calculator() -> PupilOffsetCalculator {
        PupilOffsetCalculator::new(PupilConfig::default())
    }

    //--- Target -----------------------------------------------------------

    #[test]
    fn gravity_only_target_is_clamped_to_radius() {
        let calc = calculator();
        assert!(calc
            .raw_target(Vec2::ZERO, Vec2::ZERO)
            .abs_diff_eq(Vec2::new(0.0, -1.0), EPS));
        assert!(calc
            .clamped_target(Vec2::ZERO, Vec2::ZERO)
            .abs_diff_eq(Vec2::new(0.0, -0.35), EPS));
    }

    #[test]
    fn velocity_target_is_scaled_along_its_direction() {
        let calc = calculator();
        let velocity = Vec2::new(5.0, 0.0);

        let raw = calc.raw_target(Vec2::ZERO, velocity);
        assert!(raw.abs_diff_eq(Vec2::new(0.5, -1.0), EPS));
        assert!((raw.length() - 1.118_034).abs() < 1e-4);

        let clamped = calc.clamped_target(Vec2::ZERO, velocity);
        let expected = Vec2::new(0.5, -1.0).normalize() * 0.35;
        assert!(clamped.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn clamp_is_noop_inside_radius() {
        let calc = PupilOffsetCalculator::new(PupilConfig {
            radius: 2.0,
            ..PupilConfig::default()
        });
        let center = Vec2::new(3.0, 4.0);
        let velocity = Vec2::new(-2.0, 1.0);

        assert_eq!(
            calc.clamped_target(center, velocity),
            calc.raw_target(center, velocity)
        );
    }

    #[test]
    fn clamped_target_never_leaves_radius() {
        let calc = calculator();
        let center = Vec2::new(-1.5, 2.0);

        for vx in [-100.0, -7.5, -1.0, 0.0, 0.3, 4.0, 250.0] {
            for vy in [-60.0, -2.0, 0.0, 9.0, 1000.0] {
                let target = calc.clamped_target(center, Vec2::new(vx, vy));
                assert!((target - center).length() <= 0.35 + EPS);
            }
        }
    }

    #[test]
    fn clamp_holds_for_any_gravity() {
        for gravity in [-5.0, 0.0, 0.2, 1.0, 40.0] {
            let calc = PupilOffsetCalculator::new(PupilConfig {
                gravity_strength: gravity,
                ..PupilConfig::default()
            });
            let target = calc.clamped_target(Vec2::ZERO, Vec2::new(1.0, 1.0));
            assert!(target.length() <= 0.35 + EPS);
        }
    }

    #[test]
    fn non_positive_radius_collapses_to_center() {
        let center = Vec2::new(1.0, 1.0);
        for radius in [0.0, -0.5] {
            let calc = PupilOffsetCalculator::new(PupilConfig {
                radius,
                ..PupilConfig::default()
            });
            let target = calc.clamped_target(center, Vec2::new(3.0, 0.0));
            assert!(target.abs_diff_eq(center, EPS));
        }
    }

    //--- Update -----------------------------------------------------------

    #[test]
    fn steady_state_is_idempotent() {
        let mut calc = calculator();
        let target = calc.clamped_target(Vec2::ZERO, Vec2::ZERO);

        let next = calc.update(Vec2::ZERO, target, Vec2::ZERO, DT);

        assert!(next.abs_diff_eq(target, EPS));
        assert!(calc.smoothing_velocity().abs_diff_eq(Vec2::ZERO, EPS));
    }

    #[test]
    fn pupil_converges_to_clamped_target() {
        let mut calc = calculator();
        let center = Vec2::new(2.0, 1.0);
        let velocity = Vec2::new(5.0, 0.0);
        let mut pupil = center;

        for _ in 0..300 {
            pupil = calc.update(center, pupil, velocity, DT);
        }

        let target = calc.clamped_target(center, velocity);
        assert!(pupil.abs_diff_eq(target, 1e-3));
        assert!((pupil - center).length() <= 0.35 + 1e-3);
    }

    #[test]
    fn smoothing_velocity_persists_between_frames() {
        let mut calc = calculator();
        calc.update(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, DT);
        assert!(calc.smoothing_velocity().y < 0.0);
    }

    #[test]
    fn zero_smoothing_time_snaps_nearly_instantly() {
        let mut calc = PupilOffsetCalculator::new(PupilConfig {
            smoothing_time: 0.0,
            ..PupilConfig::default()
        });
        let next = calc.update(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, DT);
        assert!(next.abs_diff_eq(Vec2::new(0.0, -0.35), 1e-3));
    }

    #[test]
    fn negative_max_speed_never_pushes_pupil_away() {
        let mut calc = PupilOffsetCalculator::new(PupilConfig {
            max_speed: Some(-1.0),
            ..PupilConfig::default()
        });
        let target = calc.clamped_target(Vec2::ZERO, Vec2::ZERO);

        let next = calc.update(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, DT);

        assert!((next - target).length() <= target.length() + EPS);
        assert!(next.y <= 0.0);
    }

    #[test]
    fn non_finite_velocity_is_ignored_by_default() {
        let mut calc = calculator();
        let next = calc.update(Vec2::ZERO, Vec2::ZERO, Vec2::new(f32::NAN, 0.0), DT);
        assert!(next.is_finite());
    }

    #[test]
    fn non_finite_velocity_propagates_when_allowed() {
        let mut calc = PupilOffsetCalculator::new(PupilConfig {
            reject_non_finite: false,
            ..PupilConfig::default()
        });
        let next = calc.update(Vec2::ZERO, Vec2::ZERO, Vec2::new(f32::NAN, 0.0), DT);
        assert!(!next.is_finite());
    }
}
