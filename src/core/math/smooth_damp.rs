//=========================================================================
// Smooth Damp
//=========================================================================
//
// Critically damped approach toward a moving target.
//
// Uses the polynomial approximation of exp(-omega * dt) from
// Game Programming Gems 4 (ch. 1.10). The caller owns the velocity
// accumulator and passes it back in every frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Constants ===========================================================

/// Lower bound applied to the smoothing time to keep omega finite.
pub const MIN_SMOOTH_TIME: f32 = 0.0001;

//=== Vec2 ================================================================

/// Moves `current` toward `target` over roughly `smooth_time` seconds.
///
/// `velocity` is updated in place. The step never overshoots the target.
/// A non-positive `dt` leaves both the value and the velocity untouched.
///
/// The change is limited by length to `max_speed * smooth_time`. A
/// negative `max_speed` holds the value in place and NaN means unbounded.
pub fn smooth_damp_vec2(
    current: Vec2,
    target: Vec2,
    velocity: &mut Vec2,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> Vec2 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let decay = decay_factor(omega * dt);

    let max_change = max_change(max_speed, smooth_time);
    let mut change = current - target;
    let change_sq = change.length_squared();
    if change_sq > max_change * max_change {
        change *= max_change / change_sq.sqrt();
    }
    let limited_target = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = limited_target + (change + temp) * decay;

    // Snap if we crossed the original target
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = (output - target) / dt;
    }

    output
}

//=== Helpers =============================================================

fn max_change(max_speed: f32, smooth_time: f32) -> f32 {
    if max_speed.is_nan() {
        return f32::INFINITY;
    }
    max_speed.max(0.0) * smooth_time
}

fn decay_factor(x: f32) -> f32 {
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

//=========================================================================
// Tests
//=========================================================================
