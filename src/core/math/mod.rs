//=========================================================================
// Math Helpers
//=========================================================================

mod smooth_damp;

pub use smooth_damp::{smooth_damp_vec2, MIN_SMOOTH_TIME};
