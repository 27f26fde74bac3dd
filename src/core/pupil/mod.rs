//=========================================================================
// Googly Eyes
//=========================================================================
//
// Pupil offset math and the behaviour that applies it to the world.
//
//=========================================================================

mod calculator;
mod controller;

pub use calculator::PupilOffsetCalculator;
pub use controller::EyeballController;
