//=========================================================================
// Eyeball Controller
//=========================================================================
//
// Behaviour that drives one googly eye from a character's body.
//
// Each frame: read eyeball + pupil positions and body velocity from the
// world, run the calculator, write the pupil back.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::PupilOffsetCalculator;
use crate::core::behaviour::Behaviour;
use crate::core::config::PupilConfig;
use crate::core::error::BehaviourError;
use crate::core::globals::GlobalContext;
use crate::core::world::EntityId;

//=== EyeballController ===================================================

/// Googly-eye behaviour bound to three entities.
pub struct EyeballController {
    eyeball: EntityId,
    pupil: EntityId,
    body: EntityId,
    calculator: PupilOffsetCalculator,
    reported_missing: bool,
}

impl EyeballController {
    pub fn new(eyeball: EntityId, pupil: EntityId, body: EntityId, config: PupilConfig) -> Self {
        Self {
            eyeball,
            pupil,
            body,
            calculator: PupilOffsetCalculator::new(config),
            reported_missing: false,
        }
    }

    pub fn calculator(&self) -> &PupilOffsetCalculator {
        &self.calculator
    }

    /// Names the first reference that cannot be resolved this frame.
    fn missing_reference(&self, context: &GlobalContext) -> Option<String> {
        if context.world.position(self.eyeball).is_none() {
            return Some(format!("eyeball entity {:?}", self.eyeball));
        }
        if context.world.position(self.pupil).is_none() {
            return Some(format!("pupil entity {:?}", self.pupil));
        }
        if context.world.velocity(self.body).is_none() {
            return Some(format!("body on entity {:?}", self.body));
        }
        None
    }
}

impl Behaviour for EyeballController {
    fn name(&self) -> &'static str {
        "EyeballController"
    }

    fn update(&mut self, context: &mut GlobalContext, dt: f32) {
        let world = &context.world;
        let (Some(center), Some(pupil), Some(velocity)) = (
            world.position(self.eyeball),
            world.position(self.pupil),
            world.velocity(self.body),
        ) else {
            // Report once per disappearance, skip until the reference comes back
            if !self.reported_missing {
                self.reported_missing = true;
                let collaborator = self
                    .missing_reference(context)
                    .unwrap_or_else(|| "reference".to_string());
                context.diagnostics.report(BehaviourError::MissingCollaborator {
                    behaviour: self.name(),
                    collaborator,
                });
            }
            return;
        };

        self.reported_missing = false;
        let next = self.calculator.update(center, pupil, velocity, dt);
        context.world.set_position(self.pupil, next);
    }
}

//=========================================================================
// Tests
//=========================================================================
