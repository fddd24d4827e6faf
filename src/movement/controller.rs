//! Movement domain: fixed-tick motion rules.

use bevy::prelude::*;

use crate::movement::{ActiveActions, Facing, MovementTuning, StartState};

/// Snapshot of the body the controller drives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterState {
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionStep {
    pub state: CharacterState,
    pub intent: f32,
    pub jumped: bool,
    pub reset: bool,
}

/// One fixed tick. Horizontal velocity is re-derived from `actions` every call,
/// vertical velocity only changes on a grounded jump, and reset overrides
/// everything else computed this tick.
pub fn step_motion(
    tuning: &MovementTuning,
    actions: ActiveActions,
    grounded: bool,
    start: &StartState,
    mut state: CharacterState,
) -> MotionStep {
    let intent = tuning.horizontal_intent(actions);

    let jumped = actions.jump && grounded;
    let vertical = if jumped {
        tuning
            .jump_policy
            .apply(state.velocity.y, tuning.jump_force)
    } else {
        state.velocity.y
    };

    state.velocity = Vec2::new(intent, vertical);
    state.facing = state.facing.after_intent(intent);

    if actions.reset {
        state.position = start.position;
        state.rotation = start.rotation;
        state.velocity = Vec2::ZERO;
        state.angular_velocity = 0.0;
    }

    MotionStep {
        state,
        intent,
        jumped,
        reset: actions.reset,
    }
}
