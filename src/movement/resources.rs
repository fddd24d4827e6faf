//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

use crate::movement::{ActiveActions, GroundProbe};

/// How a grounded jump changes vertical velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum JumpPolicy {
    /// Vertical velocity is overwritten with `jump_force`.
    SetAbsolute,
    /// `jump_force - vy` is added, so takeoff speed never depends on the
    /// residual fall or rise speed.
    #[default]
    DeltaToTarget,
}

impl JumpPolicy {
    pub fn apply(self, vertical_velocity: f32, jump_force: f32) -> f32 {
        match self {
            JumpPolicy::SetAbsolute => jump_force,
            JumpPolicy::DeltaToTarget => vertical_velocity + (jump_force - vertical_velocity),
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_force: f32,
    pub jump_policy: JumpPolicy,
    pub probe: GroundProbe,
    /// Horizontal speeds at or below this count as standing still.
    pub walk_epsilon: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_force: 8.0,
            jump_policy: JumpPolicy::DeltaToTarget,
            probe: GroundProbe::default(),
            walk_epsilon: 0.01,
        }
    }
}

impl MovementTuning {
    /// Net horizontal velocity for this tick. Opposite presses cancel exactly.
    pub fn horizontal_intent(&self, actions: ActiveActions) -> f32 {
        let mut intent = 0.0;
        if actions.right {
            intent += self.move_speed;
        }
        if actions.left {
            intent -= self.move_speed;
        }
        intent
    }
}

/// Actions resolved from the keyboard for the current fixed tick.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub actions: ActiveActions,
}

/// Whether ground probe rays are drawn.
#[derive(Resource, Debug)]
pub struct ProbeGizmos {
    pub enabled: bool,
}

impl Default for ProbeGizmos {
    fn default() -> Self {
        Self {
            enabled: cfg!(feature = "dev-tools"),
        }
    }
}
