//! Movement domain: character controller plugin wiring and public exports.
//!
//! Fixed tick: resolve actions, probe the ground, then assign velocity (and
//! apply reset). Render tick: flip the sprite to match facing.

mod bindings;
mod bootstrap;
mod components;
mod controller;
pub mod dev;
mod probe;
mod resources;
mod systems;


pub use bindings::{
    ACTION_JUMP, ACTION_LEFT, ACTION_RESET, ACTION_RIGHT, ActionBindings, ActiveActions,
    KeySource, default_keys,
};
pub use bootstrap::{ControllerInitError, ControllerParts};
pub use components::{
    ControllerFailed, ControllerReady, Facing, GameLayer, Ground, MovementState, Player,
    StartState,
};
pub use controller::{CharacterState, MotionStep, step_motion};
pub use probe::{
    ColliderBounds, GroundProbe, PROBE_TOLERANCE, ProbeMode, ProbeSink, RayCaster,
};
pub use resources::{JumpPolicy, MovementInput, MovementTuning, ProbeGizmos};

use bevy::prelude::*;

use crate::movement::bootstrap::initialize_controllers;
use crate::movement::systems::{
    apply_motion, detect_ground, draw_ground_probe, read_input, sync_sprite_facing,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<ActionBindings>()
            .init_resource::<MovementInput>()
            .init_resource::<ProbeGizmos>()
            .add_systems(PreUpdate, initialize_controllers)
            .add_systems(
                FixedUpdate,
                (read_input, detect_ground, apply_motion).chain(),
            )
            .add_systems(Update, (sync_sprite_facing, draw_ground_probe));
    }
}
