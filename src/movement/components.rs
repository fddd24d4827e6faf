//! Movement domain: components and physics layers for the character controller.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms). The only layer the ground probe sees.
    Ground,
    /// Player character
    Player,
}

/// Marks the entity driven by the controller.
#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Inserted once the player entity has passed dependency validation.
/// Tick systems only run for entities carrying it.
#[derive(Component, Debug)]
pub struct ControllerReady;

/// Inserted when validation fails, so the failure is reported once.
#[derive(Component, Debug)]
pub struct ControllerFailed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Facing after a tick with the given horizontal intent.
    /// Zero intent keeps the current facing.
    pub fn after_intent(self, intent: f32) -> Self {
        if intent < 0.0 {
            Facing::Left
        } else if intent > 0.0 {
            Facing::Right
        } else {
            self
        }
    }

    pub fn flip_x(self) -> bool {
        self == Facing::Left
    }
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
    /// Horizontal intent of the last fixed tick.
    pub intent: f32,
}

/// Pose captured when the controller is initialized. Reset restores it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct StartState {
    pub position: Vec3,
    pub rotation: Quat,
}

impl StartState {
    pub fn capture(transform: &Transform) -> Self {
        Self {
            position: transform.translation,
            rotation: transform.rotation,
        }
    }
}
