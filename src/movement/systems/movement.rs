//! Movement domain: fixed-tick motion and facing read-back.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    CharacterState, ControllerReady, MovementInput, MovementState, MovementTuning, Player,
    StartState, step_motion,
};

pub(crate) fn apply_motion(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &StartState,
            &mut MovementState,
            &mut Transform,
            &mut LinearVelocity,
            &mut AngularVelocity,
        ),
        (With<Player>, With<ControllerReady>),
    >,
) {
    for (start, mut state, mut transform, mut linear, mut angular) in &mut query {
        let before = CharacterState {
            position: transform.translation,
            rotation: transform.rotation,
            velocity: linear.0,
            angular_velocity: angular.0,
            facing: state.facing,
        };

        let step = step_motion(&tuning, input.actions, state.on_ground, start, before);

        linear.0 = step.state.velocity;
        angular.0 = step.state.angular_velocity;
        state.facing = step.state.facing;
        state.intent = step.intent;

        if step.jumped {
            debug!("Jump: vy {} -> {}", before.velocity.y, step.state.velocity.y);
        }
        if step.reset {
            transform.translation = step.state.position;
            transform.rotation = step.state.rotation;
            debug!("Reset to {:?}", start.position);
        }
    }
}

pub(crate) fn sync_sprite_facing(
    mut query: Query<(&MovementState, &mut Sprite), (With<Player>, Changed<MovementState>)>,
) {
    for (state, mut sprite) in &mut query {
        let flip = state.facing.flip_x();
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
