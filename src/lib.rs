//! Movement and animation-selection core for a 2D platformer character.
//!
//! The controller resolves keyboard actions, probes for ground beneath the
//! collider and assigns the body's velocity on every fixed tick; each frame it
//! picks the Idle/Walk/Jump animation and mirrors facing onto the sprite.

pub mod config;
pub mod movement;
pub mod sprites;

use bevy::prelude::*;

/// Everything the controller needs, minus the physics world itself.
pub struct PlatformerPlugin;

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            config::ConfigPlugin::default(),
            movement::MovementPlugin,
            sprites::SpritesPlugin,
        ));
    }
}
