//! Sprites module for character animation.
//!
//! This module handles:
//! - Selecting Idle/Walk/Jump each frame from ground contact and velocity
//! - Frame playback within the selected clip

pub mod animation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationStateChanged>().add_systems(
            Update,
            (
                probe_render_ground,
                select_animation_state,
                update_animation_frames,
                apply_animation_frame,
            )
                .chain(),
        );
    }
}
