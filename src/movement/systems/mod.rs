//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{detect_ground, draw_ground_probe};
pub(crate) use input::read_input;
pub(crate) use movement::{apply_motion, sync_sprite_facing};
