//! Animation state selection and playback.
//!
//! The state is picked fresh every frame from ground contact and horizontal
//! speed; the animator only tracks frame progression within that state.

use avian2d::prelude::*;
use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::{ColliderBounds, ControllerReady, MovementTuning, Player};

/// Animation states for the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    /// Airborne, rising or falling.
    Jump,
}

impl AnimationState {
    pub fn name(self) -> &'static str {
        match self {
            AnimationState::Idle => "Idle",
            AnimationState::Walk => "Walk",
            AnimationState::Jump => "Jump",
        }
    }
}

/// Airborne wins over everything; otherwise walk iff horizontal speed
/// exceeds `epsilon`.
pub fn select_animation(grounded: bool, horizontal_velocity: f32, epsilon: f32) -> AnimationState {
    if !grounded {
        AnimationState::Jump
    } else if horizontal_velocity.abs() > epsilon {
        AnimationState::Walk
    } else {
        AnimationState::Idle
    }
}

/// Frame range of one state inside the sprite's texture atlas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    pub first_index: usize,
    pub frames: u32,
    /// Seconds per frame.
    pub frame_duration: f32,
    pub looping: bool,
}

#[derive(Debug, Clone)]
pub struct AnimationClips {
    pub idle: AnimationClip,
    pub walk: AnimationClip,
    pub jump: AnimationClip,
}

impl Default for AnimationClips {
    fn default() -> Self {
        Self {
            idle: AnimationClip {
                first_index: 0,
                frames: 4,
                frame_duration: 0.15,
                looping: true,
            },
            walk: AnimationClip {
                first_index: 4,
                frames: 4,
                frame_duration: 0.1,
                looping: true,
            },
            jump: AnimationClip {
                first_index: 8,
                frames: 2,
                frame_duration: 0.15,
                looping: false,
            },
        }
    }
}

impl AnimationClips {
    pub fn clip(&self, state: AnimationState) -> &AnimationClip {
        match state {
            AnimationState::Idle => &self.idle,
            AnimationState::Walk => &self.walk,
            AnimationState::Jump => &self.jump,
        }
    }
}

/// Ground contact as seen by the render tick, refreshed every frame.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderGrounded(pub bool);

/// Component for animation playback on the character sprite.
#[derive(Component, Debug, Default)]
#[require(RenderGrounded)]
pub struct SpriteAnimator {
    pub state: AnimationState,
    pub clips: AnimationClips,
    /// Current frame index within the clip (0-based).
    pub current_frame: u32,
    pub frame_timer: f32,
    /// Set once a non-looping clip reaches its last frame.
    pub finished: bool,
}

impl SpriteAnimator {
    pub fn new(clips: AnimationClips) -> Self {
        Self { clips, ..default() }
    }

    /// Switches to `state`, restarting playback only when it differs from the
    /// current one. Returns the previous state on a switch.
    pub fn play(&mut self, state: AnimationState) -> Option<AnimationState> {
        if self.state == state {
            return None;
        }
        let previous = self.state;
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
        Some(previous)
    }

    /// Advances playback by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.finished {
            return;
        }
        let clip = *self.clips.clip(self.state);
        if clip.frame_duration <= 0.0 {
            return;
        }
        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration && !self.finished {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frames {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = clip.frames.saturating_sub(1);
                    self.finished = true;
                }
            }
        }
    }

    /// Atlas index of the frame being shown.
    pub fn atlas_index(&self) -> usize {
        self.clips.clip(self.state).first_index + self.current_frame as usize
    }
}

/// Message fired when the selected animation state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}

/// Fresh ground probe for this frame's animation choice.
pub fn probe_render_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (&Transform, &Collider, &mut RenderGrounded),
        (With<Player>, With<ControllerReady>),
    >,
) {
    for (transform, collider, mut grounded) in &mut query {
        let bounds = ColliderBounds::from_collider(transform, collider);
        let now = tuning.probe.is_grounded(&bounds, &spatial_query);
        if grounded.0 != now {
            grounded.0 = now;
        }
    }
}

/// Picks the animation state from ground contact and the body's current
/// horizontal velocity.
pub fn select_animation_state(
    tuning: Res<MovementTuning>,
    mut query: Query<
        (Entity, &RenderGrounded, &LinearVelocity, &mut SpriteAnimator),
        (With<Player>, With<ControllerReady>),
    >,
    mut changed: MessageWriter<AnimationStateChanged>,
) {
    for (entity, grounded, velocity, mut animator) in &mut query {
        let state = select_animation(grounded.0, velocity.x, tuning.walk_epsilon);

        if let Some(from) = animator.play(state) {
            trace!("Animation {} -> {}", from.name(), state.name());
            changed.write(AnimationStateChanged {
                entity,
                from,
                to: state,
            });
        }
    }
}

/// System that updates animation frames based on time.
pub fn update_animation_frames(time: Res<Time>, mut query: Query<&mut SpriteAnimator>) {
    for mut animator in &mut query {
        animator.tick(time.delta_secs());
    }
}

/// Writes the animator's frame into the sprite's atlas, if it has one.
pub fn apply_animation_frame(mut query: Query<(&SpriteAnimator, &mut Sprite)>) {
    for (animator, mut sprite) in &mut query {
        let index = animator.atlas_index();
        let stale = sprite
            .texture_atlas
            .as_ref()
            .is_some_and(|atlas| atlas.index != index);
        if stale {
            if let Some(atlas) = sprite.texture_atlas.as_mut() {
                atlas.index = index;
            }
        }
    }
}
