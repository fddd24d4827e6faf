//! Sprites: tests for animation selection and playback.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::animation::AnimationClip;
use super::{
    AnimationClips, AnimationState, AnimationStateChanged, RenderGrounded,
    SpriteAnimator, select_animation, select_animation_state,
};
use crate::movement::{ControllerReady, MovementTuning, Player};

const EPSILON: f32 = 0.01;

// -----------------------------------------------------------------------------
// Selection tests
// -----------------------------------------------------------------------------

#[test]
fn test_airborne_always_jumps() {
    for vx in [0.0, 0.005, -3.0, 250.0] {
        assert_eq!(select_animation(false, vx, EPSILON), AnimationState::Jump);
    }
}

#[test]
fn test_grounded_walk_above_epsilon() {
    assert_eq!(select_animation(true, 5.0, EPSILON), AnimationState::Walk);
    assert_eq!(select_animation(true, -5.0, EPSILON), AnimationState::Walk);
    assert_eq!(select_animation(true, 0.02, EPSILON), AnimationState::Walk);
}

#[test]
fn test_grounded_idle_at_or_below_epsilon() {
    assert_eq!(select_animation(true, 0.0, EPSILON), AnimationState::Idle);
    assert_eq!(select_animation(true, 0.005, EPSILON), AnimationState::Idle);
    assert_eq!(select_animation(true, -0.005, EPSILON), AnimationState::Idle);
    assert_eq!(select_animation(true, EPSILON, EPSILON), AnimationState::Idle);
}

#[test]
fn test_state_names() {
    assert_eq!(AnimationState::Idle.name(), "Idle");
    assert_eq!(AnimationState::Walk.name(), "Walk");
    assert_eq!(AnimationState::Jump.name(), "Jump");
}

// -----------------------------------------------------------------------------
// SpriteAnimator tests
// -----------------------------------------------------------------------------

#[test]
fn test_play_same_state_keeps_progress() {
    let mut animator = SpriteAnimator::default();
    animator.tick(0.2);
    let frame = animator.current_frame;
    assert_eq!(frame, 1);

    assert_eq!(animator.play(AnimationState::Idle), None);
    assert_eq!(animator.current_frame, frame);
}

#[test]
fn test_play_new_state_restarts() {
    let mut animator = SpriteAnimator::default();
    animator.tick(0.2);

    assert_eq!(
        animator.play(AnimationState::Walk),
        Some(AnimationState::Idle)
    );
    assert_eq!(animator.state, AnimationState::Walk);
    assert_eq!(animator.current_frame, 0);
    assert_eq!(animator.frame_timer, 0.0);
}

#[test]
fn test_looping_clip_wraps() {
    let mut animator = SpriteAnimator::default();
    animator.play(AnimationState::Walk);

    // 4 frames at 0.1s
    for _ in 0..4 {
        animator.tick(0.1);
    }
    assert_eq!(animator.current_frame, 0);
    assert!(!animator.finished);
}

#[test]
fn test_jump_clip_holds_last_frame() {
    let mut animator = SpriteAnimator::default();
    animator.play(AnimationState::Jump);

    animator.tick(1.0);
    assert!(animator.finished);
    assert_eq!(animator.current_frame, 1);
    assert_eq!(animator.atlas_index(), 9);

    animator.tick(1.0);
    assert_eq!(animator.current_frame, 1);
}

#[test]
fn test_atlas_index_offsets_by_clip() {
    let clips = AnimationClips {
        walk: AnimationClip {
            first_index: 20,
            frames: 3,
            frame_duration: 0.5,
            looping: true,
        },
        ..AnimationClips::default()
    };
    let mut animator = SpriteAnimator::new(clips);
    animator.play(AnimationState::Walk);
    animator.tick(0.6);

    assert_eq!(animator.atlas_index(), 21);
}

#[test]
fn test_zero_duration_clip_does_not_advance() {
    let clips = AnimationClips {
        idle: AnimationClip {
            first_index: 0,
            frames: 2,
            frame_duration: 0.0,
            looping: true,
        },
        ..AnimationClips::default()
    };
    let mut animator = SpriteAnimator::new(clips);
    animator.tick(1.0);

    assert_eq!(animator.current_frame, 0);
}

// -----------------------------------------------------------------------------
// System tests
// -----------------------------------------------------------------------------

#[derive(Resource, Default)]
struct SeenChanges(Vec<(AnimationState, AnimationState)>);

fn record_changes(
    mut changes: MessageReader<AnimationStateChanged>,
    mut seen: ResMut<SeenChanges>,
) {
    for change in changes.read() {
        seen.0.push((change.from, change.to));
    }
}

fn selection_app() -> App {
    let mut app = App::new();
    app.init_resource::<MovementTuning>()
        .init_resource::<SeenChanges>()
        .add_message::<AnimationStateChanged>()
        .add_systems(Update, (select_animation_state, record_changes).chain());
    app
}

#[test]
fn test_selection_system_plays_state_and_reports_switches() {
    let mut app = selection_app();
    let entity = app
        .world_mut()
        .spawn((
            Player,
            ControllerReady,
            SpriteAnimator::default(),
            RenderGrounded(true),
            LinearVelocity(Vec2::new(5.0, 0.0)),
        ))
        .id();

    app.update();
    assert_eq!(
        app.world().get::<SpriteAnimator>(entity).unwrap().state,
        AnimationState::Walk
    );

    // Same state again: no switch reported.
    app.update();

    app.world_mut().get_mut::<RenderGrounded>(entity).unwrap().0 = false;
    app.update();
    assert_eq!(
        app.world().get::<SpriteAnimator>(entity).unwrap().state,
        AnimationState::Jump
    );

    assert_eq!(
        app.world().resource::<SeenChanges>().0,
        vec![
            (AnimationState::Idle, AnimationState::Walk),
            (AnimationState::Walk, AnimationState::Jump),
        ]
    );
}

#[test]
fn test_animator_requires_ground_contact() {
    let mut world = World::new();
    let entity = world.spawn(SpriteAnimator::default()).id();
    assert_eq!(world.get::<RenderGrounded>(entity), Some(&RenderGrounded(false)));
}
