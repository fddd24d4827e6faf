//! Movement domain: demo level, player spawn and debug toggles.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Player, ProbeGizmos};
use crate::sprites::{AnimationState, SpriteAnimator};

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Player,
        SpriteAnimator::default(),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Default]),
        ),
    ));
}

pub fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let prop_color = Color::srgb(0.35, 0.35, 0.5);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    let mut platform = |color: Color, size: Vec2, at: Vec2| {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(at.x, at.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    };

    // Floor
    platform(ground_color, Vec2::new(800.0, 40.0), Vec2::new(0.0, -200.0));
    // Platform 1 - left side
    platform(platform_color, Vec2::new(150.0, 20.0), Vec2::new(-250.0, -50.0));
    // Platform 2 - right side, higher
    platform(platform_color, Vec2::new(150.0, 20.0), Vec2::new(250.0, 50.0));

    // Solid box on the default layer: blocks movement but is not ground,
    // so standing on it reads as airborne.
    commands.spawn((
        Sprite {
            color: prop_color,
            custom_size: Some(Vec2::new(60.0, 60.0)),
            ..default()
        },
        Transform::from_xyz(120.0, -150.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(60.0, 60.0),
        CollisionLayers::new(GameLayer::Default, [GameLayer::Player]),
    ));
}

pub fn toggle_probe_gizmos(keyboard: Res<ButtonInput<KeyCode>>, mut gizmos: ResMut<ProbeGizmos>) {
    if keyboard.just_pressed(KeyCode::F1) {
        gizmos.enabled = !gizmos.enabled;
        info!("Ground probe gizmos: {}", gizmos.enabled);
    }
}

/// Stand-in for sprite sheets: tint the placeholder box by animation state.
pub fn tint_by_animation(mut query: Query<(&SpriteAnimator, &mut Sprite), With<Player>>) {
    for (animator, mut sprite) in &mut query {
        let color = match animator.state {
            AnimationState::Idle => Color::srgb(0.9, 0.9, 0.9),
            AnimationState::Walk => Color::srgb(0.7, 0.9, 1.0),
            AnimationState::Jump => Color::srgb(1.0, 0.85, 0.5),
        };
        if sprite.color != color {
            sprite.color = color;
        }
    }
}
