use avian2d::prelude::*;
use bevy::prelude::*;

use platformer_controller::PlatformerPlugin;
use platformer_controller::movement::dev::{
    spawn_camera, spawn_player, spawn_test_room, tint_by_animation, toggle_probe_gizmos,
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * 1800.0))
        .add_plugins(PlatformerPlugin)
        .add_systems(Startup, (spawn_camera, spawn_test_room, spawn_player))
        .add_systems(Update, (toggle_probe_gizmos, tint_by_animation))
        .run();
}
