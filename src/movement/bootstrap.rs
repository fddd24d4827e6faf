//! Movement domain: controller initialization and dependency validation.

use std::fmt;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ColliderBounds, ControllerFailed, ControllerReady, MovementState, Player, StartState,
};
use crate::sprites::SpriteAnimator;

/// Fatal setup failure for a player entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerInitError {
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },
}

impl fmt::Display for ControllerInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerInitError::MissingComponent { entity, component } => {
                write!(f, "player {entity} is missing required component {component}")
            }
        }
    }
}

impl std::error::Error for ControllerInitError {}

/// Which of the controller's collaborators a player entity carries.
#[derive(Debug, Clone, Copy)]
pub struct ControllerParts {
    pub rigid_body: bool,
    pub collider: bool,
    pub sprite: bool,
    pub animator: bool,
}

impl ControllerParts {
    pub fn validate(&self, entity: Entity) -> Result<(), ControllerInitError> {
        let required = [
            (self.rigid_body, "RigidBody"),
            (self.collider, "Collider"),
            (self.sprite, "Sprite"),
            (self.animator, "SpriteAnimator"),
        ];

        if let Some(&(_, component)) = required.iter().find(|(present, _)| !present) {
            return Err(ControllerInitError::MissingComponent { entity, component });
        }
        Ok(())
    }
}

/// Validates newly spawned players, captures their start pose and enables
/// ticking. A player that fails validation stops the app.
pub(crate) fn initialize_controllers(
    mut commands: Commands,
    query: Query<
        (
            Entity,
            &Transform,
            Option<&Collider>,
            Has<RigidBody>,
            Has<Sprite>,
            Has<SpriteAnimator>,
        ),
        (
            With<Player>,
            Without<ControllerReady>,
            Without<ControllerFailed>,
        ),
    >,
    mut exit: MessageWriter<AppExit>,
) {
    for (entity, transform, collider, rigid_body, sprite, animator) in &query {
        let parts = ControllerParts {
            rigid_body,
            collider: collider.is_some(),
            sprite,
            animator,
        };

        if let Err(e) = parts.validate(entity) {
            error!("Controller initialization failed: {}", e);
            commands.entity(entity).insert(ControllerFailed);
            exit.write(AppExit::error());
            continue;
        }

        let start = StartState::capture(transform);
        info!(
            "Controller ready: entity={}, start={:?}, half_extents={:?}",
            entity,
            start.position,
            collider.map(|c| ColliderBounds::from_collider(transform, c).extents)
        );

        commands.entity(entity).insert((
            start,
            MovementState::default(),
            ControllerReady,
        ));
    }
}
