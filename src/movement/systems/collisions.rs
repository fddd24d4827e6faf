//! Movement domain: ground detection systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ColliderBounds, ControllerReady, MovementState, MovementTuning, Player, ProbeGizmos,
};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (&Transform, &Collider, &mut MovementState),
        (With<Player>, With<ControllerReady>),
    >,
) {
    for (transform, collider, mut state) in &mut query {
        let bounds = ColliderBounds::from_collider(transform, collider);
        let was_on_ground = state.on_ground;
        state.on_ground = tuning.probe.is_grounded(&bounds, &spatial_query);

        if state.on_ground && !was_on_ground {
            debug!("Landed at {:?}", bounds.center);
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground at {:?}", bounds.center);
        }
    }
}

/// Draws the probe rays each frame while enabled.
pub(crate) fn draw_ground_probe(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    probe_gizmos: Res<ProbeGizmos>,
    mut gizmos: Gizmos,
    query: Query<(&Transform, &Collider), (With<Player>, With<ControllerReady>)>,
) {
    if !probe_gizmos.enabled {
        return;
    }

    for (transform, collider) in &query {
        let bounds = ColliderBounds::from_collider(transform, collider);
        tuning.probe.probe(&bounds, &spatial_query, &mut gizmos);
    }
}
