//! Movement domain: downward ground probe.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::Deserialize;

use crate::movement::GameLayer;

/// Extra ray length past the collider's half height, absorbing contact
/// imprecision.
pub const PROBE_TOLERANCE: f32 = 0.05;

/// World-space bounds of the character collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderBounds {
    pub center: Vec2,
    pub extents: Vec2,
}

impl ColliderBounds {
    /// Axis-aligned bounds of `collider` placed at `transform`, rotation
    /// included.
    pub fn from_collider(transform: &Transform, collider: &Collider) -> Self {
        let (angle, _, _) = transform.rotation.to_euler(EulerRot::ZYX);
        let aabb = collider.aabb(transform.translation.truncate(), Rotation::radians(angle));
        Self::from_aabb(&aabb)
    }

    pub fn from_aabb(aabb: &ColliderAabb) -> Self {
        Self {
            center: (aabb.min + aabb.max) * 0.5,
            extents: (aabb.max - aabb.min) * 0.5,
        }
    }
}

/// Physics ray query against the world.
pub trait RayCaster {
    /// Distance to the first surface in `mask` straight below `origin`, if any
    /// lies within `max_distance`.
    fn cast_down(&self, origin: Vec2, max_distance: f32, mask: LayerMask) -> Option<f32>;
}

impl RayCaster for SpatialQuery<'_, '_> {
    fn cast_down(&self, origin: Vec2, max_distance: f32, mask: LayerMask) -> Option<f32> {
        let filter = SpatialQueryFilter::from_mask(mask);
        self.cast_ray(origin, Dir2::NEG_Y, max_distance, true, &filter)
            .map(|hit| hit.distance)
    }
}

/// Receives each probe ray for debug drawing.
pub trait ProbeSink {
    fn ray(&mut self, origin: Vec2, length: f32, grounded: bool);
}

impl ProbeSink for () {
    fn ray(&mut self, _origin: Vec2, _length: f32, _grounded: bool) {}
}

impl ProbeSink for Gizmos<'_, '_> {
    fn ray(&mut self, origin: Vec2, length: f32, grounded: bool) {
        let color = if grounded {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };
        self.line_2d(origin, origin - Vec2::new(0.0, length), color);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ProbeMode {
    /// One ray from the bounds center.
    Center,
    /// One ray from each of the left and right bounds edges.
    #[default]
    Edges,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroundProbe {
    pub mode: ProbeMode,
    /// Fixed at [`PROBE_TOLERANCE`]; not read from config.
    #[serde(skip, default = "probe_tolerance")]
    pub tolerance: f32,
}

fn probe_tolerance() -> f32 {
    PROBE_TOLERANCE
}

impl Default for GroundProbe {
    fn default() -> Self {
        Self {
            mode: ProbeMode::Edges,
            tolerance: PROBE_TOLERANCE,
        }
    }
}

impl GroundProbe {
    pub fn mask(&self) -> LayerMask {
        GameLayer::Ground.into()
    }

    pub fn ray_length(&self, bounds: &ColliderBounds) -> f32 {
        bounds.extents.y + self.tolerance
    }

    /// Ray origins at the collider's vertical center.
    pub fn origins(&self, bounds: &ColliderBounds) -> Vec<Vec2> {
        match self.mode {
            ProbeMode::Center => vec![bounds.center],
            ProbeMode::Edges => {
                let half_width = Vec2::new(bounds.extents.x, 0.0);
                vec![bounds.center - half_width, bounds.center + half_width]
            }
        }
    }

    pub fn is_grounded(&self, bounds: &ColliderBounds, caster: &impl RayCaster) -> bool {
        self.probe(bounds, caster, &mut ())
    }

    /// Grounded iff any ray hits ground. Every ray is reported to `sink` with
    /// the combined result.
    pub fn probe(
        &self,
        bounds: &ColliderBounds,
        caster: &impl RayCaster,
        sink: &mut impl ProbeSink,
    ) -> bool {
        let length = self.ray_length(bounds);
        let mask = self.mask();
        let origins = self.origins(bounds);
        let grounded = origins
            .iter()
            .any(|&origin| caster.cast_down(origin, length, mask).is_some());

        for origin in origins {
            sink.ray(origin, length, grounded);
        }
        grounded
    }
}
