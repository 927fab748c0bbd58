//! Locomotion domain: ground probing through avian spatial queries.

use std::collections::HashSet;

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::collaborators::GroundProbe;

/// `GroundProbe` over the physics world, blind to the probing character
/// itself and to every sensor collider.
pub(crate) struct AvianGroundProbe<'a, 'w, 's> {
    pub spatial: &'a SpatialQuery<'w, 's>,
    pub sensors: &'a HashSet<Entity>,
    pub character: Entity,
}

impl AvianGroundProbe<'_, '_, '_> {
    fn filter(&self, mask: u32) -> SpatialQueryFilter {
        SpatialQueryFilter::from_mask(LayerMask(mask)).with_excluded_entities([self.character])
    }
}

impl GroundProbe for AvianGroundProbe<'_, '_, '_> {
    fn overlap_sphere(&self, center: Vec3, radius: f32, mask: u32) -> bool {
        self.spatial
            .shape_intersections(
                &Collider::sphere(radius),
                center,
                Quat::IDENTITY,
                &self.filter(mask),
            )
            .into_iter()
            .any(|entity| !self.sensors.contains(&entity))
    }

    fn raycast_down(&self, origin: Vec3, max_distance: f32, mask: u32) -> Option<Vec3> {
        self.spatial
            .cast_ray_predicate(
                origin,
                Dir3::NEG_Y,
                max_distance,
                true,
                &self.filter(mask),
                &|entity| !self.sensors.contains(&entity),
            )
            .map(|hit| hit.normal)
    }
}
