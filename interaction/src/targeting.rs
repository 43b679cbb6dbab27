//! Crosshair ray against the bar's interaction boxes.

use {
    bar_components::InteractionBounds,
    bevy::{ecs::system::SystemParam, prelude::*},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub distance: f32,
}

/// Anything that can answer "what does this ray touch".
///
/// Hits are returned nearest first and never beyond `max_distance`.
pub trait RaycastProvider {
    fn cast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Vec<RayHit>;
}

/// Entry distance of a ray into an axis aligned box, or `None` on a miss.
/// Origins inside the box report 0.
pub fn ray_aabb(origin: Vec3, direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = direction.recip();

    let t1 = (min - origin) * inv;
    let t2 = (max - origin) * inv;

    let tmin = t1.min(t2).max_element().max(0.0);
    let tmax = t1.max(t2).min_element();

    (tmax >= tmin).then_some(tmin)
}

/// Slab caster over every `InteractionBounds`, each box living in its
/// entity's local space.
#[derive(SystemParam)]
pub struct BoundsCaster<'w, 's> {
    bounds: Query<'w, 's, (Entity, &'static GlobalTransform, &'static InteractionBounds)>,
}

impl RaycastProvider for BoundsCaster<'_, '_> {
    fn cast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Vec<RayHit> {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return Vec::new();
        }

        let mut hits: Vec<RayHit> = self
            .bounds
            .iter()
            .filter_map(|(entity, transform, bounds)| {
                // Local direction stays unnormalised so `t` is in world units.
                let to_local = transform.affine().inverse();
                let local_origin = to_local.transform_point3(origin);
                let local_direction = to_local.transform_vector3(direction);
                if !local_direction.is_finite() {
                    return None;
                }
                let distance = ray_aabb(
                    local_origin,
                    local_direction,
                    -bounds.half_extents,
                    bounds.half_extents,
                )?;
                (distance <= max_distance).then_some(RayHit { entity, distance })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

/// Walks from `entity` up through its parents until `accept` matches.
pub fn find_ancestor(
    entity: Entity,
    parent_of: impl Fn(Entity) -> Option<Entity>,
    accept: impl Fn(Entity) -> bool,
) -> Option<Entity> {
    let mut current = Some(entity);
    while let Some(candidate) = current {
        if accept(candidate) {
            return Some(candidate);
        }
        current = parent_of(candidate);
    }
    None
}
