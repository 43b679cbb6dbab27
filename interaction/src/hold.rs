//! Who is holding what.
//!
//! Every registered interactable is either free (targetable, sitting in
//! or near its slot) or the single held object. All transitions are
//! no-ops when their precondition fails, so input can be polled every
//! frame without special casing.

use {
    crate::{
        physics::PhysicsBodies,
        targeting::{RayHit, find_ancestor},
    },
    bar_components::InteractableKind,
    bevy::prelude::*,
    interaction_events::PickupOutcome,
    std::collections::{HashMap, HashSet},
};

pub const DEFAULT_INTERACT_DISTANCE: f32 = 3.0;
pub const RETURN_TO_SLOT_GUIDANCE: &str = "Press R to put it back in its place";

/// Shelf pose recorded at registration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub position: Vec3,
    pub rotation: Quat,
}

impl From<&Transform> for Slot {
    fn from(transform: &Transform) -> Self {
        Self {
            position: transform.translation,
            rotation: transform.rotation,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Record {
    kind: InteractableKind,
    slot: Slot,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Targeted {
    pub object: Entity,
    pub kind: InteractableKind,
    pub distance: f32,
}

#[derive(Resource, Debug)]
pub struct InteractionState {
    pub max_distance: f32,
    records: HashMap<Entity, Record>,
    free: HashSet<Entity>,
    held: Option<Entity>,
    targeted: Option<Targeted>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(DEFAULT_INTERACT_DISTANCE)
    }
}

impl InteractionState {
    pub fn new(max_distance: f32) -> Self {
        Self {
            max_distance,
            records: HashMap::new(),
            free: HashSet::new(),
            held: None,
            targeted: None,
        }
    }

    /// Returns `false` if `object` was already registered; the first slot wins.
    pub fn register(&mut self, object: Entity, kind: InteractableKind, slot: Slot) -> bool {
        if self.records.contains_key(&object) {
            return false;
        }
        self.records.insert(object, Record { kind, slot });
        self.free.insert(object);
        true
    }

    pub fn unregister(&mut self, object: Entity) -> bool {
        if self.records.remove(&object).is_none() {
            return false;
        }
        self.free.remove(&object);
        if self.held == Some(object) {
            self.held = None;
        }
        if self.targeted.is_some_and(|t| t.object == object) {
            self.targeted = None;
        }
        true
    }

    pub fn is_registered(&self, object: Entity) -> bool {
        self.records.contains_key(&object)
    }

    pub fn is_free(&self, object: Entity) -> bool {
        self.free.contains(&object)
    }

    pub fn kind_of(&self, object: Entity) -> Option<InteractableKind> {
        self.records.get(&object).map(|record| record.kind)
    }

    pub fn slot_of(&self, object: Entity) -> Option<Slot> {
        self.records.get(&object).map(|record| record.slot)
    }

    /// Resolves the crosshair target from a nearest-first hit list.
    ///
    /// Each hit climbs to its nearest registered ancestor; the first one
    /// that is free becomes the target. Hits past `max_distance` are ignored.
    pub fn check_targeted(
        &mut self,
        hits: &[RayHit],
        parent_of: impl Fn(Entity) -> Option<Entity> + Copy,
    ) -> Option<Targeted> {
        self.targeted = hits
            .iter()
            .filter(|hit| hit.distance <= self.max_distance)
            .find_map(|hit| {
                let root = find_ancestor(hit.entity, parent_of, |e| self.is_registered(e))?;
                if !self.is_free(root) {
                    return None;
                }
                Some(Targeted {
                    object: root,
                    kind: self.records[&root].kind,
                    distance: hit.distance,
                })
            });
        self.targeted
    }

    pub fn clear_target(&mut self) {
        self.targeted = None;
    }

    /// Picks up the current target.
    pub fn pickup(&mut self, physics: &mut impl PhysicsBodies) -> PickupOutcome {
        if self.held.is_some() {
            return PickupOutcome::AlreadyHolding;
        }
        match self.targeted {
            Some(target) => self.pickup_object(target.object, physics),
            None => PickupOutcome::NothingTargeted,
        }
    }

    pub fn pickup_object(&mut self, object: Entity, physics: &mut impl PhysicsBodies) -> PickupOutcome {
        if self.held.is_some() {
            return PickupOutcome::AlreadyHolding;
        }
        let Some(record) = self.records.get(&object) else {
            return PickupOutcome::NotRegistered;
        };
        if !record.kind.is_portable() {
            return PickupOutcome::UseInPlace;
        }

        self.free.remove(&object);
        physics.set_dynamic(object, false);
        self.held = Some(object);
        self.targeted = None;
        PickupOutcome::PickedUp
    }

    /// Puts the held object back upright in its slot, frozen static.
    pub fn drop_to_original_slot(&mut self, physics: &mut impl PhysicsBodies) -> Option<Entity> {
        let object = self.held?;
        if let Some(record) = self.records.get(&object) {
            physics.freeze_at(object, record.slot.position, record.slot.rotation);
        }
        self.release(object);
        Some(object)
    }

    /// Free placement is disabled. Returns the guidance to show while
    /// holding, and never changes state.
    pub fn drop_in_place(&self) -> Option<&'static str> {
        self.held.map(|_| RETURN_TO_SLOT_GUIDANCE)
    }

    /// Throws the held object along `direction` with `force` m/s.
    pub fn throw_object(
        &mut self,
        direction: Vec3,
        force: f32,
        physics: &mut impl PhysicsBodies,
    ) -> Option<(Entity, Vec3)> {
        let object = self.held?;
        let velocity = direction.normalize_or_zero() * force;
        physics.set_dynamic(object, true);
        physics.set_velocity(object, velocity);
        self.release(object);
        Some((object, velocity))
    }

    fn release(&mut self, object: Entity) {
        self.free.insert(object);
        self.held = None;
    }

    pub fn held(&self) -> Option<Entity> {
        self.held
    }

    pub fn held_kind(&self) -> Option<InteractableKind> {
        self.held.and_then(|object| self.kind_of(object))
    }

    pub fn targeted(&self) -> Option<Targeted> {
        self.targeted
    }

    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }
}

/// Strictly closer than `max_distance`.
pub fn are_near(a: Vec3, b: Vec3, max_distance: f32) -> bool {
    a.distance(b) < max_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        dynamic: Vec<(Entity, bool)>,
        velocity: Vec<(Entity, Vec3)>,
        frozen: Vec<(Entity, Vec3, Quat)>,
    }

    impl PhysicsBodies for Recorder {
        fn set_dynamic(&mut self, object: Entity, dynamic: bool) {
            self.dynamic.push((object, dynamic));
        }

        fn set_velocity(&mut self, object: Entity, velocity: Vec3) {
            self.velocity.push((object, velocity));
        }

        fn freeze_at(&mut self, object: Entity, position: Vec3, rotation: Quat) {
            self.frozen.push((object, position, rotation));
        }
    }

    fn slot_at(x: f32) -> Slot {
        Slot {
            position: Vec3::new(x, 1.0, 0.0),
            rotation: Quat::IDENTITY,
        }
    }

    fn no_parent(_: Entity) -> Option<Entity> {
        None
    }

    #[test]
    fn test_nearest_free_hit_is_targeted() {
        let mut world = World::new();
        let glass = world.spawn_empty().id();
        let bottle = world.spawn_empty().id();
        let mut state = InteractionState::default();
        state.register(glass, InteractableKind::Glass, slot_at(0.0));
        state.register(bottle, InteractableKind::Bottle, slot_at(1.0));

        let hits = [
            RayHit {
                entity: bottle,
                distance: 1.0,
            },
            RayHit {
                entity: glass,
                distance: 2.0,
            },
        ];
        let target = state.check_targeted(&hits, no_parent).unwrap();
        assert_eq!(target.object, bottle);
        assert_eq!(target.kind, InteractableKind::Bottle);
    }

    #[test]
    fn test_hits_beyond_reach_are_ignored() {
        let mut world = World::new();
        let glass = world.spawn_empty().id();
        let mut state = InteractionState::default();
        state.register(glass, InteractableKind::Glass, slot_at(0.0));

        let hits = [RayHit {
            entity: glass,
            distance: 3.5,
        }];
        assert_eq!(state.check_targeted(&hits, no_parent), None);
    }

    #[test]
    fn test_unregistered_hit_without_registered_parent_is_ignored() {
        let mut world = World::new();
        let wall = world.spawn_empty().id();
        let mut state = InteractionState::default();

        let hits = [RayHit {
            entity: wall,
            distance: 1.0,
        }];
        assert_eq!(state.check_targeted(&hits, no_parent), None);
    }

    #[test]
    fn test_pickup_requires_target() {
        let mut state = InteractionState::default();
        let mut physics = Recorder::default();
        assert_eq!(state.pickup(&mut physics), PickupOutcome::NothingTargeted);
        assert!(physics.dynamic.is_empty());
    }

    #[test]
    fn test_guitar_is_used_in_place() {
        let mut world = World::new();
        let guitar = world.spawn_empty().id();
        let mut state = InteractionState::default();
        let mut physics = Recorder::default();
        state.register(guitar, InteractableKind::Guitar, slot_at(0.0));

        assert_eq!(
            state.pickup_object(guitar, &mut physics),
            PickupOutcome::UseInPlace
        );
        assert!(!state.is_holding());
        assert!(state.is_free(guitar));
    }

    #[test]
    fn test_drop_in_place_only_guides() {
        let mut world = World::new();
        let glass = world.spawn_empty().id();
        let mut state = InteractionState::default();
        let mut physics = Recorder::default();
        state.register(glass, InteractableKind::Glass, slot_at(0.0));

        assert_eq!(state.drop_in_place(), None);
        state.pickup_object(glass, &mut physics);
        assert_eq!(state.drop_in_place(), Some(RETURN_TO_SLOT_GUIDANCE));
        assert_eq!(state.held(), Some(glass));
    }

    #[test]
    fn test_throw_releases_with_velocity() {
        let mut world = World::new();
        let bottle = world.spawn_empty().id();
        let mut state = InteractionState::default();
        let mut physics = Recorder::default();
        state.register(bottle, InteractableKind::Bottle, slot_at(0.0));
        state.pickup_object(bottle, &mut physics);

        let (thrown, velocity) = state
            .throw_object(Vec3::new(0.0, 0.0, -2.0), 5.0, &mut physics)
            .unwrap();

        assert_eq!(thrown, bottle);
        assert_eq!(velocity, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(physics.dynamic.last(), Some(&(bottle, true)));
        assert_eq!(physics.velocity, vec![(bottle, velocity)]);
        assert!(state.is_free(bottle));
        assert!(!state.is_holding());
    }

    #[test]
    fn test_unregister_clears_held() {
        let mut world = World::new();
        let shaker = world.spawn_empty().id();
        let mut state = InteractionState::default();
        let mut physics = Recorder::default();
        state.register(shaker, InteractableKind::Shaker, slot_at(0.0));
        state.pickup_object(shaker, &mut physics);

        assert!(state.unregister(shaker));
        assert!(!state.is_holding());
        assert!(!state.unregister(shaker));
    }

    #[test]
    fn test_are_near_is_strict() {
        assert!(are_near(Vec3::ZERO, Vec3::new(0.4, 0.0, 0.0), 0.5));
        assert!(!are_near(Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0), 0.5));
    }
}
