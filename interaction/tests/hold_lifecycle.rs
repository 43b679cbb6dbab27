use {
    bar_components::InteractableKind,
    bevy::prelude::*,
    interaction::{InteractionState, PhysicsBodies, RayHit, Slot},
    interaction_events::PickupOutcome,
    std::collections::HashMap,
};

#[derive(Default)]
struct FakeBodies {
    dynamic: HashMap<Entity, bool>,
    poses: HashMap<Entity, (Vec3, Quat)>,
}

impl PhysicsBodies for FakeBodies {
    fn set_dynamic(&mut self, object: Entity, dynamic: bool) {
        self.dynamic.insert(object, dynamic);
    }

    fn set_velocity(&mut self, _object: Entity, _velocity: Vec3) {}

    fn freeze_at(&mut self, object: Entity, position: Vec3, rotation: Quat) {
        self.dynamic.insert(object, false);
        self.poses.insert(object, (position, rotation));
    }
}

struct Bar {
    state: InteractionState,
    bodies: FakeBodies,
    glass: Entity,
    glass_rim: Entity,
    bottle: Entity,
    parents: HashMap<Entity, Entity>,
}

fn bar() -> Bar {
    let mut world = World::new();
    let glass = world.spawn_empty().id();
    let glass_rim = world.spawn_empty().id();
    let bottle = world.spawn_empty().id();

    let mut state = InteractionState::new(3.0);
    state.register(
        glass,
        InteractableKind::Glass,
        Slot {
            position: Vec3::new(0.0, 1.0, -1.0),
            rotation: Quat::IDENTITY,
        },
    );
    state.register(
        bottle,
        InteractableKind::Bottle,
        Slot {
            position: Vec3::new(1.0, 1.5, -2.0),
            rotation: Quat::IDENTITY,
        },
    );

    Bar {
        state,
        bodies: FakeBodies::default(),
        glass,
        glass_rim,
        bottle,
        parents: HashMap::from([(glass_rim, glass)]),
    }
}

fn hit(entity: Entity, distance: f32) -> RayHit {
    RayHit { entity, distance }
}

#[test]
fn full_hold_cycle_through_composite_glass() {
    let mut bar = bar();
    let parents = bar.parents.clone();
    let parent_of = |entity: Entity| parents.get(&entity).copied();

    let target = bar
        .state
        .check_targeted(&[hit(bar.glass_rim, 1.2)], parent_of)
        .expect("rim should resolve to the glass");
    assert_eq!(target.object, bar.glass);

    assert_eq!(bar.state.pickup(&mut bar.bodies), PickupOutcome::PickedUp);
    assert!(!bar.bodies.dynamic[&bar.glass]);

    // A held glass can no longer be targeted, the bottle behind it can.
    let target = bar
        .state
        .check_targeted(&[hit(bar.glass_rim, 0.5), hit(bar.bottle, 2.0)], parent_of)
        .expect("bottle should be targeted");
    assert_eq!(target.object, bar.bottle);

    assert_eq!(bar.state.pickup(&mut bar.bodies), PickupOutcome::AlreadyHolding);
    assert_eq!(bar.state.held(), Some(bar.glass));

    assert_eq!(bar.state.drop_to_original_slot(&mut bar.bodies), Some(bar.glass));
    assert_eq!(
        bar.bodies.poses[&bar.glass],
        (Vec3::new(0.0, 1.0, -1.0), Quat::IDENTITY)
    );
    assert!(bar.state.is_free(bar.glass));
    assert_eq!(bar.state.drop_to_original_slot(&mut bar.bodies), None);
}

#[test]
fn throw_then_pick_up_again() {
    let mut bar = bar();
    let bottle = bar.bottle;

    assert_eq!(
        bar.state.pickup_object(bottle, &mut bar.bodies),
        PickupOutcome::PickedUp
    );
    let (thrown, velocity) = bar
        .state
        .throw_object(Vec3::NEG_Z, 5.0, &mut bar.bodies)
        .expect("bottle is held");
    assert_eq!(thrown, bottle);
    assert_eq!(velocity, Vec3::new(0.0, 0.0, -5.0));
    assert!(bar.bodies.dynamic[&bottle]);

    assert!(bar.state.throw_object(Vec3::NEG_Z, 5.0, &mut bar.bodies).is_none());
    assert_eq!(
        bar.state.pickup_object(bottle, &mut bar.bodies),
        PickupOutcome::PickedUp
    );
}

#[test]
fn double_registration_keeps_first_slot() {
    let mut bar = bar();
    let moved = Slot {
        position: Vec3::splat(9.0),
        rotation: Quat::IDENTITY,
    };

    assert!(!bar.state.register(bar.glass, InteractableKind::Glass, moved));
    assert_eq!(
        bar.state.slot_of(bar.glass).map(|slot| slot.position),
        Some(Vec3::new(0.0, 1.0, -1.0))
    );
}
