use {
    crate::{
        hold::{InteractionState, Slot},
        physics::BodyControl,
        targeting::{BoundsCaster, RaycastProvider},
    },
    bar_components::{DrinkPose, Interactable, ShakeWobble, Viewer},
    bevy::prelude::*,
    interaction_events::{
        DropInPlaceRequest, InteractionGuidance, PickedUp, PickupOutcome, PickupRejected,
        PickupRequest, ReturnToSlotRequest, ReturnedToSlot, ThrowRequest, Thrown, UseInstrument,
    },
    tuning_assets::BarTuning,
};

pub fn apply_tuning(tuning: Res<BarTuning>, mut state: ResMut<InteractionState>) {
    state.max_distance = tuning.interact_distance;
}

/// Records the spawn pose of each new interactable as its slot.
pub fn register_new_interactables(
    mut state: ResMut<InteractionState>,
    query: Query<(Entity, &Interactable, &Transform), Added<Interactable>>,
) {
    for (entity, interactable, transform) in &query {
        if state.register(entity, interactable.kind, Slot::from(transform)) {
            debug!(
                "Registered {} {:?} at {}",
                interactable.kind.label(),
                entity,
                transform.translation
            );
        } else {
            warn!("Interactable {:?} registered twice", entity);
        }
    }
}

pub fn forget_removed_interactables(
    mut state: ResMut<InteractionState>,
    mut removed: RemovedComponents<Interactable>,
) {
    for entity in removed.read() {
        if state.unregister(entity) {
            debug!("Unregistered interactable {:?}", entity);
        }
    }
}

pub fn update_targeting(
    mut state: ResMut<InteractionState>,
    viewer: Query<&GlobalTransform, With<Viewer>>,
    caster: BoundsCaster,
    parents: Query<&ChildOf>,
) {
    let Ok(viewer) = viewer.single() else {
        state.clear_target();
        return;
    };
    let max_distance = state.max_distance;
    let hits = caster.cast(viewer.translation(), viewer.forward().as_vec3(), max_distance);
    state.check_targeted(&hits, |entity| parents.get(entity).ok().map(ChildOf::parent));
}

/// Keeps the held object at the hold offset, easing its rotation toward
/// the viewer's facing. Shake wobble and drink pose sit on top of that.
pub fn follow_viewer(
    state: Res<InteractionState>,
    tuning: Res<BarTuning>,
    viewer: Query<&GlobalTransform, With<Viewer>>,
    mut held: Query<(&mut Transform, Option<&ShakeWobble>, Option<&DrinkPose>), With<Interactable>>,
    mut base_rotation: Local<Option<(Entity, Quat)>>,
) {
    let Some(object) = state.held() else {
        *base_rotation = None;
        return;
    };
    let (Ok(viewer), Ok((mut transform, wobble, pose))) = (viewer.single(), held.get_mut(object))
    else {
        return;
    };

    let position = viewer.transform_point(tuning.hold_offset());
    let facing = Transform::from_translation(position)
        .looking_to(viewer.forward(), Vec3::Y)
        .rotation;
    let base = match *base_rotation {
        Some((entity, rotation)) if entity == object => rotation,
        _ => transform.rotation,
    };
    let base = base.slerp(facing, tuning.hold_slerp);
    *base_rotation = Some((object, base));

    let mut rotation = base;
    transform.translation = position;
    if let Some(pose) = pose {
        transform.translation.y += pose.lift;
        rotation *= Quat::from_rotation_x(pose.tilt);
    }
    if let Some(wobble) = wobble {
        rotation *= Quat::from_euler(EulerRot::XYZ, wobble.x, 0.0, wobble.z);
    }
    transform.rotation = rotation;
}

pub fn on_pickup_request(
    trigger: On<PickupRequest>,
    mut commands: Commands,
    mut state: ResMut<InteractionState>,
    mut bodies: BodyControl,
) {
    let request = trigger.event();
    let candidate = request
        .object
        .or_else(|| state.targeted().map(|target| target.object));
    let outcome = match request.object {
        Some(object) => state.pickup_object(object, &mut bodies),
        None => state.pickup(&mut bodies),
    };

    match (outcome, candidate) {
        (PickupOutcome::PickedUp, Some(object)) => {
            let kind = state.held_kind().unwrap_or_default();
            info!("Picked up {} {:?}", kind.label(), object);
            commands.trigger(PickedUp { object, kind });
        }
        (PickupOutcome::UseInPlace, Some(object)) => {
            debug!("{:?} is used in place", object);
            commands.trigger(UseInstrument { object });
        }
        (outcome, _) => {
            debug!("Pickup rejected: {:?}", outcome);
            commands.trigger(PickupRejected { outcome });
        }
    }
}

pub fn on_return_to_slot(
    _trigger: On<ReturnToSlotRequest>,
    mut commands: Commands,
    mut state: ResMut<InteractionState>,
    mut bodies: BodyControl,
) {
    if let Some(object) = state.drop_to_original_slot(&mut bodies) {
        info!("Returned {:?} to its slot", object);
        commands.trigger(ReturnedToSlot { object });
    }
}

pub fn on_drop_in_place(
    _trigger: On<DropInPlaceRequest>,
    mut commands: Commands,
    state: Res<InteractionState>,
) {
    if let Some(message) = state.drop_in_place() {
        commands.trigger(InteractionGuidance {
            message: message.to_string(),
        });
    }
}

pub fn on_throw_request(
    trigger: On<ThrowRequest>,
    mut commands: Commands,
    mut state: ResMut<InteractionState>,
    mut bodies: BodyControl,
    tuning: Res<BarTuning>,
    viewer: Query<&GlobalTransform, With<Viewer>>,
) {
    let force = trigger.event().force.unwrap_or(tuning.throw_force);
    let direction = viewer
        .single()
        .map(|viewer| viewer.forward().as_vec3())
        .unwrap_or(Vec3::NEG_Z);

    if let Some((object, velocity)) = state.throw_object(direction, force, &mut bodies) {
        info!("Threw {:?} at {}", object, velocity);
        commands.trigger(Thrown { object, velocity });
    }
}
