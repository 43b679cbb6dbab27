//! Maps keyboard and mouse to bar requests.
//!
//! | Input        | Not holding          | Holding                                  |
//! |--------------|----------------------|------------------------------------------|
//! | E            | pick up / play       |                                          |
//! | R            |                      | return to slot                           |
//! | Q            |                      | guidance only                            |
//! | T            |                      | throw                                    |
//! | LMB (held)   |                      | bottle: pour, shaker: pour or shake      |
//! | RMB          |                      | glass: drink                             |

use {
    bar_components::{Bottle, InteractableKind, Viewer},
    bevy::prelude::*,
    cocktail_events::{
        DrinkRequest, PourGate, PourRequest, ShakeRequest, ShakerPourRequest, StopPouring,
        StopShaking,
    },
    cocktail_resources::ContainerRegistry,
    interaction::InteractionState,
    interaction_events::{DropInPlaceRequest, PickupRequest, ReturnToSlotRequest, ThrowRequest},
};

/// Radians per second for the arrow-key look.
const LOOK_SPEED: f32 = 1.5;
const MAX_PITCH: f32 = 1.2;

fn pour_gate(
    source: Entity,
    target: Entity,
    transforms: &Query<&GlobalTransform>,
    viewer: &GlobalTransform,
) -> Option<PourGate> {
    Some(PourGate {
        source_position: transforms.get(source).ok()?.translation(),
        target_position: transforms.get(target).ok()?.translation(),
        viewer_position: viewer.translation(),
        viewer_forward: viewer.forward().as_vec3(),
    })
}

fn stop_actions(commands: &mut Commands, object: Entity, kind: InteractableKind) {
    commands.trigger(StopPouring);
    if kind == InteractableKind::Shaker {
        commands.trigger(StopShaking { shaker: object });
    }
}

#[allow(clippy::too_many_arguments)]
pub fn read_bar_input(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    state: Res<InteractionState>,
    registry: Res<ContainerRegistry>,
    bottles: Query<&Bottle>,
    transforms: Query<&GlobalTransform>,
    viewer: Query<&GlobalTransform, With<Viewer>>,
) {
    if keys.just_pressed(KeyCode::KeyQ) {
        commands.trigger(DropInPlaceRequest);
    }

    let Some((object, kind)) = state.held().zip(state.held_kind()) else {
        if keys.just_pressed(KeyCode::KeyE) {
            commands.trigger(PickupRequest::default());
        }
        return;
    };

    if keys.just_pressed(KeyCode::KeyR) {
        stop_actions(&mut commands, object, kind);
        commands.trigger(ReturnToSlotRequest);
        return;
    }
    if keys.just_pressed(KeyCode::KeyT) {
        stop_actions(&mut commands, object, kind);
        commands.trigger(ThrowRequest::default());
        return;
    }
    if mouse.just_released(MouseButton::Left) {
        stop_actions(&mut commands, object, kind);
    }

    if mouse.just_pressed(MouseButton::Right) && kind == InteractableKind::Glass {
        commands.trigger(DrinkRequest {
            container: object,
            animated: true,
        });
    }

    if !mouse.pressed(MouseButton::Left) {
        return;
    }
    let dt = time.delta_secs();
    let target = state
        .targeted()
        .map(|target| target.object)
        .filter(|target| registry.contains(*target));
    let gate = match (target, viewer.single()) {
        (Some(target), Ok(viewer)) => pour_gate(object, target, &transforms, viewer),
        _ => None,
    };

    match (kind, target, gate) {
        (InteractableKind::Bottle, Some(target), Some(gate)) => {
            let Ok(bottle) = bottles.get(object) else {
                warn!("held bottle {:?} has no liquor", object);
                return;
            };
            commands.trigger(PourRequest {
                source: object,
                target,
                liquor: bottle.liquor.clone(),
                dt,
                gate: Some(gate),
            });
        }
        (InteractableKind::Shaker, Some(target), Some(gate)) => {
            commands.trigger(ShakerPourRequest {
                shaker: object,
                target,
                dt,
                gate: Some(gate),
            });
        }
        (InteractableKind::Shaker, None, _) => {
            commands.trigger(ShakeRequest { shaker: object, dt });
        }
        _ => {}
    }
}

/// Arrow keys turn the viewer in place.
pub fn look_around(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut viewer: Query<&mut Transform, With<Viewer>>,
) {
    let mut yaw = 0.0;
    let mut pitch = 0.0;
    if keys.pressed(KeyCode::ArrowLeft) {
        yaw += 1.0;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        yaw -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        pitch += 1.0;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        pitch -= 1.0;
    }
    if yaw == 0.0 && pitch == 0.0 {
        return;
    }
    let Ok(mut transform) = viewer.single_mut() else {
        return;
    };

    let step = LOOK_SPEED * time.delta_secs();
    let (current_yaw, current_pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);
    let next_pitch = (current_pitch + pitch * step).clamp(-MAX_PITCH, MAX_PITCH);
    transform.rotation = Quat::from_euler(EulerRot::YXZ, current_yaw + yaw * step, next_pitch, 0.0);
}
