use {bar_components::InteractableKind, bevy::prelude::*};

/// Pick up `object`, or the current target when `None`.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PickupRequest {
    pub object: Option<Entity>,
}

/// Put the held object back in its shelf slot.
#[derive(Event, Debug, Clone, Copy)]
pub struct ReturnToSlotRequest;

/// Free placement. Always answered with guidance, never executed.
#[derive(Event, Debug, Clone, Copy)]
pub struct DropInPlaceRequest;

/// Throw the held object along the viewer's forward. `None` uses the tuned force.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ThrowRequest {
    pub force: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupOutcome {
    PickedUp,
    AlreadyHolding,
    NothingTargeted,
    NotRegistered,
    /// Target is not portable (guitar); use it in place instead.
    UseInPlace,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct PickedUp {
    pub object: Entity,
    pub kind: InteractableKind,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct PickupRejected {
    pub outcome: PickupOutcome,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ReturnedToSlot {
    pub object: Entity,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct Thrown {
    pub object: Entity,
    pub velocity: Vec3,
}

/// Hint for an input the bar refuses (e.g. dropping in place).
#[derive(Event, Debug, Clone)]
pub struct InteractionGuidance {
    pub message: String,
}

/// Play the targeted instrument. Audio lives outside the bar crates.
#[derive(Event, Debug, Clone, Copy)]
pub struct UseInstrument {
    pub object: Entity,
}
