//! Requests into the mixing engines and the outcomes they report.
//!
//! Requests are level-triggered: the orchestrator sends a pour or shake
//! request every frame the input is held and a stop request on release.

use {
    bevy::prelude::*,
    cocktail_resources::DrinkSnapshot,
};

/// Distance and aim check for a pour. All positions are world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PourGate {
    pub source_position: Vec3,
    pub target_position: Vec3,
    pub viewer_position: Vec3,
    pub viewer_forward: Vec3,
}

/// Pour one ingredient from a bottle into a container for `dt` seconds.
#[derive(Event, Debug, Clone)]
pub struct PourRequest {
    pub source: Entity,
    pub target: Entity,
    pub liquor: String,
    pub dt: f32,
    pub gate: Option<PourGate>,
}

/// Pour a proportional slice of everything in a shaker into another container.
#[derive(Event, Debug, Clone)]
pub struct ShakerPourRequest {
    pub shaker: Entity,
    pub target: Entity,
    pub dt: f32,
    pub gate: Option<PourGate>,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct StopPouring;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PourOutcome {
    Poured { amount: f32 },
    ContainerFull,
    OutOfRange,
    NotAimed,
    UnknownContainer,
    UnknownIngredient,
    /// Shaker pours only
    SourceEmpty,
}

impl PourOutcome {
    pub fn poured(&self) -> bool {
        matches!(self, PourOutcome::Poured { .. })
    }
}

/// Reported after every pour request.
#[derive(Event, Debug, Clone)]
pub struct PourResolved {
    pub source: Entity,
    pub target: Entity,
    pub outcome: PourOutcome,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ShakeRequest {
    pub shaker: Entity,
    pub dt: f32,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct StopShaking {
    pub shaker: Entity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShakeOutcome {
    /// `enhanced` is true once the shake ran past the mixing threshold.
    Shaking { wobble_x: f32, wobble_z: f32, enhanced: bool },
    Empty,
}

#[derive(Event, Debug, Clone)]
pub struct ShakeResolved {
    pub shaker: Entity,
    pub outcome: ShakeOutcome,
}

/// Drink a container, instantly or through the lift-and-tilt animation.
#[derive(Event, Debug, Clone, Copy)]
pub struct DrinkRequest {
    pub container: Entity,
    pub animated: bool,
}

/// Pour a container out without drinking it.
#[derive(Event, Debug, Clone, Copy)]
pub struct EmptyContainerRequest {
    pub container: Entity,
}

/// The animated drink began.
#[derive(Event, Debug, Clone, Copy)]
pub struct DrinkStarted {
    pub container: Entity,
}

/// A drink was consumed and the container cleared.
#[derive(Event, Debug, Clone)]
pub struct DrinkFinished {
    pub container: Entity,
    pub snapshot: DrinkSnapshot,
}

/// Nothing to drink, or a drink is already in progress.
#[derive(Event, Debug, Clone, Copy)]
pub struct DrinkRejected {
    pub container: Entity,
}
