//! Time-stepped transfers into containers.

use {
    bevy::prelude::*,
    cocktail_events::{PourGate, PourOutcome},
    cocktail_resources::{ContainerRegistry, LiquidColor},
    liquor_assets::LiquorCatalog,
    tuning_assets::BarTuning,
};

/// Pour rate and gate limits, taken from [`BarTuning`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PourSettings {
    /// ml per second
    pub rate: f32,
    pub max_distance: f32,
    pub cross_max_distance: f32,
    pub aim_cosine: f32,
}

impl Default for PourSettings {
    fn default() -> Self {
        Self::from(&BarTuning::default())
    }
}

impl From<&BarTuning> for PourSettings {
    fn from(tuning: &BarTuning) -> Self {
        Self {
            rate: tuning.pour_rate,
            max_distance: tuning.pour_distance,
            cross_max_distance: tuning.cross_pour_distance,
            aim_cosine: tuning.aim_cosine,
        }
    }
}

/// Gate verdict, checked distance first.
pub fn check_gate(gate: &PourGate, max_distance: f32, aim_cosine: f32) -> Option<PourOutcome> {
    if gate.source_position.distance(gate.target_position) > max_distance {
        return Some(PourOutcome::OutOfRange);
    }
    let to_target = (gate.target_position - gate.viewer_position).normalize_or_zero();
    let forward = gate.viewer_forward.normalize_or_zero();
    if forward.dot(to_target) < aim_cosine {
        return Some(PourOutcome::NotAimed);
    }
    None
}

#[derive(Resource, Debug, Default)]
pub struct PourEngine {
    pub settings: PourSettings,
    pouring: bool,
}

impl PourEngine {
    pub fn new(settings: PourSettings) -> Self {
        Self {
            settings,
            pouring: false,
        }
    }

    /// True between the first successful pour and `stop_pouring`.
    pub fn is_pouring(&self) -> bool {
        self.pouring
    }

    pub fn stop_pouring(&mut self) {
        self.pouring = false;
    }

    /// Pours `rate * dt` ml of `liquor` into `target`, clamped to capacity.
    ///
    /// Checks in order: target registered, target not full, gate (if any),
    /// liquor known. Any failed check leaves the target untouched.
    pub fn pour(
        &mut self,
        registry: &mut ContainerRegistry,
        catalog: &LiquorCatalog,
        target: Entity,
        liquor: &str,
        dt: f32,
        gate: Option<&PourGate>,
    ) -> PourOutcome {
        let Some(contents) = registry.get_mut(target) else {
            return PourOutcome::UnknownContainer;
        };
        if contents.is_full() {
            return PourOutcome::ContainerFull;
        }
        if let Some(gate) = gate {
            if let Some(rejection) =
                check_gate(gate, self.settings.max_distance, self.settings.aim_cosine)
            {
                return rejection;
            }
        }
        let Some(entry) = catalog.get(liquor) else {
            return PourOutcome::UnknownIngredient;
        };

        let amount = contents.add(
            liquor,
            self.settings.rate * dt,
            LiquidColor::from_hex(entry.color),
        );
        if amount <= 0.0 {
            return PourOutcome::ContainerFull;
        }
        self.pouring = true;
        PourOutcome::Poured { amount }
    }

    /// Moves a proportional slice of everything in `shaker` into `target`.
    ///
    /// The slice is `min(rate * dt, shaker volume, target capacity left)`.
    /// Uses the cross-container distance for the gate.
    pub fn pour_from_shaker(
        &mut self,
        registry: &mut ContainerRegistry,
        shaker: Entity,
        target: Entity,
        dt: f32,
        gate: Option<&PourGate>,
    ) -> PourOutcome {
        if shaker == target {
            return PourOutcome::UnknownContainer;
        }
        let (Some(source), Some(destination)) = (registry.get(shaker), registry.get(target)) else {
            return PourOutcome::UnknownContainer;
        };
        if destination.is_full() {
            return PourOutcome::ContainerFull;
        }
        if source.is_empty() {
            return PourOutcome::SourceEmpty;
        }
        if let Some(gate) = gate {
            if let Some(rejection) = check_gate(
                gate,
                self.settings.cross_max_distance,
                self.settings.aim_cosine,
            ) {
                return rejection;
            }
        }

        let amount = (self.settings.rate * dt)
            .min(source.volume())
            .min(destination.remaining_capacity());
        if amount <= 0.0 {
            return PourOutcome::ContainerFull;
        }

        let slices = match registry.get_mut(shaker) {
            Some(source) => source.take_proportional(amount),
            None => return PourOutcome::UnknownContainer,
        };
        let Some(destination) = registry.get_mut(target) else {
            return PourOutcome::UnknownContainer;
        };
        let mut moved = 0.0;
        for slice in slices {
            moved += destination.add(&slice.kind, slice.amount, slice.color);
        }
        self.pouring = true;
        PourOutcome::Poured { amount: moved }
    }
}
