use {
    bevy::prelude::*,
    system_schedule::BarSchedule,
    tuning_assets::BarTuning,
};

pub mod hints;
pub mod hold;
pub mod physics;
pub mod systems;
pub mod targeting;


pub use {
    hints::{HintSubject, interaction_hint},
    hold::{InteractionState, Slot, Targeted, are_near},
    physics::{BodyControl, PhysicsBodies},
    targeting::{BoundsCaster, RayHit, RaycastProvider},
};

/// Targeting, the hold machine and the body control behind it.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionState>()
            .init_resource::<BarTuning>()
            .add_observer(systems::on_pickup_request)
            .add_observer(systems::on_return_to_slot)
            .add_observer(systems::on_drop_in_place)
            .add_observer(systems::on_throw_request)
            .add_systems(
                PreUpdate,
                (
                    systems::apply_tuning.run_if(resource_changed::<BarTuning>),
                    systems::register_new_interactables,
                    systems::forget_removed_interactables,
                ),
            )
            .add_systems(
                Update,
                (
                    systems::update_targeting.in_set(BarSchedule::Targeting),
                    physics::simulate_bodies.in_set(BarSchedule::Animation),
                    systems::follow_viewer.in_set(BarSchedule::Presentation),
                ),
            );
    }
}
