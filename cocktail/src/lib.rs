use {
    bevy::prelude::*,
    cocktail_resources::ContainerRegistry,
    liquor_assets::LiquorCatalog,
    recipes_assets::RecipeBook,
    system_schedule::BarSchedule,
    tuning_assets::BarTuning,
};

pub mod drink;
pub mod pour;
pub mod recipes;
pub mod shake;
pub mod systems;

#[cfg(test)]
mod tests;

pub use {
    drink::{DrinkEngine, DrinkFrame, DrinkOutcome},
    pour::{PourEngine, PourSettings},
    recipes::{alcohol_content, identify},
    shake::ShakeEngine,
};

/// Container contents plus the pour, shake and drink engines.
///
/// Reference data (`LiquorCatalog`, `RecipeBook`, `BarTuning`) is only
/// initialised here; the loading crate replaces it from ron files.
pub struct CocktailPlugin;

impl Plugin for CocktailPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContainerRegistry>()
            .init_resource::<LiquorCatalog>()
            .init_resource::<RecipeBook>()
            .init_resource::<BarTuning>()
            .init_resource::<PourEngine>()
            .init_resource::<ShakeEngine>()
            .init_resource::<DrinkEngine>()
            .add_observer(systems::on_pour_request)
            .add_observer(systems::on_shaker_pour_request)
            .add_observer(systems::on_stop_pouring)
            .add_observer(systems::on_shake_request)
            .add_observer(systems::on_stop_shaking)
            .add_observer(systems::on_drink_request)
            .add_observer(systems::on_empty_container)
            .add_systems(
                PreUpdate,
                (
                    systems::apply_tuning.run_if(resource_changed::<BarTuning>),
                    systems::register_new_containers,
                    systems::forget_removed_containers,
                ),
            )
            .add_systems(
                Update,
                systems::update_drinking_animation.in_set(BarSchedule::Animation),
            );
    }
}
