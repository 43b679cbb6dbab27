//! Handles for the bar definition files

use {
    bevy::prelude::*,
    liquor_assets::LiquorCatalogDefinition,
    recipes_assets::RecipeBookDefinition,
    tuning_assets::BarTuning,
};

#[derive(Debug, Resource, Default)]
pub struct LoadingManager {
    pub catalog: Handle<LiquorCatalogDefinition>,
    pub recipes: Handle<RecipeBookDefinition>,
    pub tuning: Handle<BarTuning>,
}
