mod resources;

pub use resources::LoadingManager;

use {
    bevy::{
        asset::{LoadState, UntypedAssetId},
        prelude::*,
    },
    liquor_assets::{LiquorAssetsPlugin, LiquorCatalog, LiquorCatalogDefinition},
    recipes_assets::{RecipeBook, RecipeBookDefinition, RecipesAssetsPlugin},
    states::{GameState, LoadingPhase},
    tuning_assets::{BarTuning, TuningAssetsPlugin},
};

pub const CATALOG_PATH: &str = "bar.catalog.ron";
pub const RECIPES_PATH: &str = "standard.recipes.ron";
pub const TUNING_PATH: &str = "bar.tuning.ron";

pub struct LoadingManagerPlugin;

impl Plugin for LoadingManagerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((LiquorAssetsPlugin, RecipesAssetsPlugin, TuningAssetsPlugin))
            .init_resource::<LoadingManager>()
            .init_resource::<LoadingStatus>()
            .init_state::<LoadingPhase>()
            // Phase: Assets - request the definition files
            .add_systems(Startup, start_loading)
            .add_systems(
                Update,
                check_assets_loaded
                    .run_if(in_state(GameState::Loading).and(in_state(LoadingPhase::Assets))),
            )
            // Phase: ApplyDefinitions - swap the built-in tables for the loaded ones
            .add_systems(OnEnter(LoadingPhase::ApplyDefinitions), apply_definitions)
            // Phase: Ready - transition to Running
            .add_systems(OnEnter(LoadingPhase::Ready), finish_loading)
            // Loading UI
            .add_systems(OnEnter(GameState::Loading), setup_loading_ui)
            .add_systems(
                Update,
                update_loading_ui.run_if(in_state(GameState::Loading)),
            )
            .add_systems(OnExit(GameState::Loading), cleanup_loading_ui);
    }
}

#[derive(Resource, Default)]
pub struct LoadingStatus {
    pub current_phase: String,
    pub detail: String,
}

// --- Phase: Assets ---

fn start_loading(mut manager: ResMut<LoadingManager>, asset_server: Res<AssetServer>) {
    info!("started loading bar definitions");
    manager.catalog = asset_server.load(CATALOG_PATH);
    manager.recipes = asset_server.load(RECIPES_PATH);
    manager.tuning = asset_server.load(TUNING_PATH);
}

/// Loaded or failed. A failed file falls back to the built-in table.
fn is_settled(asset_server: &AssetServer, id: impl Into<UntypedAssetId>) -> bool {
    let id = id.into();
    asset_server.is_loaded_with_dependencies(id)
        || matches!(asset_server.load_state(id), LoadState::Failed(_))
}

fn check_assets_loaded(
    mut next_phase: ResMut<NextState<LoadingPhase>>,
    mut status: ResMut<LoadingStatus>,
    manager: Res<LoadingManager>,
    asset_server: Res<AssetServer>,
) {
    status.current_phase = "Loading Assets".into();
    status.detail = "Reading bar definitions...".into();

    if is_settled(&asset_server, &manager.catalog)
        && is_settled(&asset_server, &manager.recipes)
        && is_settled(&asset_server, &manager.tuning)
    {
        info!("bar definitions settled");
        next_phase.set(LoadingPhase::ApplyDefinitions);
    }
}

// --- Phase: ApplyDefinitions ---

#[allow(clippy::too_many_arguments)]
fn apply_definitions(
    manager: Res<LoadingManager>,
    catalogs: Res<Assets<LiquorCatalogDefinition>>,
    books: Res<Assets<RecipeBookDefinition>>,
    tunings: Res<Assets<BarTuning>>,
    mut catalog: ResMut<LiquorCatalog>,
    mut book: ResMut<RecipeBook>,
    mut tuning: ResMut<BarTuning>,
    mut next_phase: ResMut<NextState<LoadingPhase>>,
    mut status: ResMut<LoadingStatus>,
) {
    status.current_phase = "Stocking the Bar".into();
    status.detail = "Applying liquors, recipes and tuning...".into();

    match catalogs.get(&manager.catalog) {
        Some(definition) if !definition.entries.is_empty() => {
            *catalog = LiquorCatalog::from_definition(definition);
            info!("loaded {} liquors from {}", catalog.len(), CATALOG_PATH);
        }
        _ => warn!("{} unavailable, keeping the built-in catalog", CATALOG_PATH),
    }

    match books.get(&manager.recipes) {
        Some(definition) => {
            *book = RecipeBook::from_definition(definition);
            info!("loaded {} recipes from {}", book.recipes.len(), RECIPES_PATH);
        }
        None => warn!("{} unavailable, keeping the built-in recipes", RECIPES_PATH),
    }

    match tunings.get(&manager.tuning) {
        Some(loaded) => {
            *tuning = loaded.clone();
            debug!("applied tuning from {}: {:?}", TUNING_PATH, *tuning);
        }
        None => warn!("{} unavailable, keeping default tuning", TUNING_PATH),
    }

    next_phase.set(LoadingPhase::Ready);
}

// --- Phase: Ready ---

fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    info!("Loading complete, transitioning to Running");
    next_state.set(GameState::Running);
}

// --- Loading UI ---

#[derive(Component)]
struct LoadingUi;

fn setup_loading_ui(mut commands: Commands) {
    debug!("spawning loading ui");
    commands.spawn((
        Text::new("Opening the bar..."),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            right: Val::Px(20.0),
            flex_direction: FlexDirection::Column,
            ..default()
        },
        LoadingUi,
    ));
}

fn update_loading_ui(status: Res<LoadingStatus>, mut query: Query<&mut Text, With<LoadingUi>>) {
    if !status.is_changed() {
        return;
    }
    if let Ok(mut text) = query.single_mut() {
        *text = Text::new(format!(
            "Opening the bar...\n{}\n{}",
            status.current_phase, status.detail
        ));
    }
}

fn cleanup_loading_ui(mut commands: Commands, query: Query<Entity, With<LoadingUi>>) {
    debug!("cleaning up loading ui");
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
