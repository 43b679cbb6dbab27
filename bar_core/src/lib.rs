use {
    bar_components::BarComponentsPlugin,
    bevy::prelude::*,
    cocktail::CocktailPlugin,
    hud::HudPlugin,
    interaction::InteractionPlugin,
    loading::LoadingManagerPlugin,
    states::GameState,
    system_schedule::BarSchedule,
};

pub mod orchestrator;
pub mod scene;


pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_plugins((
                BarComponentsPlugin,
                LoadingManagerPlugin,
                CocktailPlugin,
                InteractionPlugin,
                HudPlugin,
            ))
            .configure_sets(
                Update,
                (
                    BarSchedule::Targeting,
                    BarSchedule::ReadInput,
                    BarSchedule::Mixing,
                    BarSchedule::Animation,
                    BarSchedule::Presentation,
                )
                    .chain()
                    .run_if(in_state(GameState::Running)),
            )
            .add_systems(OnEnter(GameState::Running), scene::spawn_starting_scene)
            .add_systems(
                Update,
                (
                    (orchestrator::look_around, orchestrator::read_bar_input)
                        .chain()
                        .in_set(BarSchedule::ReadInput),
                    scene::sync_liquid_fill.in_set(BarSchedule::Presentation),
                ),
            );
    }
}
