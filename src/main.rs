use {
    bar_core::CorePlugin,
    bevy::{log::LogPlugin, prelude::*},
};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Bar".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "error,loading=debug,\
                        cocktail=debug,\
                        interaction=debug,\
                        hud=info,\
                        bar_core=debug"
                        .into(),
                    level: bevy::log::Level::DEBUG,
                    ..Default::default()
                }),
        )
        .add_plugins(CorePlugin)
        .run();
}
