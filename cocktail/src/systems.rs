use {
    crate::{DrinkEngine, DrinkOutcome, PourEngine, PourSettings, ShakeEngine},
    bar_components::{Container, DrinkPose, ShakeWobble},
    bevy::prelude::*,
    cocktail_events::{
        DrinkFinished, DrinkRejected, DrinkRequest, DrinkStarted, EmptyContainerRequest,
        PourResolved, PourRequest, ShakeOutcome, ShakeRequest, ShakeResolved,
        ShakerPourRequest, StopPouring, StopShaking,
    },
    cocktail_resources::ContainerRegistry,
    liquor_assets::LiquorCatalog,
    recipes_assets::RecipeBook,
    std::time::Duration,
    tuning_assets::BarTuning,
};

/// Pushes tuning values into the engines whenever `BarTuning` changes.
pub fn apply_tuning(
    tuning: Res<BarTuning>,
    mut pour: ResMut<PourEngine>,
    mut shake: ResMut<ShakeEngine>,
    mut drink: ResMut<DrinkEngine>,
) {
    pour.settings = PourSettings::from(&*tuning);
    shake.mix_threshold = tuning.shake_mix_threshold;
    drink.duration = Duration::from_secs_f32(tuning.drink_duration.max(0.0));
    debug!(
        "Applied bar tuning: pour {} ml/s, drink {}s",
        tuning.pour_rate, tuning.drink_duration
    );
}

pub fn register_new_containers(
    mut registry: ResMut<ContainerRegistry>,
    query: Query<(Entity, &Container), Added<Container>>,
) {
    for (entity, container) in &query {
        if registry.register(entity, container.max_volume) {
            debug!(
                "Registered container {:?} ({} ml)",
                entity, container.max_volume
            );
        } else {
            warn!("Container {:?} registered twice, keeping its contents", entity);
        }
    }
}

pub fn forget_removed_containers(
    mut registry: ResMut<ContainerRegistry>,
    mut removed: RemovedComponents<Container>,
) {
    for entity in removed.read() {
        if registry.unregister(entity).is_some() {
            debug!("Dropped contents of removed container {:?}", entity);
        }
    }
}

pub fn on_pour_request(
    trigger: On<PourRequest>,
    mut commands: Commands,
    mut engine: ResMut<PourEngine>,
    mut registry: ResMut<ContainerRegistry>,
    catalog: Res<LiquorCatalog>,
) {
    let request = trigger.event();
    let outcome = engine.pour(
        &mut registry,
        &catalog,
        request.target,
        &request.liquor,
        request.dt,
        request.gate.as_ref(),
    );
    if !outcome.poured() {
        debug!(
            "Pour of '{}' into {:?} rejected: {:?}",
            request.liquor, request.target, outcome
        );
    }
    commands.trigger(PourResolved {
        source: request.source,
        target: request.target,
        outcome,
    });
}

pub fn on_shaker_pour_request(
    trigger: On<ShakerPourRequest>,
    mut commands: Commands,
    mut engine: ResMut<PourEngine>,
    mut registry: ResMut<ContainerRegistry>,
) {
    let request = trigger.event();
    let outcome = engine.pour_from_shaker(
        &mut registry,
        request.shaker,
        request.target,
        request.dt,
        request.gate.as_ref(),
    );
    if !outcome.poured() {
        debug!(
            "Shaker pour {:?} -> {:?} rejected: {:?}",
            request.shaker, request.target, outcome
        );
    }
    commands.trigger(PourResolved {
        source: request.shaker,
        target: request.target,
        outcome,
    });
}

pub fn on_stop_pouring(_trigger: On<StopPouring>, mut engine: ResMut<PourEngine>) {
    if engine.is_pouring() {
        engine.stop_pouring();
        debug!("Pouring stopped");
    }
}

pub fn on_shake_request(
    trigger: On<ShakeRequest>,
    mut commands: Commands,
    mut engine: ResMut<ShakeEngine>,
    mut registry: ResMut<ContainerRegistry>,
) {
    let request = trigger.event();
    let outcome = engine.shake(&mut registry, request.shaker, request.dt);
    if let ShakeOutcome::Shaking {
        wobble_x, wobble_z, ..
    } = outcome
    {
        commands.entity(request.shaker).try_insert(ShakeWobble {
            x: wobble_x,
            z: wobble_z,
        });
    }
    commands.trigger(ShakeResolved {
        shaker: request.shaker,
        outcome,
    });
}

pub fn on_stop_shaking(
    trigger: On<StopShaking>,
    mut commands: Commands,
    mut engine: ResMut<ShakeEngine>,
) {
    let shaker = trigger.event().shaker;
    if engine.stop_shaking(shaker) {
        debug!("Stopped shaking {:?}", shaker);
    }
    commands.entity(shaker).try_insert(ShakeWobble::default());
}

pub fn on_drink_request(
    trigger: On<DrinkRequest>,
    mut commands: Commands,
    time: Res<Time>,
    mut engine: ResMut<DrinkEngine>,
    mut registry: ResMut<ContainerRegistry>,
    catalog: Res<LiquorCatalog>,
    book: Res<RecipeBook>,
) {
    let request = trigger.event();
    let container = request.container;
    match engine.drink(
        &mut registry,
        &catalog,
        &book,
        container,
        request.animated,
        time.elapsed(),
    ) {
        DrinkOutcome::Finished(snapshot) => {
            info!("Drank {} ({:.0} ml)", snapshot.name, snapshot.volume);
            commands.trigger(DrinkFinished {
                container,
                snapshot,
            });
        }
        DrinkOutcome::Started => {
            debug!("Started drinking from {:?}", container);
            commands.trigger(DrinkStarted { container });
        }
        outcome @ (DrinkOutcome::Empty | DrinkOutcome::Busy) => {
            debug!("Drink from {:?} rejected: {:?}", container, outcome);
            commands.trigger(DrinkRejected { container });
        }
    }
}

pub fn on_empty_container(
    trigger: On<EmptyContainerRequest>,
    mut registry: ResMut<ContainerRegistry>,
) {
    let container = trigger.event().container;
    if registry.clear(container) {
        debug!("Emptied {:?}", container);
    } else {
        warn!("Tried to empty unregistered container {:?}", container);
    }
}

/// Polls the animated drink once per frame and publishes the pose.
pub fn update_drinking_animation(
    mut commands: Commands,
    time: Res<Time>,
    mut engine: ResMut<DrinkEngine>,
    mut registry: ResMut<ContainerRegistry>,
    catalog: Res<LiquorCatalog>,
    book: Res<RecipeBook>,
) {
    let Some(frame) =
        engine.update_drinking_animation(&mut registry, &catalog, &book, time.elapsed())
    else {
        return;
    };

    commands.entity(frame.container).try_insert(DrinkPose {
        lift: frame.lift,
        tilt: frame.tilt,
    });

    if frame.completed {
        if let Some(snapshot) = engine.take_last_drink_info() {
            info!("Drank {} ({:.0} ml)", snapshot.name, snapshot.volume);
            commands.trigger(DrinkFinished {
                container: frame.container,
                snapshot,
            });
        } else {
            commands.trigger(DrinkRejected {
                container: frame.container,
            });
        }
    }
}
