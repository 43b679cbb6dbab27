use {
    crate::*,
    bar_components::{Container, DrinkPose, ShakeWobble},
    bevy::{prelude::*, time::TimeUpdateStrategy},
    cocktail_events::{
        DrinkFinished, DrinkRejected, DrinkRequest, DrinkStarted, EmptyContainerRequest,
        PourOutcome, PourResolved, PourRequest, ShakeOutcome, ShakeRequest, ShakeResolved,
        ShakerPourRequest, StopShaking,
    },
    cocktail_resources::{ContainerRegistry, DrinkSnapshot},
    std::time::Duration,
};

#[derive(Resource, Default)]
struct Recorded {
    pours: Vec<PourOutcome>,
    shakes: Vec<ShakeOutcome>,
    started: usize,
    finished: Vec<DrinkSnapshot>,
    rejected: usize,
}

fn setup_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(CocktailPlugin)
        .init_resource::<Recorded>()
        .add_observer(|trigger: On<PourResolved>, mut recorded: ResMut<Recorded>| {
            recorded.pours.push(trigger.event().outcome);
        })
        .add_observer(|trigger: On<ShakeResolved>, mut recorded: ResMut<Recorded>| {
            recorded.shakes.push(trigger.event().outcome);
        })
        .add_observer(|_trigger: On<DrinkStarted>, mut recorded: ResMut<Recorded>| {
            recorded.started += 1;
        })
        .add_observer(|trigger: On<DrinkFinished>, mut recorded: ResMut<Recorded>| {
            recorded.finished.push(trigger.event().snapshot.clone());
        })
        .add_observer(|_trigger: On<DrinkRejected>, mut recorded: ResMut<Recorded>| {
            recorded.rejected += 1;
        });
    app
}

fn spawn_container(app: &mut App, max_volume: f32) -> Entity {
    let entity = app.world_mut().spawn(Container { max_volume }).id();
    app.update();
    entity
}

fn pour(app: &mut App, target: Entity, liquor: &str, dt: f32) {
    let source = Entity::PLACEHOLDER;
    app.world_mut().trigger(PourRequest {
        source,
        target,
        liquor: liquor.to_string(),
        dt,
        gate: None,
    });
    app.update();
}

#[test]
fn test_containers_register_on_spawn() {
    let mut app = setup_app();
    let glass = spawn_container(&mut app, 300.0);

    let registry = app.world().resource::<ContainerRegistry>();
    let contents = registry.get(glass).expect("Glass should be registered");
    assert_eq!(contents.max_volume(), 300.0);
    assert!(contents.is_empty());
}

#[test]
fn test_despawned_container_is_forgotten() {
    let mut app = setup_app();
    let glass = spawn_container(&mut app, 300.0);

    app.world_mut().despawn(glass);
    app.update();

    assert!(!app.world().resource::<ContainerRegistry>().contains(glass));
}

#[test]
fn test_martini_end_to_end() {
    let mut app = setup_app();
    let glass = spawn_container(&mut app, 300.0);

    pour(&mut app, glass, "gin", 1.0);
    pour(&mut app, glass, "vermouth_dry", 0.5);

    app.world_mut().trigger(DrinkRequest {
        container: glass,
        animated: false,
    });
    app.update();

    let recorded = app.world().resource::<Recorded>();
    assert_eq!(
        recorded.pours,
        vec![
            PourOutcome::Poured { amount: 50.0 },
            PourOutcome::Poured { amount: 25.0 }
        ]
    );
    assert_eq!(recorded.finished.len(), 1);
    let snapshot = &recorded.finished[0];
    assert_eq!(snapshot.name, "Martini");
    assert_eq!(snapshot.volume, 75.0);
    assert_eq!(snapshot.ingredients.len(), 2);

    assert!(app.world().resource::<ContainerRegistry>().is_empty(glass));
}

#[test]
fn test_pour_into_full_glass_is_rejected() {
    let mut app = setup_app();
    let glass = spawn_container(&mut app, 50.0);

    pour(&mut app, glass, "vodka", 1.0);
    pour(&mut app, glass, "vodka", 1.0);

    let recorded = app.world().resource::<Recorded>();
    assert_eq!(recorded.pours[1], PourOutcome::ContainerFull);
    let registry = app.world().resource::<ContainerRegistry>();
    assert_eq!(registry.get(glass).unwrap().volume(), 50.0);
}

#[test]
fn test_unknown_liquor_leaves_glass_untouched() {
    let mut app = setup_app();
    let glass = spawn_container(&mut app, 300.0);

    pour(&mut app, glass, "motor_oil", 1.0);

    let recorded = app.world().resource::<Recorded>();
    assert_eq!(recorded.pours, vec![PourOutcome::UnknownIngredient]);
    assert!(app.world().resource::<ContainerRegistry>().is_empty(glass));
}

#[test]
fn test_shaker_to_glass_keeps_proportions() {
    let mut app = setup_app();
    let shaker = spawn_container(&mut app, 500.0);
    let glass = spawn_container(&mut app, 300.0);

    pour(&mut app, shaker, "rum", 1.0);
    pour(&mut app, shaker, "lime_juice", 1.0);

    app.world_mut().trigger(ShakerPourRequest {
        shaker,
        target: glass,
        dt: 0.5,
        gate: None,
    });
    app.update();

    let registry = app.world().resource::<ContainerRegistry>();
    let glass_contents = registry.get(glass).unwrap();
    assert!((glass_contents.volume() - 25.0).abs() < 1e-3);
    assert!((glass_contents.amount_of("rum") - 12.5).abs() < 1e-3);
    assert!((glass_contents.amount_of("lime_juice") - 12.5).abs() < 1e-3);
    assert!((registry.get(shaker).unwrap().volume() - 75.0).abs() < 1e-3);
}

#[test]
fn test_shaking_sets_wobble_and_stop_resets_it() {
    let mut app = setup_app();
    let shaker = spawn_container(&mut app, 500.0);
    pour(&mut app, shaker, "vodka", 1.0);

    app.world_mut().trigger(ShakeRequest { shaker, dt: 0.1 });
    app.update();

    let wobble = *app.world().get::<ShakeWobble>(shaker).unwrap();
    assert!(wobble.z != 0.0);
    assert!(matches!(
        app.world().resource::<Recorded>().shakes[0],
        ShakeOutcome::Shaking {
            enhanced: false,
            ..
        }
    ));

    app.world_mut().trigger(StopShaking { shaker });
    app.update();

    assert_eq!(
        *app.world().get::<ShakeWobble>(shaker).unwrap(),
        ShakeWobble::default()
    );
    assert!(!app.world().resource::<ShakeEngine>().is_shaking(shaker));
}

#[test]
fn test_shaking_empty_shaker_reports_empty() {
    let mut app = setup_app();
    let shaker = spawn_container(&mut app, 500.0);

    app.world_mut().trigger(ShakeRequest { shaker, dt: 0.1 });
    app.update();

    assert_eq!(
        app.world().resource::<Recorded>().shakes,
        vec![ShakeOutcome::Empty]
    );
    assert!(app.world().get::<ShakeWobble>(shaker).is_none());
}

#[test]
fn test_drinking_empty_glass_is_rejected() {
    let mut app = setup_app();
    let glass = spawn_container(&mut app, 300.0);

    app.world_mut().trigger(DrinkRequest {
        container: glass,
        animated: false,
    });
    app.update();

    let recorded = app.world().resource::<Recorded>();
    assert_eq!(recorded.rejected, 1);
    assert!(recorded.finished.is_empty());
}

#[test]
fn test_animated_drink_finishes_after_duration() {
    let mut app = setup_app();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(200)));
    let glass = spawn_container(&mut app, 300.0);
    pour(&mut app, glass, "vodka", 1.0);

    app.world_mut().trigger(DrinkRequest {
        container: glass,
        animated: true,
    });
    app.update();
    assert_eq!(app.world().resource::<Recorded>().started, 1);
    assert!(app.world().resource::<DrinkEngine>().is_drinking());

    // A second request while the glass is lifted is refused.
    app.world_mut().trigger(DrinkRequest {
        container: glass,
        animated: true,
    });
    app.update();
    assert_eq!(app.world().resource::<Recorded>().rejected, 1);

    for _ in 0..20 {
        if !app.world().resource::<Recorded>().finished.is_empty() {
            break;
        }
        app.update();
    }

    let recorded = app.world().resource::<Recorded>();
    assert_eq!(recorded.finished.len(), 1);
    assert_eq!(recorded.finished[0].name, "Vodka Neat");
    assert_eq!(recorded.finished[0].volume, 50.0);

    let pose = *app.world().get::<DrinkPose>(glass).unwrap();
    assert_eq!(pose, DrinkPose::default());
    assert!(!app.world().resource::<DrinkEngine>().is_drinking());
    assert!(app.world().resource::<ContainerRegistry>().is_empty(glass));
}

#[test]
fn test_empty_container_request_clears_contents() {
    let mut app = setup_app();
    let glass = spawn_container(&mut app, 300.0);
    pour(&mut app, glass, "tequila", 1.0);

    app.world_mut()
        .trigger(EmptyContainerRequest { container: glass });
    app.update();

    assert!(app.world().resource::<ContainerRegistry>().is_empty(glass));
}

#[test]
fn test_tuning_change_reaches_pour_engine() {
    let mut app = setup_app();
    app.update();
    app.world_mut().resource_mut::<tuning_assets::BarTuning>().pour_rate = 100.0;
    app.update();

    assert_eq!(app.world().resource::<PourEngine>().settings.rate, 100.0);
}
