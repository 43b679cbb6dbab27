//! Text-only overlay: hint line, container readout and short-lived
//! notifications. Nothing outside this crate writes to the screen.

use {
    bar_components::{Bottle, DisplayName, InteractableKind},
    bevy::prelude::*,
    cocktail::identify,
    cocktail_events::{
        DrinkFinished, DrinkRejected, PourOutcome, PourResolved, ShakeOutcome, ShakeResolved,
    },
    cocktail_resources::{ContainerRegistry, ContainerState},
    components::{HintText, HudRoot, NotificationText, ReadoutText},
    interaction::{HintSubject, InteractionState, interaction_hint},
    interaction_events::{InteractionGuidance, PickupOutcome, PickupRejected, UseInstrument},
    liquor_assets::LiquorCatalog,
    recipes_assets::RecipeBook,
    system_schedule::BarSchedule,
};

pub mod components;

/// Seconds a notification stays up
const NOTIFICATION_DURATION: f32 = 2.0;
const MAX_NOTIFICATIONS: usize = 4;
const TEXT_COLOR: Color = Color::srgb(0.95, 0.92, 0.85);
const PANEL_BG: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HudState>()
            .init_resource::<Notifications>()
            .add_observer(on_pour_resolved)
            .add_observer(on_shake_resolved)
            .add_observer(on_drink_finished)
            .add_observer(on_drink_rejected)
            .add_observer(on_pickup_rejected)
            .add_observer(on_guidance)
            .add_observer(on_use_instrument)
            .add_systems(Startup, spawn_hud)
            .add_systems(
                Update,
                (
                    update_hint,
                    update_readout,
                    tick_notifications,
                    render_hud,
                )
                    .chain()
                    .in_set(BarSchedule::Presentation),
            );
    }
}

/// What the overlay currently shows.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct HudState {
    pub hint: String,
    pub readout: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    timer: Timer,
}

/// Transient messages, oldest first. A message already on screen is not
/// repeated, so level-triggered outcomes do not flood the list.
#[derive(Resource, Default, Debug)]
pub struct Notifications {
    toasts: Vec<Toast>,
}

impl Notifications {
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.toasts.iter().any(|toast| toast.message == message) {
            return;
        }
        if self.toasts.len() >= MAX_NOTIFICATIONS {
            self.toasts.remove(0);
        }
        self.toasts.push(Toast {
            message,
            timer: Timer::from_seconds(NOTIFICATION_DURATION, TimerMode::Once),
        });
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        for toast in &mut self.toasts {
            toast.timer.tick(delta);
        }
        self.toasts.retain(|toast| !toast.timer.is_finished());
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.toasts.iter().map(|toast| toast.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Name line, one line per ingredient, then `volume / max ml`.
pub fn container_readout(
    contents: &ContainerState,
    catalog: &LiquorCatalog,
    book: &RecipeBook,
) -> Vec<String> {
    let capacity = format!("{:.0} / {:.0} ml", contents.volume(), contents.max_volume());
    if contents.is_empty() {
        return vec!["Empty".to_string(), capacity];
    }

    let mut lines = vec![identify(contents, catalog, book)];
    lines.extend(contents.ingredients().iter().map(|ingredient| {
        let name = catalog
            .get(&ingredient.kind)
            .map_or(ingredient.kind.as_str(), |entry| entry.display_name.as_str());
        format!("  {name}: {:.0} ml", ingredient.amount)
    }));
    lines.push(capacity);
    lines
}

// --- Observers ---

fn on_pour_resolved(trigger: On<PourResolved>, mut notifications: ResMut<Notifications>) {
    let message = match trigger.event().outcome {
        PourOutcome::ContainerFull => "Container is full!",
        PourOutcome::OutOfRange => "Move closer to pour",
        PourOutcome::NotAimed => "Aim at the container to pour",
        PourOutcome::SourceEmpty => "The shaker is empty!",
        PourOutcome::UnknownIngredient => "This bottle can't be poured",
        PourOutcome::Poured { .. } | PourOutcome::UnknownContainer => return,
    };
    notifications.push(message);
}

fn on_shake_resolved(trigger: On<ShakeResolved>, mut notifications: ResMut<Notifications>) {
    if trigger.event().outcome == ShakeOutcome::Empty {
        notifications.push("The shaker is empty!");
    }
}

fn on_drink_finished(trigger: On<DrinkFinished>, mut notifications: ResMut<Notifications>) {
    let snapshot = &trigger.event().snapshot;
    notifications.push(format!(
        "You drank a {}! ({:.0} ml)",
        snapshot.name, snapshot.volume
    ));
}

fn on_drink_rejected(_trigger: On<DrinkRejected>, mut notifications: ResMut<Notifications>) {
    notifications.push("Nothing to drink");
}

fn on_pickup_rejected(trigger: On<PickupRejected>, mut notifications: ResMut<Notifications>) {
    if trigger.event().outcome == PickupOutcome::AlreadyHolding {
        notifications.push("Your hands are full");
    }
}

fn on_guidance(trigger: On<InteractionGuidance>, mut notifications: ResMut<Notifications>) {
    notifications.push(trigger.event().message.clone());
}

fn on_use_instrument(_trigger: On<UseInstrument>, mut notifications: ResMut<Notifications>) {
    notifications.push("You strum the guitar");
}

// --- Systems ---

type SubjectQuery<'w, 's> = Query<'w, 's, (Option<&'static Bottle>, Option<&'static DisplayName>)>;

fn hint_subject<'a>(
    object: Entity,
    kind: InteractableKind,
    subjects: &'a SubjectQuery,
    registry: &'a ContainerRegistry,
) -> HintSubject<'a> {
    let (bottle, display_name) = subjects.get(object).unwrap_or((None, None));
    HintSubject {
        kind,
        liquor: bottle.map(|bottle| bottle.liquor.as_str()),
        display_name: display_name.map(|name| name.0.as_str()),
        contents: registry.get(object),
    }
}

pub fn update_hint(
    mut hud: ResMut<HudState>,
    state: Res<InteractionState>,
    registry: Res<ContainerRegistry>,
    catalog: Res<LiquorCatalog>,
    subjects: SubjectQuery,
) {
    let held = state
        .held()
        .zip(state.held_kind())
        .map(|(object, kind)| hint_subject(object, kind, &subjects, &registry));
    let targeted = state.targeted().map(|target| {
        (
            hint_subject(target.object, target.kind, &subjects, &registry),
            target.distance,
        )
    });

    let hint = interaction_hint(held, targeted, &catalog);
    if hud.hint != hint {
        hud.hint = hint;
    }
}

/// Shows the held container, else the targeted one.
pub fn update_readout(
    mut hud: ResMut<HudState>,
    state: Res<InteractionState>,
    registry: Res<ContainerRegistry>,
    catalog: Res<LiquorCatalog>,
    book: Res<RecipeBook>,
) {
    let focus = state
        .held()
        .and_then(|object| registry.get(object))
        .or_else(|| state.targeted().and_then(|target| registry.get(target.object)));

    let readout = focus
        .map(|contents| container_readout(contents, &catalog, &book))
        .unwrap_or_default();
    if hud.readout != readout {
        hud.readout = readout;
    }
}

fn tick_notifications(time: Res<Time>, mut notifications: ResMut<Notifications>) {
    if !notifications.is_empty() {
        notifications.tick(time.delta());
    }
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                ..default()
            },
            Name::new("Hud"),
        ))
        .with_children(|root| {
            root.spawn((
                NotificationText,
                Text::default(),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(10.0),
                    left: Val::Percent(30.0),
                    right: Val::Percent(30.0),
                    justify_content: JustifyContent::Center,
                    ..default()
                },
            ));
            root.spawn((
                ReadoutText,
                Text::default(),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                BackgroundColor(PANEL_BG),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(20.0),
                    right: Val::Px(20.0),
                    padding: UiRect::all(Val::Px(8.0)),
                    ..default()
                },
            ));
            root.spawn((
                HintText,
                Text::default(),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(40.0),
                    left: Val::Percent(25.0),
                    right: Val::Percent(25.0),
                    justify_content: JustifyContent::Center,
                    ..default()
                },
            ));
        });
}

fn render_hud(
    hud: Res<HudState>,
    notifications: Res<Notifications>,
    mut hint: Query<&mut Text, (With<HintText>, Without<ReadoutText>, Without<NotificationText>)>,
    mut readout: Query<&mut Text, (With<ReadoutText>, Without<HintText>, Without<NotificationText>)>,
    mut toasts: Query<&mut Text, (With<NotificationText>, Without<HintText>, Without<ReadoutText>)>,
) {
    if hud.is_changed() {
        if let Ok(mut text) = hint.single_mut() {
            **text = hud.hint.clone();
        }
        if let Ok(mut text) = readout.single_mut() {
            **text = hud.readout.join("\n");
        }
    }
    if notifications.is_changed() {
        if let Ok(mut text) = toasts.single_mut() {
            **text = notifications.messages().collect::<Vec<_>>().join("\n");
        }
    }
}
