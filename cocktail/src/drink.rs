//! Drinking a container, instantly or as a one-second lift and tilt.

use {
    crate::recipes::identify,
    bevy::prelude::*,
    cocktail_resources::{ContainerRegistry, DrinkSnapshot},
    liquor_assets::LiquorCatalog,
    recipes_assets::RecipeBook,
    std::{f32::consts::PI, time::Duration},
};

const MAX_LIFT: f32 = 0.3;
const MAX_TILT: f32 = PI / 2.5;

#[derive(Debug, Clone, PartialEq)]
pub enum DrinkOutcome {
    /// Instant drink: the container is already cleared.
    Finished(DrinkSnapshot),
    /// Animated drink started; poll `update_drinking_animation`.
    Started,
    Empty,
    /// Another animated drink is still running.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrinkAnimation {
    pub container: Entity,
    pub started_at: Duration,
}

/// One poll of a running drink animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrinkFrame {
    pub container: Entity,
    /// 0..=1
    pub progress: f32,
    pub lift: f32,
    pub tilt: f32,
    pub completed: bool,
}

#[derive(Resource, Debug)]
pub struct DrinkEngine {
    pub duration: Duration,
    animation: Option<DrinkAnimation>,
    last_drink: Option<DrinkSnapshot>,
}

impl Default for DrinkEngine {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl DrinkEngine {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            animation: None,
            last_drink: None,
        }
    }

    pub fn animation(&self) -> Option<DrinkAnimation> {
        self.animation
    }

    pub fn is_drinking(&self) -> bool {
        self.animation.is_some()
    }

    pub fn drink(
        &mut self,
        registry: &mut ContainerRegistry,
        catalog: &LiquorCatalog,
        book: &RecipeBook,
        container: Entity,
        animated: bool,
        now: Duration,
    ) -> DrinkOutcome {
        if self.animation.is_some() {
            return DrinkOutcome::Busy;
        }
        if registry.is_empty(container) {
            return DrinkOutcome::Empty;
        }

        if animated {
            self.animation = Some(DrinkAnimation {
                container,
                started_at: now,
            });
            return DrinkOutcome::Started;
        }

        match consume(registry, catalog, book, container) {
            Some(snapshot) => DrinkOutcome::Finished(snapshot),
            None => DrinkOutcome::Empty,
        }
    }

    /// Advances the running animation to `now`. At completion the container
    /// is consumed and the snapshot parked for [`Self::take_last_drink_info`].
    pub fn update_drinking_animation(
        &mut self,
        registry: &mut ContainerRegistry,
        catalog: &LiquorCatalog,
        book: &RecipeBook,
        now: Duration,
    ) -> Option<DrinkFrame> {
        let animation = self.animation?;
        let elapsed = now.saturating_sub(animation.started_at);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        let completed = progress >= 1.0;
        if completed {
            self.animation = None;
            self.last_drink = consume(registry, catalog, book, animation.container);
        }

        let arc = (progress * PI).sin();
        Some(DrinkFrame {
            container: animation.container,
            progress,
            lift: if completed { 0.0 } else { arc * MAX_LIFT },
            tilt: if completed { 0.0 } else { arc * MAX_TILT },
            completed,
        })
    }

    /// Single-consumer handoff of the last animated drink.
    pub fn take_last_drink_info(&mut self) -> Option<DrinkSnapshot> {
        self.last_drink.take()
    }
}

/// Snapshot then clear. `None` if the container is empty or unknown.
fn consume(
    registry: &mut ContainerRegistry,
    catalog: &LiquorCatalog,
    book: &RecipeBook,
    container: Entity,
) -> Option<DrinkSnapshot> {
    let contents = registry.get_mut(container)?;
    if contents.is_empty() {
        return None;
    }
    let snapshot = contents.snapshot(identify(contents, catalog, book));
    contents.clear();
    Some(snapshot)
}

#[cfg(test)]
mod tests {
    use {super::*, cocktail_resources::LiquidColor};

    struct Bar {
        registry: ContainerRegistry,
        catalog: LiquorCatalog,
        book: RecipeBook,
        glass: Entity,
    }

    fn bar_with(parts: &[(&str, f32)]) -> Bar {
        let mut world = World::new();
        let glass = world.spawn_empty().id();
        let mut registry = ContainerRegistry::default();
        registry.register(glass, 300.0);
        for (kind, amount) in parts {
            registry
                .get_mut(glass)
                .unwrap()
                .add(kind, *amount, LiquidColor::NEUTRAL);
        }
        Bar {
            registry,
            catalog: LiquorCatalog::standard(),
            book: RecipeBook::standard(),
            glass,
        }
    }

    #[test]
    fn instant_drink_snapshots_and_clears() {
        let mut bar = bar_with(&[("gin", 50.0), ("vermouth_dry", 25.0)]);
        let mut engine = DrinkEngine::default();

        let outcome = engine.drink(
            &mut bar.registry,
            &bar.catalog,
            &bar.book,
            bar.glass,
            false,
            Duration::ZERO,
        );
        let DrinkOutcome::Finished(snapshot) = outcome else {
            panic!("expected a finished drink, got {outcome:?}");
        };
        assert_eq!(snapshot.volume, 75.0);
        assert_eq!(snapshot.name, "Martini");
        assert_eq!(snapshot.ingredients.len(), 2);

        let state = bar.registry.get(bar.glass).unwrap();
        assert_eq!(state.volume(), 0.0);
        assert!(state.ingredients().is_empty());
        assert_eq!(state.color(), LiquidColor::NEUTRAL);
    }

    #[test]
    fn empty_glass_cannot_be_drunk() {
        let mut bar = bar_with(&[]);
        let mut engine = DrinkEngine::default();
        for animated in [false, true] {
            assert_eq!(
                engine.drink(
                    &mut bar.registry,
                    &bar.catalog,
                    &bar.book,
                    bar.glass,
                    animated,
                    Duration::ZERO
                ),
                DrinkOutcome::Empty
            );
        }
        assert!(!engine.is_drinking());
    }

    #[test]
    fn animated_drink_completes_after_duration() {
        let mut bar = bar_with(&[("vodka", 40.0)]);
        let mut engine = DrinkEngine::default();
        let start = Duration::from_secs(10);

        assert_eq!(
            engine.drink(&mut bar.registry, &bar.catalog, &bar.book, bar.glass, true, start),
            DrinkOutcome::Started
        );
        assert_eq!(
            engine.drink(&mut bar.registry, &bar.catalog, &bar.book, bar.glass, false, start),
            DrinkOutcome::Busy
        );

        let halfway = engine
            .update_drinking_animation(
                &mut bar.registry,
                &bar.catalog,
                &bar.book,
                start + Duration::from_millis(500),
            )
            .unwrap();
        assert!(!halfway.completed);
        assert!((halfway.lift - MAX_LIFT).abs() < 1e-5);
        assert_eq!(bar.registry.get(bar.glass).unwrap().volume(), 40.0);
        assert!(engine.take_last_drink_info().is_none());

        let done = engine
            .update_drinking_animation(
                &mut bar.registry,
                &bar.catalog,
                &bar.book,
                start + Duration::from_millis(1200),
            )
            .unwrap();
        assert!(done.completed);
        assert_eq!(done.lift, 0.0);
        assert!(bar.registry.is_empty(bar.glass));

        let info = engine.take_last_drink_info().expect("parked snapshot");
        assert_eq!(info.name, "Vodka Neat");
        assert!(engine.take_last_drink_info().is_none());
        assert!(engine
            .update_drinking_animation(&mut bar.registry, &bar.catalog, &bar.book, start)
            .is_none());
    }
}
