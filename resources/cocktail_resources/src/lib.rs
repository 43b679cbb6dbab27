//! Liquid contents of every registered container.
//!
//! `ContainerRegistry` is the only owner of `ContainerState`. The pour, shake
//! and drink engines borrow it mutably one call at a time.

mod color;

use {bevy::prelude::*, std::collections::HashMap};

pub use color::LiquidColor;

/// Below this an ingredient is treated as gone.
pub const AMOUNT_EPSILON: f32 = 0.01;

/// One liquid inside a container. `amount` accumulates, the rest is fixed
/// when the ingredient is first poured.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub kind: String,
    /// Millilitres
    pub amount: f32,
    pub color: LiquidColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerState {
    /// Insertion ordered, at most one entry per `kind`.
    ingredients: Vec<Ingredient>,
    volume: f32,
    max_volume: f32,
    color: LiquidColor,
}

impl ContainerState {
    pub fn new(max_volume: f32) -> Self {
        Self {
            ingredients: Vec::new(),
            volume: 0.0,
            max_volume: max_volume.max(0.0),
            color: LiquidColor::NEUTRAL,
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn ingredient(&self, kind: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.kind == kind)
    }

    pub fn has(&self, kind: &str) -> bool {
        self.ingredient(kind).is_some()
    }

    pub fn amount_of(&self, kind: &str) -> f32 {
        self.ingredient(kind).map_or(0.0, |ingredient| ingredient.amount)
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn max_volume(&self) -> f32 {
        self.max_volume
    }

    pub fn remaining_capacity(&self) -> f32 {
        (self.max_volume - self.volume).max(0.0)
    }

    pub fn fill_ratio(&self) -> f32 {
        if self.max_volume <= 0.0 {
            return 0.0;
        }
        (self.volume / self.max_volume).clamp(0.0, 1.0)
    }

    pub fn color(&self) -> LiquidColor {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        self.volume <= 0.0
    }

    pub fn is_full(&self) -> bool {
        self.volume >= self.max_volume
    }

    /// Adds up to `amount` of `kind`, merging into an existing entry.
    /// Returns what actually went in after clamping to capacity.
    pub fn add(&mut self, kind: &str, amount: f32, color: LiquidColor) -> f32 {
        let amount = amount.min(self.remaining_capacity());
        if amount <= 0.0 {
            return 0.0;
        }

        match self.ingredients.iter_mut().find(|ingredient| ingredient.kind == kind) {
            Some(existing) => existing.amount += amount,
            None => self.ingredients.push(Ingredient {
                kind: kind.to_string(),
                amount,
                color,
            }),
        }
        self.sync_volume();
        self.recompute_color();
        amount
    }

    /// Removes a proportional slice of every ingredient totalling `amount`.
    /// Entries left at or below [`AMOUNT_EPSILON`] are pruned. Returns the
    /// removed slices in ingredient order.
    pub fn take_proportional(&mut self, amount: f32) -> Vec<Ingredient> {
        if self.volume <= 0.0 {
            return Vec::new();
        }
        let amount = amount.min(self.volume);
        if amount <= 0.0 {
            return Vec::new();
        }
        let share = amount / self.volume;

        let mut taken = Vec::with_capacity(self.ingredients.len());
        for ingredient in &mut self.ingredients {
            let slice = ingredient.amount * share;
            ingredient.amount -= slice;
            taken.push(Ingredient {
                kind: ingredient.kind.clone(),
                amount: slice,
                color: ingredient.color,
            });
        }
        self.ingredients
            .retain(|ingredient| ingredient.amount > AMOUNT_EPSILON);
        self.sync_volume();
        if self.ingredients.is_empty() {
            self.color = LiquidColor::NEUTRAL;
        } else {
            self.recompute_color();
        }
        taken
    }

    /// Volume-weighted average of ingredient colors. The color is left as
    /// is when nothing is in the container.
    pub fn recompute_color(&mut self) {
        if let Some(mixed) = LiquidColor::weighted_mix(
            self.ingredients
                .iter()
                .map(|ingredient| (ingredient.color, ingredient.amount)),
        ) {
            self.color = mixed;
        }
    }

    /// Copies the contents out, tagged with an identified drink name.
    pub fn snapshot(&self, name: impl Into<String>) -> DrinkSnapshot {
        DrinkSnapshot {
            volume: self.volume,
            ingredients: self.ingredients.clone(),
            color: self.color,
            name: name.into(),
        }
    }

    pub fn clear(&mut self) {
        self.ingredients.clear();
        self.volume = 0.0;
        self.color = LiquidColor::NEUTRAL;
    }

    fn sync_volume(&mut self) {
        self.volume = self.ingredients.iter().map(|ingredient| ingredient.amount).sum();
    }
}

/// What was in a container at the moment it was drunk.
#[derive(Debug, Clone, PartialEq)]
pub struct DrinkSnapshot {
    pub volume: f32,
    pub ingredients: Vec<Ingredient>,
    pub color: LiquidColor,
    /// Recipe name identified from `ingredients`
    pub name: String,
}

/// Container contents keyed by the container's root entity.
#[derive(Resource, Default, Debug)]
pub struct ContainerRegistry {
    containers: HashMap<Entity, ContainerState>,
}

impl ContainerRegistry {
    /// Creates empty contents for `container`. Returns `false` and leaves the
    /// existing contents alone if it was already registered.
    pub fn register(&mut self, container: Entity, max_volume: f32) -> bool {
        if self.containers.contains_key(&container) {
            return false;
        }
        self.containers
            .insert(container, ContainerState::new(max_volume));
        true
    }

    pub fn unregister(&mut self, container: Entity) -> Option<ContainerState> {
        self.containers.remove(&container)
    }

    pub fn get(&self, container: Entity) -> Option<&ContainerState> {
        self.containers.get(&container)
    }

    pub fn get_mut(&mut self, container: Entity) -> Option<&mut ContainerState> {
        self.containers.get_mut(&container)
    }

    pub fn contains(&self, container: Entity) -> bool {
        self.containers.contains_key(&container)
    }

    /// Resets contents to empty. Returns `false` for unknown containers.
    pub fn clear(&mut self, container: Entity) -> bool {
        match self.containers.get_mut(&container) {
            Some(state) => {
                state.clear();
                true
            }
            None => false,
        }
    }

    /// Unknown containers count as empty.
    pub fn is_empty(&self, container: Entity) -> bool {
        self.get(container).is_none_or(ContainerState::is_empty)
    }

    /// Unknown containers are never full.
    pub fn is_full(&self, container: Entity) -> bool {
        self.get(container).is_some_and(ContainerState::is_full)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &ContainerState)> {
        self.containers.iter().map(|(entity, state)| (*entity, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(world: &mut World) -> Entity {
        world.spawn_empty().id()
    }

    #[test]
    fn same_ingredient_merges_into_one_entry() {
        let mut glass = ContainerState::new(300.0);
        let gin = LiquidColor::from_hex(0xe8f4f8);
        glass.add("gin", 20.0, gin);
        glass.add("gin", 15.0, gin);

        assert_eq!(glass.ingredients().len(), 1);
        assert_eq!(glass.amount_of("gin"), 35.0);
        assert_eq!(glass.volume(), 35.0);
    }

    #[test]
    fn add_clamps_to_capacity() {
        let mut glass = ContainerState::new(100.0);
        let added = glass.add("vodka", 80.0, LiquidColor::NEUTRAL);
        assert_eq!(added, 80.0);
        let added = glass.add("rum", 80.0, LiquidColor::NEUTRAL);
        assert_eq!(added, 20.0);
        assert_eq!(glass.volume(), 100.0);
        assert!(glass.is_full());
        assert_eq!(glass.add("rum", 5.0, LiquidColor::NEUTRAL), 0.0);
        assert_eq!(glass.ingredients().len(), 2);
    }

    #[test]
    fn proportional_take_prunes_traces() {
        let mut shaker = ContainerState::new(500.0);
        shaker.add("gin", 90.0, LiquidColor::NEUTRAL);
        shaker.add("lime_juice", 0.01, LiquidColor::NEUTRAL);

        let taken = shaker.take_proportional(45.0);
        assert_eq!(taken.len(), 2);
        assert!((shaker.amount_of("gin") - 45.0).abs() < 0.01);
        assert!(!shaker.has("lime_juice"));
        let total: f32 = shaker.ingredients().iter().map(|i| i.amount).sum();
        assert_eq!(shaker.volume(), total);
    }

    #[test]
    fn double_registration_keeps_contents() {
        let mut world = World::new();
        let glass = entity(&mut world);
        let mut registry = ContainerRegistry::default();

        assert!(registry.register(glass, 300.0));
        registry
            .get_mut(glass)
            .unwrap()
            .add("gin", 40.0, LiquidColor::NEUTRAL);

        assert!(!registry.register(glass, 500.0));
        let state = registry.get(glass).unwrap();
        assert_eq!(state.volume(), 40.0);
        assert_eq!(state.max_volume(), 300.0);
    }

    #[test]
    fn clear_resets_to_neutral() {
        let mut world = World::new();
        let glass = entity(&mut world);
        let mut registry = ContainerRegistry::default();
        registry.register(glass, 300.0);
        registry
            .get_mut(glass)
            .unwrap()
            .add("grenadine", 10.0, LiquidColor::from_hex(0xff0000));

        assert!(registry.clear(glass));
        let state = registry.get(glass).unwrap();
        assert!(state.ingredients().is_empty());
        assert_eq!(state.volume(), 0.0);
        assert_eq!(state.color(), LiquidColor::NEUTRAL);
        assert!(!registry.clear(entity(&mut world)));
    }
}
