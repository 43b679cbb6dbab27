//! Components shared by the bar's gameplay crates.

use bevy::prelude::*;

pub struct BarComponentsPlugin;

impl Plugin for BarComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<InteractableKind>()
            .register_type::<Interactable>()
            .register_type::<InteractionBounds>()
            .register_type::<Bottle>()
            .register_type::<Container>()
            .register_type::<Viewer>()
            .register_type::<RigidBody>()
            .register_type::<BodyMode>()
            .register_type::<DisplayName>()
            .register_type::<ShakeWobble>()
            .register_type::<DrinkPose>();
    }
}

#[derive(Reflect, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractableKind {
    #[default]
    Bottle,
    Glass,
    Shaker,
    Jigger,
    Guitar,
}

impl InteractableKind {
    pub fn label(&self) -> &'static str {
        match self {
            InteractableKind::Bottle => "Bottle",
            InteractableKind::Glass => "Glass",
            InteractableKind::Shaker => "Shaker",
            InteractableKind::Jigger => "Jigger",
            InteractableKind::Guitar => "Guitar",
        }
    }

    /// Whether liquid can be poured into it.
    pub fn is_container(&self) -> bool {
        matches!(self, InteractableKind::Glass | InteractableKind::Shaker)
    }

    /// Guitars are played where they stand.
    pub fn is_portable(&self) -> bool {
        !matches!(self, InteractableKind::Guitar)
    }
}

/// Root of an object the player can aim at. Registration records the
/// entity's `Transform` at spawn time as its shelf slot.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component, Default)]
pub struct Interactable {
    pub kind: InteractableKind,
}

impl Interactable {
    pub fn new(kind: InteractableKind) -> Self {
        Self { kind }
    }
}

/// Ray-hittable box centred on the entity, in local space.
/// May sit on the interactable root or on any of its descendants.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct InteractionBounds {
    pub half_extents: Vec3,
}

impl InteractionBounds {
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }
}

/// A bottle pours a single ingredient.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct Bottle {
    pub liquor: String,
}

/// Marks a glass or shaker. Contents live in `ContainerRegistry`.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct Container {
    pub max_volume: f32,
}

/// The first-person camera that aims, pours and holds.
#[derive(Component, Reflect, Debug, Default, Clone, Copy)]
#[reflect(Component, Default)]
pub struct Viewer;

#[derive(Reflect, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyMode {
    /// Simulated, falls under gravity
    Dynamic,
    /// Pinned in place
    #[default]
    Static,
    /// Not simulated at all (held by the player)
    Disabled,
}

/// Minimal rigid body state the interaction layer toggles.
#[derive(Component, Reflect, Debug, Default, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
pub struct RigidBody {
    pub mode: BodyMode,
    pub velocity: Vec3,
}

/// Custom label shown instead of the catalog name (ingredient bottles).
#[derive(Component, Reflect, Default, Debug, Clone, PartialEq, Deref, DerefMut)]
#[reflect(Component, Default)]
pub struct DisplayName(pub String);

impl From<&str> for DisplayName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Rotation signal produced while a shaker is shaken, applied on top of
/// the held pose.
#[derive(Component, Reflect, Debug, Default, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
pub struct ShakeWobble {
    pub x: f32,
    pub z: f32,
}

/// Lift and tilt of a glass during the animated drink.
#[derive(Component, Reflect, Debug, Default, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
pub struct DrinkPose {
    pub lift: f32,
    pub tilt: f32,
}
