//! The starting bar: a counter with glassware, a shelf of bottles and a
//! guitar in the corner.

use {
    bar_components::{
        Bottle, Container, DisplayName, Interactable, InteractableKind, InteractionBounds,
        RigidBody, Viewer,
    },
    bevy::prelude::*,
    cocktail_resources::{ContainerRegistry, LiquidColor},
    liquor_assets::{LiquorCatalog, LiquorCategory},
    recipes_assets::RecipeBook,
    tuning_assets::BarTuning,
};

const COUNTER_TOP: f32 = 1.0;
const SHELF_HEIGHT: f32 = 1.35;
const SHELF_DEPTH: f32 = -1.6;
const BOTTLE_SPACING: f32 = 0.16;
const BOTTLE_SIZE: Vec3 = Vec3::new(0.08, 0.3, 0.08);
const GLASS_SIZE: Vec3 = Vec3::new(0.08, 0.12, 0.08);
const SHAKER_SIZE: Vec3 = Vec3::new(0.09, 0.2, 0.09);

/// Liquid column inside a glass or shaker, scaled to the fill ratio.
#[derive(Component, Debug, Clone, Copy)]
pub struct LiquidFill {
    pub container: Entity,
    pub height: f32,
}

/// Every ingredient any recipe asks for, in book order without repeats.
pub fn shelf_ingredients(book: &RecipeBook) -> Vec<String> {
    let mut ingredients: Vec<String> = Vec::new();
    for suggestion in book.suggestions() {
        for id in suggestion.ingredients {
            if !ingredients.contains(&id) {
                ingredients.push(id);
            }
        }
    }
    ingredients
}

pub fn spawn_starting_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    catalog: Res<LiquorCatalog>,
    book: Res<RecipeBook>,
    tuning: Res<BarTuning>,
) {
    info!("spawning starting bar");

    commands.spawn((
        Viewer,
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.45, 0.3).looking_at(Vec3::new(0.0, 1.1, -1.0), Vec3::Y),
        Name::new("Viewer"),
    ));
    commands.spawn((
        PointLight {
            intensity: 400_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 2.8, -0.5),
    ));

    let wood = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.2, 0.1),
        perceptual_roughness: 0.8,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(3.0, 0.05, 0.8))),
        MeshMaterial3d(wood.clone()),
        Transform::from_xyz(0.0, COUNTER_TOP - 0.025, -0.9),
        Name::new("Counter"),
    ));
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(3.0, 0.03, 0.3))),
        MeshMaterial3d(wood),
        Transform::from_xyz(0.0, SHELF_HEIGHT - 0.015, SHELF_DEPTH),
        Name::new("Shelf"),
    ));

    let glass_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.9, 0.95, 1.0, 0.3),
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    let steel = materials.add(StandardMaterial {
        base_color: Color::srgb(0.75, 0.75, 0.78),
        metallic: 0.9,
        perceptual_roughness: 0.3,
        ..default()
    });

    // Glass
    let glass = commands
        .spawn((
            Interactable::new(InteractableKind::Glass),
            Container {
                max_volume: tuning.glass_capacity,
            },
            RigidBody::default(),
            InteractionBounds::new(GLASS_SIZE / 2.0),
            Mesh3d(meshes.add(Cylinder::new(GLASS_SIZE.x / 2.0, GLASS_SIZE.y))),
            MeshMaterial3d(glass_material),
            Transform::from_xyz(-0.3, COUNTER_TOP + GLASS_SIZE.y / 2.0, -0.8),
            Name::new("Glass"),
        ))
        .id();
    spawn_liquid_fill(&mut commands, &mut meshes, &mut materials, glass, GLASS_SIZE);

    // Shaker: body and cap are separate parts, only the root is registered.
    let shaker = commands
        .spawn((
            Interactable::new(InteractableKind::Shaker),
            Container {
                max_volume: tuning.shaker_capacity,
            },
            RigidBody::default(),
            Transform::from_xyz(0.0, COUNTER_TOP + SHAKER_SIZE.y / 2.0, -0.8),
            Visibility::default(),
            Name::new("Shaker"),
        ))
        .with_children(|parts| {
            parts.spawn((
                InteractionBounds::new(SHAKER_SIZE / 2.0),
                Mesh3d(meshes.add(Cylinder::new(SHAKER_SIZE.x / 2.0, SHAKER_SIZE.y))),
                MeshMaterial3d(steel.clone()),
                Transform::default(),
                Name::new("Shaker Body"),
            ));
            parts.spawn((
                InteractionBounds::new(Vec3::new(0.035, 0.03, 0.035)),
                Mesh3d(meshes.add(Cylinder::new(0.035, 0.06))),
                MeshMaterial3d(steel.clone()),
                Transform::from_xyz(0.0, SHAKER_SIZE.y / 2.0 + 0.03, 0.0),
                Name::new("Shaker Cap"),
            ));
        })
        .id();
    debug!("spawned shaker {:?}", shaker);

    commands.spawn((
        Interactable::new(InteractableKind::Jigger),
        RigidBody::default(),
        InteractionBounds::new(Vec3::new(0.025, 0.04, 0.025)),
        Mesh3d(meshes.add(Cylinder::new(0.025, 0.08))),
        MeshMaterial3d(steel),
        Transform::from_xyz(0.3, COUNTER_TOP + 0.04, -0.8),
        Name::new("Jigger"),
    ));

    commands.spawn((
        Interactable::new(InteractableKind::Guitar),
        InteractionBounds::new(Vec3::new(0.2, 0.5, 0.06)),
        Mesh3d(meshes.add(Cuboid::new(0.4, 1.0, 0.12))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.6, 0.3, 0.1),
            ..default()
        })),
        Transform::from_xyz(1.2, 0.5, -0.6),
        Name::new("Guitar"),
    ));

    let ingredients = shelf_ingredients(&book);
    let start_x = -(ingredients.len() as f32 - 1.0) * BOTTLE_SPACING / 2.0;
    let bottle_mesh = meshes.add(Cylinder::new(BOTTLE_SIZE.x / 2.0, BOTTLE_SIZE.y));
    for (index, id) in ingredients.iter().enumerate() {
        let Some(entry) = catalog.get(id) else {
            warn!("recipe ingredient '{}' missing from the catalog, no bottle", id);
            continue;
        };
        let mut bottle = commands.spawn((
            Interactable::new(InteractableKind::Bottle),
            Bottle {
                liquor: entry.id.clone(),
            },
            RigidBody::default(),
            InteractionBounds::new(BOTTLE_SIZE / 2.0),
            Mesh3d(bottle_mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: LiquidColor::from_hex(entry.color).into(),
                ..default()
            })),
            Transform::from_xyz(
                start_x + index as f32 * BOTTLE_SPACING,
                SHELF_HEIGHT + BOTTLE_SIZE.y / 2.0,
                SHELF_DEPTH,
            ),
            Name::new(entry.display_name.clone()),
        ));
        if matches!(entry.category, LiquorCategory::Mixer | LiquorCategory::Juice) {
            bottle.insert(DisplayName(entry.display_name.clone()));
        }
    }
    info!("stocked {} bottles", ingredients.len());
}

fn spawn_liquid_fill(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    container: Entity,
    size: Vec3,
) {
    let height = size.y * 0.9;
    let fill = commands
        .spawn((
            LiquidFill { container, height },
            Mesh3d(meshes.add(Cylinder::new(size.x * 0.45, height))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::from(LiquidColor::NEUTRAL),
                ..default()
            })),
            Transform::from_scale(Vec3::new(1.0, 0.0, 1.0)),
            Visibility::Hidden,
        ))
        .id();
    commands.entity(container).add_child(fill);
}

/// Scales each liquid column to its container's fill ratio and tints it.
pub fn sync_liquid_fill(
    registry: Res<ContainerRegistry>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut fills: Query<(
        &LiquidFill,
        &mut Transform,
        &mut Visibility,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    if !registry.is_changed() {
        return;
    }
    for (fill, mut transform, mut visibility, material) in &mut fills {
        let Some(contents) = registry.get(fill.container) else {
            continue;
        };
        let ratio = contents.fill_ratio();
        transform.scale.y = ratio;
        transform.translation.y = -fill.height / 2.0 + fill.height * ratio / 2.0;
        *visibility = if contents.is_empty() {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        if let Some(mut material) = materials.get_mut(&material.0) {
            material.base_color = contents.color().into();
        }
    }
}
