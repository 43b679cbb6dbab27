//! Liquor reference data.
//!
//! The built-in table is always available through [`LiquorCatalog::standard`].
//! A `.catalog.ron` file can replace it at load time.

use {
    bevy::{platform::collections::HashMap, prelude::*},
    bevy_common_assets::ron::RonAssetPlugin,
    serde::Deserialize,
};

pub struct LiquorAssetsPlugin;

impl Plugin for LiquorAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<LiquorCatalogDefinition>::new(&[
            "catalog.ron",
        ]))
        .register_type::<LiquorCategory>()
        .init_resource::<LiquorCatalog>();
    }
}

#[derive(Reflect, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum LiquorCategory {
    #[default]
    BaseSpirit,
    Mixer,
    Juice,
    Liqueur,
    FortifiedWine,
}

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LiquorEntry {
    /// Ingredient id used by bottles and containers (e.g. "vermouth_dry")
    pub id: String,
    /// Short name used in hint text
    pub name: String,
    /// Brand-neutral English label
    pub display_name: String,
    /// 0xRRGGBB
    pub color: u32,
    pub alcohol_percent: f32,
    pub category: LiquorCategory,
}

/// Catalog file loaded from `.catalog.ron` assets.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
pub struct LiquorCatalogDefinition {
    pub entries: Vec<LiquorEntry>,
}

/// Read-only lookup of every known ingredient.
#[derive(Resource, Debug, Clone)]
pub struct LiquorCatalog {
    entries: Vec<LiquorEntry>,
    by_id: HashMap<String, usize>,
}

impl Default for LiquorCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl LiquorCatalog {
    pub fn new(entries: Vec<LiquorEntry>) -> Self {
        let mut catalog = Self {
            entries: Vec::with_capacity(entries.len()),
            by_id: HashMap::default(),
        };
        for entry in entries {
            // Later rows win, the order of first appearance is kept.
            if let Some(&index) = catalog.by_id.get(&entry.id) {
                catalog.entries[index] = entry;
            } else {
                catalog.by_id.insert(entry.id.clone(), catalog.entries.len());
                catalog.entries.push(entry);
            }
        }
        catalog
    }

    pub fn from_definition(definition: &LiquorCatalogDefinition) -> Self {
        Self::new(definition.entries.clone())
    }

    pub fn standard() -> Self {
        use LiquorCategory::*;

        let row = |id: &str,
                   name: &str,
                   display_name: &str,
                   color: u32,
                   abv: f32,
                   category: LiquorCategory| LiquorEntry {
            id: id.to_string(),
            name: name.to_string(),
            display_name: display_name.to_string(),
            color,
            alcohol_percent: abv,
            category,
        };

        Self::new(vec![
            // Base spirits
            row("vodka", "Vodka", "Vodka", 0xf0f0f0, 40.0, BaseSpirit),
            row("gin", "Gin", "Gin", 0xe8f4f8, 40.0, BaseSpirit),
            row("rum", "Rum", "Rum", 0xd4a574, 40.0, BaseSpirit),
            row("whiskey", "Whiskey", "Whiskey", 0xb87333, 40.0, BaseSpirit),
            row("tequila", "Tequila", "Tequila", 0xf5deb3, 40.0, BaseSpirit),
            row("brandy", "Brandy", "Brandy", 0x8b4513, 40.0, BaseSpirit),
            // Mixers
            row("lemon_juice", "Lemon", "Lemon Juice", 0xfff44f, 0.0, Mixer),
            row("lime_juice", "Lime", "Lime Juice", 0x32cd32, 0.0, Mixer),
            row("simple_syrup", "Syrup", "Simple Syrup", 0xffe4b5, 0.0, Mixer),
            row("grenadine", "Grenadine", "Grenadine", 0xff0000, 0.0, Mixer),
            row(
                "angostura_bitters",
                "Bitters",
                "Angostura Bitters",
                0x8b0000,
                44.7,
                Mixer,
            ),
            row("soda_water", "Soda", "Soda Water", 0xe0ffff, 0.0, Mixer),
            row("tonic_water", "Tonic", "Tonic Water", 0xf0ffff, 0.0, Mixer),
            row("cola", "Cola", "Cola", 0x3e2723, 0.0, Mixer),
            row("coconut_cream", "Coconut", "Coconut Cream", 0xfffaf0, 0.0, Mixer),
            // Juices
            row("orange_juice", "Orange", "Orange Juice", 0xffa500, 0.0, Juice),
            row("pineapple_juice", "Pineapple", "Pineapple Juice", 0xffeb3b, 0.0, Juice),
            row("cranberry_juice", "Cranberry", "Cranberry Juice", 0xdc143c, 0.0, Juice),
            row("tomato_juice", "Tomato", "Tomato Juice", 0xff6347, 0.0, Juice),
            row("grapefruit_juice", "Grapefruit", "Grapefruit Juice", 0xff69b4, 0.0, Juice),
            // Liqueurs
            row("liqueur", "Liqueur", "Liqueur", 0xff6b9d, 20.0, Liqueur),
            row("triple_sec", "Triple Sec", "Triple Sec", 0xfff8dc, 30.0, Liqueur),
            row("campari", "Campari", "Campari", 0xc4161c, 25.0, Liqueur),
            // Fortified wines
            row("vermouth_dry", "Dry Vermouth", "Dry Vermouth", 0xf3efc8, 18.0, FortifiedWine),
            row(
                "vermouth_sweet",
                "Sweet Vermouth",
                "Sweet Vermouth",
                0x7b2d26,
                18.0,
                FortifiedWine,
            ),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&LiquorEntry> {
        self.by_id.get(id).map(|&index| &self.entries[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn category_of(&self, id: &str) -> Option<LiquorCategory> {
        self.get(id).map(|entry| entry.category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LiquorEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
