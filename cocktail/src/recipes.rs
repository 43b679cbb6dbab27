//! Naming a mix from its ingredients.

use {
    cocktail_resources::ContainerState,
    liquor_assets::{LiquorCatalog, LiquorCategory},
    recipes_assets::{Exclusivity, RecipeBook, RecipeRule},
};

pub const VODKA_NEAT: &str = "Vodka Neat";
pub const GIN_NEAT: &str = "Gin Neat";
pub const TROPICAL_MIX: &str = "Tropical Mix";
pub const SEX_ON_THE_BEACH: &str = "Sex on the Beach";
pub const CUSTOM_MIX: &str = "Custom Mix";
pub const DUAL_MIX: &str = "Dual Mix";
pub const UNKNOWN_DRINK: &str = "Unknown Drink";

/// First recipe in `book` whose rule holds, else the generic fallback names.
/// Pure: the result depends only on the current ingredients.
pub fn identify(contents: &ContainerState, catalog: &LiquorCatalog, book: &RecipeBook) -> String {
    book.recipes
        .iter()
        .find(|recipe| rule_matches(&recipe.rule, contents, catalog))
        .map(|recipe| recipe.name.clone())
        .unwrap_or_else(|| fallback_name(contents).to_string())
}

fn fallback_name(contents: &ContainerState) -> &'static str {
    let count = contents.ingredients().len();
    let only = |kind: &str| count == 1 && contents.has(kind);

    if only("vodka") {
        VODKA_NEAT
    } else if only("gin") {
        GIN_NEAT
    } else if contents.has("rum") && contents.has("liqueur") {
        TROPICAL_MIX
    } else if contents.has("vodka") && contents.has("liqueur") {
        SEX_ON_THE_BEACH
    } else if count > 2 {
        CUSTOM_MIX
    } else if count == 2 {
        DUAL_MIX
    } else {
        UNKNOWN_DRINK
    }
}

pub fn rule_matches(rule: &RecipeRule, contents: &ContainerState, catalog: &LiquorCatalog) -> bool {
    match rule {
        RecipeRule::RatioPair {
            primary,
            secondary,
            min_ratio,
            max_ratio,
            exclusivity,
        } => {
            let (Some(a), Some(b)) = (contents.ingredient(primary), contents.ingredient(secondary))
            else {
                return false;
            };
            if b.amount <= 0.0 {
                return false;
            }
            let ratio = a.amount / b.amount;
            if ratio < *min_ratio || ratio > *max_ratio {
                return false;
            }

            let mut others = contents
                .ingredients()
                .iter()
                .filter(|ingredient| ingredient.kind != *primary && ingredient.kind != *secondary);
            match exclusivity {
                Exclusivity::Unrestricted => true,
                Exclusivity::NoOtherBaseSpirit => others.all(|ingredient| {
                    catalog.category_of(&ingredient.kind) != Some(LiquorCategory::BaseSpirit)
                }),
                Exclusivity::OnlyExtras(allowed) => {
                    others.all(|ingredient| allowed.contains(&ingredient.kind))
                }
            }
        }
        RecipeRule::Balanced {
            ingredients,
            tolerance,
        } => {
            if ingredients.is_empty() || !ingredients.iter().all(|kind| contents.has(kind)) {
                return false;
            }
            let amounts: Vec<f32> = ingredients.iter().map(|kind| contents.amount_of(kind)).collect();
            let mean = amounts.iter().sum::<f32>() / amounts.len() as f32;
            amounts
                .iter()
                .all(|amount| (amount - mean).abs() <= mean * tolerance)
        }
        RecipeRule::Contains { ingredients } => ingredients.iter().all(|kind| contents.has(kind)),
    }
}

/// ABV of the mix in percent. Ingredients missing from the catalog count as 0%.
pub fn alcohol_content(contents: &ContainerState, catalog: &LiquorCatalog) -> f32 {
    if contents.volume() <= 0.0 {
        return 0.0;
    }
    let alcohol: f32 = contents
        .ingredients()
        .iter()
        .map(|ingredient| {
            let abv = catalog
                .get(&ingredient.kind)
                .map_or(0.0, |entry| entry.alcohol_percent);
            ingredient.amount * abv / 100.0
        })
        .sum();
    alcohol / contents.volume() * 100.0
}
