//! Cocktail recipe definitions.
//!
//! Recipes are loaded from `.recipes.ron` files. Order inside the book is
//! the match precedence: the first recipe whose rule holds names the drink.

use {
    bevy::prelude::*,
    bevy_common_assets::ron::RonAssetPlugin,
    serde::Deserialize,
};

pub struct RecipesAssetsPlugin;

impl Plugin for RecipesAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<RecipeBookDefinition>::new(&[
            "recipes.ron",
        ]))
        .init_resource::<RecipeBook>();
    }
}

/// Recipe book file loaded from `.recipes.ron` asset files.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
pub struct RecipeBookDefinition {
    pub recipes: Vec<CocktailRecipe>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CocktailRecipe {
    /// Name reported when the rule matches (e.g. "Negroni")
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub rule: RecipeRule,
}

/// How a container's ingredients are tested against a recipe.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum RecipeRule {
    /// `primary.amount / secondary.amount` must fall in `[min_ratio, max_ratio]`.
    RatioPair {
        primary: String,
        secondary: String,
        min_ratio: f32,
        max_ratio: f32,
        #[serde(default)]
        exclusivity: Exclusivity,
    },
    /// Every listed ingredient present, each within `tolerance` (0.3 = ±30%)
    /// of the mean of their amounts.
    Balanced {
        ingredients: Vec<String>,
        tolerance: f32,
    },
    /// Every listed ingredient present, amounts ignored.
    Contains { ingredients: Vec<String> },
}

impl RecipeRule {
    /// Ingredient ids the rule requires.
    pub fn required(&self) -> Vec<&str> {
        match self {
            RecipeRule::RatioPair {
                primary, secondary, ..
            } => vec![primary.as_str(), secondary.as_str()],
            RecipeRule::Balanced { ingredients, .. } | RecipeRule::Contains { ingredients } => {
                ingredients.iter().map(String::as_str).collect()
            }
        }
    }
}

/// What else may share the container with a [`RecipeRule::RatioPair`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub enum Exclusivity {
    #[default]
    Unrestricted,
    /// No base spirit other than the pair itself.
    NoOtherBaseSpirit,
    /// Anything besides the pair must come from this list.
    OnlyExtras(Vec<String>),
}

/// Entry shown in the recipe suggestion list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSuggestion {
    pub name: String,
    pub ingredients: Vec<String>,
    pub description: String,
}

/// Ordered recipe list used to name mixed drinks.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RecipeBook {
    pub recipes: Vec<CocktailRecipe>,
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self::standard()
    }
}

impl RecipeBook {
    pub fn from_definition(definition: &RecipeBookDefinition) -> Self {
        Self {
            recipes: definition.recipes.clone(),
        }
    }

    /// The classic eight. Mojito shares Daiquiri's ingredients and sits
    /// after it, so it never matches.
    pub fn standard() -> Self {
        fn ids(list: &[&str]) -> Vec<String> {
            list.iter().map(|id| id.to_string()).collect()
        }
        let recipe = |name: &str, description: &str, rule: RecipeRule| CocktailRecipe {
            name: name.to_string(),
            description: description.to_string(),
            rule,
        };

        Self {
            recipes: vec![
                recipe(
                    "Martini",
                    "Gin and dry vermouth, stirred, two or three to one.",
                    RecipeRule::RatioPair {
                        primary: "gin".into(),
                        secondary: "vermouth_dry".into(),
                        min_ratio: 2.0,
                        max_ratio: 3.0,
                        exclusivity: Exclusivity::OnlyExtras(ids(&[
                            "lemon_juice",
                            "lime_juice",
                            "simple_syrup",
                        ])),
                    },
                ),
                recipe(
                    "Vodka Martini",
                    "The vodka take on the Martini.",
                    RecipeRule::RatioPair {
                        primary: "vodka".into(),
                        secondary: "vermouth_dry".into(),
                        min_ratio: 2.0,
                        max_ratio: 3.0,
                        exclusivity: Exclusivity::NoOtherBaseSpirit,
                    },
                ),
                recipe(
                    "Negroni",
                    "Equal parts gin, Campari and sweet vermouth.",
                    RecipeRule::Balanced {
                        ingredients: ids(&["gin", "campari", "vermouth_sweet"]),
                        tolerance: 0.3,
                    },
                ),
                recipe(
                    "Margarita",
                    "Tequila, triple sec and lime.",
                    RecipeRule::Contains {
                        ingredients: ids(&["tequila", "triple_sec", "lime_juice"]),
                    },
                ),
                recipe(
                    "Daiquiri",
                    "Rum, lime and sugar.",
                    RecipeRule::Contains {
                        ingredients: ids(&["rum", "lime_juice", "simple_syrup"]),
                    },
                ),
                recipe(
                    "Piña Colada",
                    "Rum, pineapple and coconut cream.",
                    RecipeRule::Contains {
                        ingredients: ids(&["rum", "pineapple_juice", "coconut_cream"]),
                    },
                ),
                recipe(
                    "Cosmopolitan",
                    "Vodka, triple sec, cranberry and lime.",
                    RecipeRule::Contains {
                        ingredients: ids(&["vodka", "triple_sec", "cranberry_juice", "lime_juice"]),
                    },
                ),
                recipe(
                    "Mojito",
                    "Rum, lime and sugar, topped with mint.",
                    RecipeRule::Contains {
                        ingredients: ids(&["rum", "lime_juice", "simple_syrup"]),
                    },
                ),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&CocktailRecipe> {
        self.recipes.iter().find(|recipe| recipe.name == name)
    }

    /// Recipe cards for the UI, in book order.
    pub fn suggestions(&self) -> Vec<RecipeSuggestion> {
        self.recipes
            .iter()
            .map(|recipe| RecipeSuggestion {
                name: recipe.name.clone(),
                ingredients: recipe.rule.required().into_iter().map(String::from).collect(),
                description: recipe.description.clone(),
            })
            .collect()
    }
}
