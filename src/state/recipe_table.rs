//! Recipe table - resource costs per coffee type

use std::collections::BTreeMap;

use serde::Serialize;

use super::CoffeeType;

/// Strength default and resource costs for one coffee type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub strength: i32,
    pub milk: i32,
    pub water: i32,
    pub beans: i32,
}

impl Recipe {
    pub const fn new(strength: i32, milk: i32, water: i32, beans: i32) -> Self {
        Self { strength, milk, water, beans }
    }
}

/// Built-in recipes loaded at startup. CAFFE_LATTE has no entry.
const BUILT_IN: [(CoffeeType, Recipe); 5] = [
    (CoffeeType::Cappuccino, Recipe::new(60, 20, 10, 10)),
    (CoffeeType::Espresso, Recipe::new(100, 100, 0, 10)),
    (CoffeeType::LatteMachiatto, Recipe::new(45, 30, 5, 8)),
    (CoffeeType::Doppio, Recipe::new(100, 0, 10, 20)),
    (CoffeeType::Americano, Recipe::new(70, 0, 30, 10)),
];

/// Mapping from coffee type to its recipe
///
/// Only the `CUSTOM` entry can change after startup; built-in entries are
/// never replaced or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeTable {
    recipes: BTreeMap<CoffeeType, Recipe>,
}

impl RecipeTable {
    /// Create a table holding only the built-in recipes
    pub fn new() -> Self {
        Self {
            recipes: BUILT_IN.into_iter().collect(),
        }
    }

    /// Find the recipe for a coffee type name, if one is registered
    pub fn lookup(&self, name: &str) -> Option<(CoffeeType, Recipe)> {
        let coffee_type = CoffeeType::from_name(name)?;
        self.recipes.get(&coffee_type).map(|recipe| (coffee_type, *recipe))
    }

    pub fn get(&self, coffee_type: CoffeeType) -> Option<&Recipe> {
        self.recipes.get(&coffee_type)
    }

    pub fn contains(&self, coffee_type: CoffeeType) -> bool {
        self.recipes.contains_key(&coffee_type)
    }

    /// Store the custom recipe, returning the one it replaced
    pub fn set_custom(&mut self, recipe: Recipe) -> Option<Recipe> {
        self.recipes.insert(CoffeeType::Custom, recipe)
    }

    /// Names of every brewable coffee type, in declaration order
    pub fn names(&self) -> Vec<&'static str> {
        self.recipes.keys().map(|t| t.name()).collect()
    }
}

impl Default for RecipeTable {
    fn default() -> Self {
        Self::new()
    }
}
