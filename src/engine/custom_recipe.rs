//! Custom recipe registration

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{CoffeeMachine, MachineError, MachineResult};
use crate::state::{CoffeeType, Recipe};

const MAX_MILK: i64 = 15;
const MAX_STRENGTH: i64 = 100;
const MAX_BEANS: i64 = 10;
const MAX_WATER: i64 = 10;

/// Costs of a user-defined recipe, stored under `CUSTOM`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRecipeRequest {
    pub milk_level: i64,
    pub coffee_strength: i64,
    pub beans_level: i64,
    pub water_level: i64,
}

impl CustomRecipeRequest {
    /// Check every bound, collecting one message per violation
    pub fn validate(&self) -> MachineResult<Recipe> {
        let checks = [
            ("milk", self.milk_level, MAX_MILK),
            ("coffee strength", self.coffee_strength, MAX_STRENGTH),
            ("beans", self.beans_level, MAX_BEANS),
            ("water", self.water_level, MAX_WATER),
        ];
        let violations: Vec<String> = checks
            .iter()
            .filter(|(_, value, max)| !(0..=*max).contains(value))
            .map(|(field, value, max)| format!("{field} must be between 0 and {max}, got {value}"))
            .collect();
        if !violations.is_empty() {
            return Err(MachineError::InvalidRecipeParameters(violations));
        }

        // All values are bounded by 100 at this point
        Ok(Recipe::new(
            self.coffee_strength as i32,
            self.milk_level as i32,
            self.water_level as i32,
            self.beans_level as i32,
        ))
    }
}

impl CoffeeMachine {
    /// Register the custom recipe and select it as the current coffee type
    ///
    /// A later registration replaces the earlier custom recipe.
    pub fn register_custom_recipe(&mut self, request: &CustomRecipeRequest) -> MachineResult<&'static str> {
        let recipe = request.validate()?;
        if let Some(previous) = self.recipes.set_custom(recipe) {
            info!("Replacing custom recipe {:?} with {:?}", previous, recipe);
        } else {
            info!("Registered custom recipe {:?}", recipe);
        }
        self.state.set_coffee_type(CoffeeType::Custom.name());
        Ok("added")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BrewRequest;

    fn custom(milk: i64, strength: i64, beans: i64, water: i64) -> CustomRecipeRequest {
        CustomRecipeRequest {
            milk_level: milk,
            coffee_strength: strength,
            beans_level: beans,
            water_level: water,
        }
    }

    #[test]
    fn milk_above_bound_is_rejected() {
        let mut machine = CoffeeMachine::new();
        let err = machine.register_custom_recipe(&custom(16, 50, 5, 5)).unwrap_err();
        match err {
            MachineError::InvalidRecipeParameters(messages) => {
                assert_eq!(messages.len(), 1);
                assert!(messages[0].contains("milk"));
                assert!(messages[0].contains("15"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!machine.recipes().contains(CoffeeType::Custom));
    }

    #[test]
    fn every_violation_is_reported() {
        let mut machine = CoffeeMachine::new();
        let err = machine.register_custom_recipe(&custom(-1, 101, 11, 11)).unwrap_err();
        let MachineError::InvalidRecipeParameters(messages) = err else {
            panic!("expected InvalidRecipeParameters");
        };
        assert_eq!(messages.len(), 4);
        assert!(messages[0].starts_with("milk"));
        assert!(messages[1].starts_with("coffee strength"));
        assert!(messages[2].starts_with("beans"));
        assert!(messages[3].starts_with("water"));
    }

    #[test]
    fn upper_bounds_are_accepted_and_custom_becomes_brewable() {
        let mut machine = CoffeeMachine::new();
        assert_eq!(machine.register_custom_recipe(&custom(15, 100, 10, 10)), Ok("added"));
        assert_eq!(machine.state().coffee_type(), CoffeeType::Custom);
        assert_eq!(
            machine.recipes().get(CoffeeType::Custom),
            Some(&Recipe::new(100, 15, 10, 10))
        );

        let outcome = machine
            .make_coffee(&BrewRequest {
                coffee_type: "CUSTOM".to_string(),
                cup_size: "L".to_string(),
                foam_size: "LOW".to_string(),
                coffee_strength: 90,
            })
            .unwrap();
        assert_eq!(outcome.coffee_type, CoffeeType::Custom);
        assert_eq!(machine.state().milk_level(), 85);
        assert_eq!(machine.state().water_level(), 90);
        assert_eq!(machine.state().beans_level(), 90);
    }

    #[test]
    fn second_registration_replaces_the_first() {
        let mut machine = CoffeeMachine::new();
        machine.register_custom_recipe(&custom(5, 50, 5, 5)).unwrap();
        machine.register_custom_recipe(&custom(0, 0, 0, 0)).unwrap();
        assert_eq!(machine.recipes().get(CoffeeType::Custom), Some(&Recipe::new(0, 0, 0, 0)));
        assert_eq!(machine.recipes().names().len(), 6);
    }
}
