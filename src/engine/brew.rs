//! Brew validation and resource debit pipeline

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CoffeeMachine, MachineError, MachineResult, Shortfall};
use crate::state::{CoffeeType, CupSize, FoamSize};

/// Accepted coffee strength range, inclusive
pub const STRENGTH_RANGE: std::ops::RangeInclusive<i64> = 45..=100;

/// Cleanliness lost with every brew. Not floored at zero.
pub const CLEAN_COST_PER_BREW: i32 = 5;

/// A request to brew one cup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewRequest {
    #[serde(rename = "type")]
    pub coffee_type: String,
    pub cup_size: String,
    pub foam_size: String,
    pub coffee_strength: i64,
}

/// What was brewed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewOutcome {
    #[serde(rename = "type")]
    pub coffee_type: CoffeeType,
    pub cup_size: CupSize,
    pub foam_size: FoamSize,
    pub coffee_strength: i32,
    pub status: &'static str,
}

impl CoffeeMachine {
    /// Validate a brew request and, if every precondition holds, commit it
    ///
    /// Field validation stops at the first invalid field. Resource and
    /// cleanliness checks all run and are reported together. The state is
    /// only touched once everything has passed.
    pub fn make_coffee(&mut self, request: &BrewRequest) -> MachineResult<BrewOutcome> {
        if request.coffee_type.is_empty() {
            return Err(MachineError::InvalidCoffeeType(request.coffee_type.clone()));
        }
        let (coffee_type, recipe) = self
            .recipes
            .lookup(&request.coffee_type)
            .ok_or_else(|| MachineError::InvalidCoffeeType(request.coffee_type.clone()))?;
        let cup_size = CupSize::from_name(&request.cup_size)
            .ok_or_else(|| MachineError::InvalidCupSize(request.cup_size.clone()))?;
        let foam_size = FoamSize::from_name(&request.foam_size)
            .ok_or_else(|| MachineError::InvalidFoamSize(request.foam_size.clone()))?;
        if !STRENGTH_RANGE.contains(&request.coffee_strength) {
            return Err(MachineError::InvalidCoffeeStrength(request.coffee_strength));
        }
        let coffee_strength = request.coffee_strength as i32;

        let state = &mut self.state;
        let mut shortfalls = Vec::new();
        if state.milk_level() < recipe.milk {
            shortfalls.push(Shortfall::Milk);
        }
        if state.water_level() < recipe.water {
            shortfalls.push(Shortfall::Water);
        }
        if state.beans_level() < recipe.beans {
            shortfalls.push(Shortfall::Beans);
        }
        if state.clean_level() <= 0 {
            shortfalls.push(Shortfall::Clean);
        }
        if !shortfalls.is_empty() {
            return Err(MachineError::Unavailable(shortfalls));
        }

        state.set_coffee_type(coffee_type.name());
        state.set_cup_size(cup_size.name());
        state.set_foam_size(foam_size.name());
        state.set_coffee_strength(coffee_strength);
        state.set_milk_level(state.milk_level() - recipe.milk);
        state.set_water_level(state.water_level() - recipe.water);
        state.set_beans_level(state.beans_level() - recipe.beans);
        state.set_clean_level(state.clean_level() - CLEAN_COST_PER_BREW);

        debug!(
            "Brewed {}: milk={}, water={}, beans={}, clean={}",
            coffee_type.name(),
            state.milk_level(),
            state.water_level(),
            state.beans_level(),
            state.clean_level()
        );

        Ok(BrewOutcome {
            coffee_type: state.coffee_type(),
            cup_size: state.cup_size(),
            foam_size: state.foam_size(),
            coffee_strength: state.coffee_strength(),
            status: "done",
        })
    }
}
