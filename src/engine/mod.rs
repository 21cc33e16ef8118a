//! Recipe & brew engine
//!
//! The engine validates commands against the machine state and the recipe
//! table and commits the resulting changes. Every operation here is
//! synchronous; callers are responsible for serializing mutations (see
//! [`crate::state::AppState`]).

pub mod brew;
pub mod cleaning;
pub mod custom_recipe;
pub mod error;
pub mod resources;

use serde::Serialize;

use crate::state::{MachineState, RecipeTable};

pub use brew::{BrewOutcome, BrewRequest};
pub use cleaning::{CleanBand, CleanOutcome};
pub use custom_recipe::CustomRecipeRequest;
pub use error::{MachineError, MachineResult, Shortfall};
pub use resources::{RefillOutcome, ResourceKind, ResourceReport};

/// The machine state together with the recipes it can brew
#[derive(Debug, Clone, Default)]
pub struct CoffeeMachine {
    state: MachineState,
    recipes: RecipeTable,
}

/// Point-in-time copy of the machine, published after every mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSnapshot {
    #[serde(flatten)]
    pub state: MachineState,
    pub recipes: Vec<&'static str>,
}

impl CoffeeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a machine around an existing state, with the built-in recipes
    pub fn with_state(state: MachineState) -> Self {
        Self {
            state,
            recipes: RecipeTable::new(),
        }
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn recipes(&self) -> &RecipeTable {
        &self.recipes
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            state: self.state.clone(),
            recipes: self.recipes.names(),
        }
    }
}
