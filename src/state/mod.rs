//! State management module
//!
//! This module contains the machine state model, the recipe table and the
//! shared application state that serializes access to them.

pub mod machine_state;
pub mod recipe_table;
pub mod app_state;

// Re-export main types
pub use machine_state::{CoffeeType, CupSize, FoamSize, MachineState};
pub use recipe_table::{Recipe, RecipeTable};
pub use app_state::AppState;
