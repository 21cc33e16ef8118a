//! Coffee Machine - An HTTP-controlled coffee machine simulator
//!
//! This library models the machine state, the recipe table and the brew
//! engine, and exposes them through an axum router.

pub mod config;
pub mod state;
pub mod engine;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use engine::{CoffeeMachine, MachineError};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
