//! Main application state management

use std::{
    sync::{Mutex, RwLock, RwLockReadGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::engine::{
    BrewOutcome, BrewRequest, CleanBand, CleanOutcome, CoffeeMachine, CustomRecipeRequest,
    MachineError, MachineResult, MachineSnapshot, RefillOutcome, ResourceReport,
};

/// Main application state shared by every request handler
///
/// The coffee machine sits behind a single `RwLock`: every mutation holds the
/// write lock for its whole check-then-commit sequence, while queries share the
/// read lock.
#[derive(Debug)]
pub struct AppState {
    /// The machine and its recipe table
    machine: RwLock<CoffeeMachine>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
    /// Channel for machine change notifications
    pub state_change_tx: broadcast::Sender<MachineSnapshot>,
}

impl AppState {
    /// Create a new AppState around a fresh machine
    pub fn new(port: u16, host: String) -> Self {
        Self::with_machine(port, host, CoffeeMachine::new())
    }

    pub fn with_machine(port: u16, host: String, machine: CoffeeMachine) -> Self {
        let (state_change_tx, _) = broadcast::channel(100);

        Self {
            machine: RwLock::new(machine),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            state_change_tx,
        }
    }

    fn read(&self) -> MachineResult<RwLockReadGuard<'_, CoffeeMachine>> {
        self.machine.read().map_err(|e| {
            error!("Failed to lock machine state: {}", e);
            MachineError::StatePoisoned
        })
    }

    /// Run a mutation under the write lock and notify listeners if it succeeded
    pub fn update_machine<T, F>(&self, action: &str, updater: F) -> MachineResult<T>
    where
        F: FnOnce(&mut CoffeeMachine) -> MachineResult<T>,
    {
        let mut machine = self.machine.write().map_err(|e| {
            error!("Failed to lock machine state: {}", e);
            MachineError::StatePoisoned
        })?;

        let value = match updater(&mut *machine) {
            Ok(value) => value,
            Err(e) => {
                warn!("{} rejected: {}", action, e);
                return Err(e);
            }
        };
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some((action.to_string(), Utc::now()));
        }

        // Sent under the write guard so listeners see snapshots in commit order.
        // Nobody listening is fine, the monitor task may not be running
        if self.state_change_tx.send(machine.snapshot()).is_err() {
            debug!("No state change listeners for {}", action);
        }
        drop(machine);

        Ok(value)
    }

    /// Brew a coffee
    pub fn make_coffee(&self, request: &BrewRequest) -> MachineResult<BrewOutcome> {
        let outcome = self.update_machine("coffee", |machine| machine.make_coffee(request))?;
        info!(
            "Brewed {} ({}, foam {}, strength {})",
            outcome.coffee_type.name(),
            outcome.cup_size.name(),
            outcome.foam_size.name(),
            outcome.coffee_strength
        );
        Ok(outcome)
    }

    /// Register the custom recipe
    pub fn register_custom_recipe(&self, request: &CustomRecipeRequest) -> MachineResult<&'static str> {
        self.update_machine("custom-recipe", |machine| machine.register_custom_recipe(request))
    }

    /// Clean the machine if it needs it
    pub fn clean(&self) -> MachineResult<CleanOutcome> {
        self.update_machine("clean", |machine| Ok(machine.clean()))
    }

    /// Refill one container
    pub fn refill(&self, resource_type: &str) -> MachineResult<RefillOutcome> {
        self.update_machine("refill", |machine| machine.refill(resource_type))
    }

    /// Current cleanliness band and raw level
    pub fn clean_level(&self) -> MachineResult<(CleanBand, i32)> {
        let machine = self.read()?;
        Ok((machine.clean_band(), machine.state().clean_level()))
    }

    pub fn resource_report(&self) -> MachineResult<ResourceReport> {
        Ok(self.read()?.resource_report())
    }

    pub fn snapshot(&self) -> MachineResult<MachineSnapshot> {
        Ok(self.read()?.snapshot())
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        match self.last_action.lock().ok().and_then(|a| a.clone()) {
            Some((action, time)) => (Some(action), Some(time)),
            None => (None, None),
        }
    }
}
