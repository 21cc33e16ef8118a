//! Resource monitor background task

use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, error, info, warn};

use crate::{
    engine::{resources::REFILL_THRESHOLD, CleanBand, MachineSnapshot, ResourceKind},
    state::AppState,
};

/// Something on the machine that needs an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    LowResource(ResourceKind, i32),
    CleaningCritical(i32),
}

/// Alerts raised by a snapshot
pub fn alerts_for(snapshot: &MachineSnapshot) -> Vec<Alert> {
    let state = &snapshot.state;
    let mut alerts: Vec<Alert> = [
        (ResourceKind::Milk, state.milk_level()),
        (ResourceKind::Water, state.water_level()),
        (ResourceKind::Beans, state.beans_level()),
    ]
    .into_iter()
    .filter(|(_, level)| *level < REFILL_THRESHOLD)
    .map(|(kind, level)| Alert::LowResource(kind, level))
    .collect();

    if CleanBand::classify(state.clean_level()) == CleanBand::Critical {
        alerts.push(Alert::CleaningCritical(state.clean_level()));
    }
    alerts
}

/// Background task that warns when a mutation leaves the machine low on something
///
/// Only alerts that were not already raised by the previous snapshot are logged.
pub async fn resource_monitor_task(state: Arc<AppState>) {
    info!("Starting resource monitor task");

    let mut state_rx = state.state_change_tx.subscribe();
    let mut active: Vec<Alert> = Vec::new();

    loop {
        match state_rx.recv().await {
            Ok(snapshot) => {
                let alerts = alerts_for(&snapshot);
                for alert in &alerts {
                    let already_raised = active.iter().any(|a| same_kind(a, alert));
                    if already_raised {
                        continue;
                    }
                    match alert {
                        Alert::LowResource(kind, level) => {
                            warn!("{} is low ({}%), please refill", kind.name(), level)
                        }
                        Alert::CleaningCritical(level) => {
                            warn!("Clean level is critical ({}), brewing will be blocked", level)
                        }
                    }
                }
                if alerts.is_empty() && !active.is_empty() {
                    debug!("All resource alerts cleared");
                }
                active = alerts;
            }
            Err(RecvError::Lagged(skipped)) => {
                debug!("Resource monitor skipped {} snapshots", skipped);
            }
            Err(RecvError::Closed) => {
                error!("State change channel closed, stopping resource monitor");
                break;
            }
        }
    }
}

fn same_kind(a: &Alert, b: &Alert) -> bool {
    match (a, b) {
        (Alert::LowResource(x, _), Alert::LowResource(y, _)) => x == y,
        (Alert::CleaningCritical(_), Alert::CleaningCritical(_)) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::CoffeeMachine, state::MachineState};

    #[test]
    fn full_machine_raises_nothing() {
        assert!(alerts_for(&CoffeeMachine::new().snapshot()).is_empty());
    }

    #[test]
    fn low_containers_and_dirty_unit_raise_alerts() {
        let mut state = MachineState::new();
        state.set_milk_level(0);
        state.set_beans_level(29);
        state.set_clean_level(-5);
        let snapshot = CoffeeMachine::with_state(state).snapshot();

        assert_eq!(
            alerts_for(&snapshot),
            vec![
                Alert::LowResource(ResourceKind::Milk, 0),
                Alert::LowResource(ResourceKind::Beans, 29),
                Alert::CleaningCritical(-5),
            ]
        );
    }

    #[test]
    fn alert_kinds_ignore_levels() {
        assert!(same_kind(
            &Alert::LowResource(ResourceKind::Milk, 10),
            &Alert::LowResource(ResourceKind::Milk, 0)
        ));
        assert!(!same_kind(
            &Alert::LowResource(ResourceKind::Milk, 10),
            &Alert::LowResource(ResourceKind::Water, 10)
        ));
    }
}
