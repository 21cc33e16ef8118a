//! Resource level reporting and refills

use serde::Serialize;
use tracing::info;

use super::{CoffeeMachine, MachineError, MachineResult};
use crate::state::machine_state::FULL_LEVEL;

/// Levels below this are reported as needing a refill
pub const REFILL_THRESHOLD: i32 = 30;

/// A refillable container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKind {
    Milk,
    Water,
    Beans,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Milk, ResourceKind::Water, ResourceKind::Beans];

    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Milk => "MILK",
            ResourceKind::Water => "WATER",
            ResourceKind::Beans => "BEANS",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }
}

/// Current container levels with an aggregate status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceReport {
    pub milk_level: i32,
    pub water_level: i32,
    pub beans_level: i32,
    pub status: &'static str,
}

impl ResourceReport {
    pub fn needs_refill(&self) -> bool {
        [self.milk_level, self.water_level, self.beans_level]
            .iter()
            .any(|level| *level < REFILL_THRESHOLD)
    }
}

/// Result of a refill request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefillOutcome {
    pub resource_type: ResourceKind,
    pub level: i32,
    pub status: &'static str,
    #[serde(skip)]
    pub refilled: bool,
}

impl CoffeeMachine {
    pub fn resource_level(&self, kind: ResourceKind) -> i32 {
        match kind {
            ResourceKind::Milk => self.state.milk_level(),
            ResourceKind::Water => self.state.water_level(),
            ResourceKind::Beans => self.state.beans_level(),
        }
    }

    pub fn resource_report(&self) -> ResourceReport {
        let mut report = ResourceReport {
            milk_level: self.state.milk_level(),
            water_level: self.state.water_level(),
            beans_level: self.state.beans_level(),
            status: "good",
        };
        if report.needs_refill() {
            report.status = "needs refill";
        }
        report
    }

    /// Fill the named container back to 100
    pub fn refill(&mut self, resource_type: &str) -> MachineResult<RefillOutcome> {
        let kind = ResourceKind::from_name(resource_type)
            .ok_or_else(|| MachineError::InvalidResourceType(resource_type.to_string()))?;

        let level = self.resource_level(kind);
        if level >= FULL_LEVEL {
            return Ok(RefillOutcome {
                resource_type: kind,
                level,
                status: "already full",
                refilled: false,
            });
        }

        match kind {
            ResourceKind::Milk => self.state.set_milk_level(FULL_LEVEL),
            ResourceKind::Water => self.state.set_water_level(FULL_LEVEL),
            ResourceKind::Beans => self.state.set_beans_level(FULL_LEVEL),
        }
        info!("Refilled {} ({} -> {})", kind.name(), level, FULL_LEVEL);

        Ok(RefillOutcome {
            resource_type: kind,
            level: FULL_LEVEL,
            status: "refilled",
            refilled: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MachineState;

    #[test]
    fn full_machine_reports_good() {
        let machine = CoffeeMachine::new();
        let report = machine.resource_report();
        assert_eq!(report.status, "good");
        assert_eq!((report.milk_level, report.water_level, report.beans_level), (100, 100, 100));
    }

    #[test]
    fn any_low_container_needs_refill() {
        let mut state = MachineState::new();
        state.set_water_level(29);
        let machine = CoffeeMachine::with_state(state);
        assert_eq!(machine.resource_report().status, "needs refill");

        let mut state = MachineState::new();
        state.set_beans_level(30);
        let machine = CoffeeMachine::with_state(state);
        assert_eq!(machine.resource_report().status, "good");
    }

    #[test]
    fn refill_at_full_is_a_no_op() {
        let mut machine = CoffeeMachine::new();
        let outcome = machine.refill("MILK").unwrap();
        assert!(!outcome.refilled);
        assert_eq!(outcome.status, "already full");
        assert_eq!(machine.state().milk_level(), 100);
    }

    #[test]
    fn refill_sets_level_to_exactly_full() {
        let mut state = MachineState::new();
        state.set_milk_level(99);
        state.set_beans_level(0);
        let mut machine = CoffeeMachine::with_state(state);

        let outcome = machine.refill("MILK").unwrap();
        assert!(outcome.refilled);
        assert_eq!(outcome.level, 100);
        assert_eq!(machine.state().milk_level(), 100);

        machine.refill("BEANS").unwrap();
        assert_eq!(machine.state().beans_level(), 100);
    }

    #[test]
    fn refill_only_touches_the_named_container() {
        let mut state = MachineState::new();
        state.set_milk_level(10);
        state.set_water_level(10);
        let mut machine = CoffeeMachine::with_state(state);

        machine.refill("WATER").unwrap();
        assert_eq!(machine.state().water_level(), 100);
        assert_eq!(machine.state().milk_level(), 10);
    }

    #[test]
    fn unknown_resource_is_rejected() {
        let mut machine = CoffeeMachine::new();
        assert_eq!(
            machine.refill("SUGAR").unwrap_err(),
            MachineError::InvalidResourceType("SUGAR".to_string())
        );
        assert_eq!(
            machine.refill("milk").unwrap_err().kind(),
            "InvalidResourceType"
        );
    }
}
