//! Cleanliness classification and the clean action

use serde::Serialize;
use tracing::info;

use super::CoffeeMachine;
use crate::state::machine_state::FULL_LEVEL;

/// Cleaning resets the machine only below this level
pub const CLEAN_THRESHOLD: i32 = 70;

/// Cleanliness band of the brew unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CleanBand {
    Critical,
    NeedsCleaningSoon,
    Ok,
    Clean,
}

impl CleanBand {
    /// Classify a clean level. Anything below 10, negatives included, is critical.
    pub fn classify(level: i32) -> Self {
        match level {
            i32::MIN..=9 => CleanBand::Critical,
            10..=29 => CleanBand::NeedsCleaningSoon,
            30..=69 => CleanBand::Ok,
            _ => CleanBand::Clean,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CleanBand::Critical => "critical: brewing blocked",
            CleanBand::NeedsCleaningSoon => "needs cleaning soon",
            CleanBand::Ok => "ok",
            CleanBand::Clean => "clean",
        }
    }
}

/// Result of a clean request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanOutcome {
    pub clean_level: i32,
    pub status: &'static str,
    #[serde(skip)]
    pub cleaned: bool,
}

impl CoffeeMachine {
    pub fn clean_band(&self) -> CleanBand {
        CleanBand::classify(self.state.clean_level())
    }

    /// Reset cleanliness to full if it has dropped below the threshold
    pub fn clean(&mut self) -> CleanOutcome {
        let level = self.state.clean_level();
        if level < CLEAN_THRESHOLD {
            self.state.set_clean_level(FULL_LEVEL);
            info!("Machine cleaned (clean level {} -> {})", level, FULL_LEVEL);
            CleanOutcome {
                clean_level: FULL_LEVEL,
                status: "cleaned",
                cleaned: true,
            }
        } else {
            CleanOutcome {
                clean_level: level,
                status: "does not need cleaning",
                cleaned: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MachineState;

    fn machine_at(clean_level: i32) -> CoffeeMachine {
        let mut state = MachineState::new();
        state.set_clean_level(clean_level);
        CoffeeMachine::with_state(state)
    }

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(CleanBand::classify(-15), CleanBand::Critical);
        assert_eq!(CleanBand::classify(0), CleanBand::Critical);
        assert_eq!(CleanBand::classify(9), CleanBand::Critical);
        assert_eq!(CleanBand::classify(10), CleanBand::NeedsCleaningSoon);
        assert_eq!(CleanBand::classify(29), CleanBand::NeedsCleaningSoon);
        assert_eq!(CleanBand::classify(30), CleanBand::Ok);
        assert_eq!(CleanBand::classify(69), CleanBand::Ok);
        assert_eq!(CleanBand::classify(70), CleanBand::Clean);
        assert_eq!(CleanBand::classify(100), CleanBand::Clean);
    }

    #[test]
    fn cleaning_below_threshold_resets_to_full() {
        let mut machine = machine_at(69);
        let outcome = machine.clean();
        assert!(outcome.cleaned);
        assert_eq!(outcome.clean_level, 100);
        assert_eq!(machine.state().clean_level(), 100);
        assert_eq!(machine.clean_band().label(), "clean");
    }

    #[test]
    fn cleaning_at_threshold_is_a_no_op() {
        let mut machine = machine_at(70);
        let outcome = machine.clean();
        assert!(!outcome.cleaned);
        assert_eq!(outcome.status, "does not need cleaning");
        assert_eq!(machine.state().clean_level(), 70);
    }

    #[test]
    fn cleaning_recovers_a_negative_level() {
        let mut machine = machine_at(-5);
        assert_eq!(machine.clean_band(), CleanBand::Critical);
        assert_eq!(machine.clean().clean_level, 100);
    }
}
