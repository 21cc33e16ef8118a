//! Machine state structure and the enumerated brew selections

use serde::{Deserialize, Serialize};

/// Highest value any resource or cleanliness level can take
pub const FULL_LEVEL: i32 = 100;

/// Coffee types the machine knows about
///
/// `CaffeLatte` is selectable but has no built-in recipe, and `Custom` only
/// becomes brewable once a custom recipe has been registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoffeeType {
    Cappuccino,
    Espresso,
    LatteMachiatto,
    Doppio,
    Americano,
    CaffeLatte,
    Custom,
}

impl CoffeeType {
    pub const ALL: [CoffeeType; 7] = [
        CoffeeType::Cappuccino,
        CoffeeType::Espresso,
        CoffeeType::LatteMachiatto,
        CoffeeType::Doppio,
        CoffeeType::Americano,
        CoffeeType::CaffeLatte,
        CoffeeType::Custom,
    ];

    /// Wire name of the coffee type
    pub fn name(self) -> &'static str {
        match self {
            CoffeeType::Cappuccino => "CAPPUCCINO",
            CoffeeType::Espresso => "ESPRESSO",
            CoffeeType::LatteMachiatto => "LATTE_MACHIATTO",
            CoffeeType::Doppio => "DOPPIO",
            CoffeeType::Americano => "AMERICANO",
            CoffeeType::CaffeLatte => "CAFFE_LATTE",
            CoffeeType::Custom => "CUSTOM",
        }
    }

    /// Look up a coffee type by its exact wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// Cup sizes offered by the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CupSize {
    S,
    M,
    L,
    Xl,
}

impl CupSize {
    pub const ALL: [CupSize; 4] = [CupSize::S, CupSize::M, CupSize::L, CupSize::Xl];

    pub fn name(self) -> &'static str {
        match self {
            CupSize::S => "S",
            CupSize::M => "M",
            CupSize::L => "L",
            CupSize::Xl => "XL",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// Amount of milk foam on top of the drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoamSize {
    None,
    Low,
    Medium,
    High,
}

impl FoamSize {
    pub const ALL: [FoamSize; 4] = [FoamSize::None, FoamSize::Low, FoamSize::Medium, FoamSize::High];

    pub fn name(self) -> &'static str {
        match self {
            FoamSize::None => "NONE",
            FoamSize::Low => "LOW",
            FoamSize::Medium => "MEDIUM",
            FoamSize::High => "HIGH",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Machine state structure - current resource levels and last brew configuration
///
/// Setters are trusted primitives: they never clamp, so callers must validate
/// values first. The name-based setters for enumerated fields keep the previous
/// value when the name is unknown instead of failing, which existing clients
/// rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineState {
    milk_level: i32,
    water_level: i32,
    beans_level: i32,
    clean_level: i32,
    coffee_type: CoffeeType,
    cup_size: CupSize,
    foam_size: FoamSize,
    coffee_strength: i32,
}

impl MachineState {
    /// Create a machine with every container full and a freshly cleaned brew unit
    pub fn new() -> Self {
        Self {
            milk_level: FULL_LEVEL,
            water_level: FULL_LEVEL,
            beans_level: FULL_LEVEL,
            clean_level: FULL_LEVEL,
            coffee_type: CoffeeType::CaffeLatte,
            cup_size: CupSize::S,
            foam_size: FoamSize::None,
            coffee_strength: 60,
        }
    }

    pub fn milk_level(&self) -> i32 {
        self.milk_level
    }

    pub fn set_milk_level(&mut self, value: i32) {
        self.milk_level = value;
    }

    pub fn water_level(&self) -> i32 {
        self.water_level
    }

    pub fn set_water_level(&mut self, value: i32) {
        self.water_level = value;
    }

    pub fn beans_level(&self) -> i32 {
        self.beans_level
    }

    pub fn set_beans_level(&mut self, value: i32) {
        self.beans_level = value;
    }

    pub fn clean_level(&self) -> i32 {
        self.clean_level
    }

    pub fn set_clean_level(&mut self, value: i32) {
        self.clean_level = value;
    }

    pub fn coffee_strength(&self) -> i32 {
        self.coffee_strength
    }

    pub fn set_coffee_strength(&mut self, value: i32) {
        self.coffee_strength = value;
    }

    pub fn coffee_type(&self) -> CoffeeType {
        self.coffee_type
    }

    /// Select a coffee type by name; unknown names leave the selection unchanged
    pub fn set_coffee_type(&mut self, name: &str) {
        if let Some(coffee_type) = CoffeeType::from_name(name) {
            self.coffee_type = coffee_type;
        }
    }

    pub fn cup_size(&self) -> CupSize {
        self.cup_size
    }

    /// Select a cup size by name; unknown names leave the selection unchanged
    pub fn set_cup_size(&mut self, name: &str) {
        if let Some(cup_size) = CupSize::from_name(name) {
            self.cup_size = cup_size;
        }
    }

    pub fn foam_size(&self) -> FoamSize {
        self.foam_size
    }

    /// Select a foam size by name; unknown names leave the selection unchanged
    pub fn set_foam_size(&mut self, name: &str) {
        if let Some(foam_size) = FoamSize::from_name(name) {
            self.foam_size = foam_size;
        }
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_machine_is_full_and_clean() {
        let state = MachineState::new();
        assert_eq!(state.milk_level(), 100);
        assert_eq!(state.water_level(), 100);
        assert_eq!(state.beans_level(), 100);
        assert_eq!(state.clean_level(), 100);
        assert_eq!(state.coffee_type(), CoffeeType::CaffeLatte);
    }

    #[test]
    fn unknown_names_keep_previous_selection() {
        let mut state = MachineState::new();
        state.set_coffee_type("DOPPIO");
        state.set_cup_size("XL");
        state.set_foam_size("HIGH");

        state.set_coffee_type("MOCHA");
        state.set_cup_size("XXL");
        state.set_foam_size("");

        assert_eq!(state.coffee_type(), CoffeeType::Doppio);
        assert_eq!(state.cup_size(), CupSize::Xl);
        assert_eq!(state.foam_size(), FoamSize::High);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(CoffeeType::from_name("espresso"), None);
        assert_eq!(CoffeeType::from_name("ESPRESSO"), Some(CoffeeType::Espresso));
        assert_eq!(CupSize::from_name("xl"), None);
    }

    #[test]
    fn setters_do_not_clamp() {
        let mut state = MachineState::new();
        state.set_clean_level(-5);
        assert_eq!(state.clean_level(), -5);
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(MachineState::new()).unwrap();
        assert_eq!(json["coffeeType"], "CAFFE_LATTE");
        assert_eq!(json["cupSize"], "S");
        assert_eq!(json["milkLevel"], 100);
    }
}
