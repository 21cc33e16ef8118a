//! Rejection taxonomy for machine operations

use thiserror::Error;

/// A precondition that blocked a brew
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortfall {
    Milk,
    Water,
    Beans,
    Clean,
}

impl Shortfall {
    /// Key used for this shortfall in rejection bodies
    pub fn status_key(self) -> &'static str {
        match self {
            Shortfall::Milk => "statusMilk",
            Shortfall::Water => "statusWater",
            Shortfall::Beans => "statusBeans",
            Shortfall::Clean => "statusClean",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Shortfall::Milk => "Not enough milk, please refill",
            Shortfall::Water => "Not enough water, please refill",
            Shortfall::Beans => "Not enough beans, please refill",
            Shortfall::Clean => "Machine is dirty, please clean it",
        }
    }
}

/// Why an operation on the machine was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("invalid coffee type: {0:?}")]
    InvalidCoffeeType(String),

    #[error("invalid cup size: {0:?}")]
    InvalidCupSize(String),

    #[error("invalid foam size: {0:?}")]
    InvalidFoamSize(String),

    #[error("invalid coffee strength {0}, expected a value between 45 and 100")]
    InvalidCoffeeStrength(i64),

    /// Every failed resource or cleanliness precondition, reported together
    #[error("cannot brew: {}", describe(.0))]
    Unavailable(Vec<Shortfall>),

    #[error("invalid recipe parameters: {}", .0.join("; "))]
    InvalidRecipeParameters(Vec<String>),

    #[error("invalid resource type: {0:?}")]
    InvalidResourceType(String),

    #[error("machine state lock poisoned")]
    StatePoisoned,
}

impl MachineError {
    /// Stable name of the rejection kind
    pub fn kind(&self) -> &'static str {
        match self {
            MachineError::MalformedRequest(_) => "MalformedRequest",
            MachineError::InvalidCoffeeType(_) => "InvalidCoffeeType",
            MachineError::InvalidCupSize(_) => "InvalidCupSize",
            MachineError::InvalidFoamSize(_) => "InvalidFoamSize",
            MachineError::InvalidCoffeeStrength(_) => "InvalidCoffeeStrength",
            MachineError::Unavailable(_) if self.is_not_clean() => "NotClean",
            MachineError::Unavailable(_) => "InsufficientResources",
            MachineError::InvalidRecipeParameters(_) => "InvalidRecipeParameters",
            MachineError::InvalidResourceType(_) => "InvalidResourceType",
            MachineError::StatePoisoned => "StatePoisoned",
        }
    }

    /// Every rejection kind that applies, primary kind first
    ///
    /// A dirty machine reports `NotClean` even when containers are short too.
    pub fn kinds(&self) -> Vec<&'static str> {
        match self {
            MachineError::Unavailable(shortfalls) => {
                let mut kinds = Vec::new();
                if self.is_not_clean() {
                    kinds.push("NotClean");
                }
                if shortfalls.iter().any(|s| *s != Shortfall::Clean) {
                    kinds.push("InsufficientResources");
                }
                kinds
            }
            _ => vec![self.kind()],
        }
    }

    /// Whether the brew was blocked by a dirty machine
    pub fn is_not_clean(&self) -> bool {
        matches!(self, MachineError::Unavailable(s) if s.contains(&Shortfall::Clean))
    }
}

fn describe(shortfalls: &[Shortfall]) -> String {
    shortfalls
        .iter()
        .map(|s| s.message())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type MachineResult<T> = Result<T, MachineError>;
