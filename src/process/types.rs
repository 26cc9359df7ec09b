/*!
 * Process Types
 * The closed set of process classes and their scheduling parameters
 */

use crate::core::errors::SimulationError;
use crate::core::types::{Priority, Tick};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Process class
///
/// Fixed, closed set; a process's class never changes after creation and
/// determines both its priority and its total CPU demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessClass {
    /// Priority 2, 10 ticks of CPU demand, forks PB children
    Pa,
    /// Priority 3 (lowest), 7 ticks of CPU demand, forks PC children
    Pb,
    /// Priority 1 (highest), 5 ticks of CPU demand, never forks
    Pc,
}

impl ProcessClass {
    /// Scheduling priority (smaller = higher): PC > PA > PB
    pub fn priority(self) -> Priority {
        match self {
            ProcessClass::Pc => 1,
            ProcessClass::Pa => 2,
            ProcessClass::Pb => 3,
        }
    }

    /// Total CPU ticks required to reach completion
    pub fn total_ticks(self) -> Tick {
        match self {
            ProcessClass::Pa => 10,
            ProcessClass::Pb => 7,
            ProcessClass::Pc => 5,
        }
    }

    /// Class of the child spawned at a fork milestone, if this class forks
    pub fn child_class(self) -> Option<ProcessClass> {
        match self {
            ProcessClass::Pa => Some(ProcessClass::Pb),
            ProcessClass::Pb => Some(ProcessClass::Pc),
            ProcessClass::Pc => None,
        }
    }
}

impl fmt::Display for ProcessClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessClass::Pa => "PA",
            ProcessClass::Pb => "PB",
            ProcessClass::Pc => "PC",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ProcessClass {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PA" => Ok(ProcessClass::Pa),
            "PB" => Ok(ProcessClass::Pb),
            "PC" => Ok(ProcessClass::Pc),
            other => Err(SimulationError::UnknownClass(other.to_string())),
        }
    }
}
