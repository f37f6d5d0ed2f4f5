mod display;
mod enhanced;
mod error;
mod gantt;
mod metrics;
mod process;
mod queue;
pub mod report;
mod result;
mod round_robin;
mod runner;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

pub use display::DisplayTerminal;
pub use enhanced::EnhancedRoundRobinScheduler;
pub use error::SimulationError;
pub use gantt::{GanttBlock, GanttChart};
pub use metrics::{Averages, MetricsCalculator};
pub use process::{Process, ProcessState, ScheduledProcess};
pub use result::SimulationResult;
pub use round_robin::RoundRobinScheduler;
pub use runner::SimulationRunner;

/// Simulation clock unit.
pub type Time = i64;

pub trait Scheduler {
    const NAME: &'static str;

    /// Runs the whole workload to completion on a private copy of `processes`.
    fn simulate(
        &self,
        processes: &[Process],
        quantum: Time,
    ) -> Result<SimulationResult, SimulationError>;
}

/// Shared preconditions of every scheduler.
fn validate(processes: &[Process], quantum: Time) -> Result<(), SimulationError> {
    if quantum <= 0 {
        return Err(SimulationError::invalid_argument(format!(
            "time quantum must be positive, got {quantum}"
        )));
    }
    processes.iter().try_for_each(Process::validate)?;

    // The clock never passes the last arrival plus the total burst.
    let horizon = processes
        .iter()
        .try_fold(0, |total: Time, process| total.checked_add(process.burst_time()))
        .and_then(|total| {
            let last_arrival = processes.iter().map(Process::arrival_time).max();
            total.checked_add(last_arrival.unwrap_or_default())
        });
    if horizon.is_none() {
        return Err(SimulationError::invalid_argument(
            "workload does not fit the simulation clock",
        ));
    }
    Ok(())
}

/// Which scheduler a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
    #[default]
    Standard,
    Enhanced,
}

impl Algorithm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Enhanced => "enhanced",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => RoundRobinScheduler::NAME,
            Self::Enhanced => EnhancedRoundRobinScheduler::NAME,
        }
    }

    pub const fn toggled(&self) -> Self {
        match self {
            Self::Standard => Self::Enhanced,
            Self::Enhanced => Self::Standard,
        }
    }

    pub fn simulate(
        &self,
        processes: &[Process],
        quantum: Time,
    ) -> Result<SimulationResult, SimulationError> {
        match self {
            Self::Standard => RoundRobinScheduler::new().simulate(processes, quantum),
            Self::Enhanced => EnhancedRoundRobinScheduler::new().simulate(processes, quantum),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" | "std" | "rr" => Ok(Self::Standard),
            "enhanced" | "modified" | "err" => Ok(Self::Enhanced),
            _ => Err(format!(
                "Invalid algorithm '{}'. Valid: standard, enhanced",
                s
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
