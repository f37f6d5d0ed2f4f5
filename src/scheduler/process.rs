use super::{SimulationError, Time};
use serde::{Deserialize, Serialize};

/// Immutable description of a process handed to a scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    name: String,
    arrival_time: Time,
    burst_time: Time,
}

impl Process {
    pub fn new(name: &str, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            name: name.to_owned(),
            arrival_time,
            burst_time,
        }
    }

    /// A process that is ready at time zero.
    pub fn immediate(name: &str, burst_time: Time) -> Self {
        Process::new(name, 0, burst_time)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrival_time(&self) -> Time {
        self.arrival_time
    }

    pub fn burst_time(&self) -> Time {
        self.burst_time
    }

    pub(super) fn validate(&self) -> Result<(), SimulationError> {
        if self.name.is_empty() {
            return Err(SimulationError::invalid_argument(
                "process name must not be empty",
            ));
        }
        if self.arrival_time < 0 {
            return Err(SimulationError::invalid_argument(format!(
                "process {} has negative arrival time {}",
                self.name, self.arrival_time
            )));
        }
        if self.burst_time <= 0 {
            return Err(SimulationError::invalid_argument(format!(
                "process {} has non-positive burst time {}",
                self.name, self.burst_time
            )));
        }
        Ok(())
    }
}

/// Per-run bookkeeping for one process, kept apart from its descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessState {
    remaining_burst_time: Time,
    completion_time: Option<Time>,
    turnaround_time: Time,
    waiting_time: Time,
}

impl ProcessState {
    pub fn new(process: &Process) -> Self {
        Self {
            remaining_burst_time: process.burst_time(),
            completion_time: None,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    pub fn remaining_burst_time(&self) -> Time {
        self.remaining_burst_time
    }

    pub fn completion_time(&self) -> Option<Time> {
        self.completion_time
    }

    pub fn turnaround_time(&self) -> Time {
        self.turnaround_time
    }

    pub fn waiting_time(&self) -> Time {
        self.waiting_time
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_burst_time == 0
    }

    // Length of the slice this process gets under `quantum`.
    pub(super) fn slice(&self, quantum: Time) -> Time {
        quantum.min(self.remaining_burst_time)
    }

    pub(super) fn consume(&mut self, executed: Time) {
        debug_assert!(executed <= self.remaining_burst_time);
        self.remaining_burst_time -= executed;
    }

    pub(super) fn complete(&mut self, at: Time) {
        debug_assert!(self.completion_time.is_none(), "completion recorded twice");
        self.completion_time = Some(at);
    }

    pub(super) fn set_metrics(&mut self, turnaround_time: Time, waiting_time: Time) {
        self.turnaround_time = turnaround_time;
        self.waiting_time = waiting_time;
    }
}

/// A descriptor together with the state a finished run left it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledProcess {
    #[serde(flatten)]
    process: Process,
    completion_time: Time,
    turnaround_time: Time,
    waiting_time: Time,
}

impl ScheduledProcess {
    pub(super) fn new(process: Process, state: &ProcessState) -> Self {
        Self {
            process,
            completion_time: state.completion_time().unwrap_or_default(),
            turnaround_time: state.turnaround_time(),
            waiting_time: state.waiting_time(),
        }
    }

    pub fn process(&self) -> &Process {
        &self.process
    }

    pub fn name(&self) -> &str {
        self.process.name()
    }

    pub fn arrival_time(&self) -> Time {
        self.process.arrival_time()
    }

    pub fn burst_time(&self) -> Time {
        self.process.burst_time()
    }

    pub fn completion_time(&self) -> Time {
        self.completion_time
    }

    pub fn turnaround_time(&self) -> Time {
        self.turnaround_time
    }

    pub fn waiting_time(&self) -> Time {
        self.waiting_time
    }
}
