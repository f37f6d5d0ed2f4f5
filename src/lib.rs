//! Round Robin CPU scheduling simulator.
//!
//! Two disciplines are available: a textbook Round Robin and an enhanced
//! two-phase variant. Each run produces per-process completion, turnaround
//! and waiting times, a Gantt chart and the averages over all processes.

pub mod config;
pub mod scheduler;

pub use config::SimulationConfig;
pub use scheduler::{
    Algorithm, EnhancedRoundRobinScheduler, GanttBlock, GanttChart, Process,
    RoundRobinScheduler, ScheduledProcess, Scheduler, SimulationError, SimulationResult, Time,
};
