use super::{Averages, GanttChart, Process, ProcessState, ScheduledProcess};
use serde::Serialize;

/// Everything a finished run produced. Processes are listed in arrival
/// order, Gantt blocks in execution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationResult {
    final_processes: Vec<ScheduledProcess>,
    gantt_chart: GanttChart,
    average_waiting_time: f64,
    average_turnaround_time: f64,
}

impl SimulationResult {
    pub(super) fn new(
        processes: Vec<Process>,
        states: &[ProcessState],
        gantt_chart: GanttChart,
        averages: Averages,
    ) -> Self {
        let final_processes = processes
            .into_iter()
            .zip(states)
            .map(|(process, state)| ScheduledProcess::new(process, state))
            .collect();

        Self {
            final_processes,
            gantt_chart,
            average_waiting_time: averages.waiting_time,
            average_turnaround_time: averages.turnaround_time,
        }
    }

    pub fn final_processes(&self) -> &[ScheduledProcess] {
        &self.final_processes
    }

    pub fn gantt_chart(&self) -> &GanttChart {
        &self.gantt_chart
    }

    pub fn average_waiting_time(&self) -> f64 {
        self.average_waiting_time
    }

    pub fn average_turnaround_time(&self) -> f64 {
        self.average_turnaround_time
    }

    pub fn process(&self, name: &str) -> Option<&ScheduledProcess> {
        self.final_processes
            .iter()
            .find(|process| process.name() == name)
    }
}
