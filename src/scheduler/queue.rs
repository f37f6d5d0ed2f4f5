use super::{GanttChart, MetricsCalculator, Process, ProcessState, SimulationResult, Time};
use log::{debug, trace};
use std::collections::VecDeque;

/// Private working set of a single run.
///
/// Processes are addressed by their index in arrival order. The job pool
/// holds the processes that have not arrived yet, the ready queue holds the
/// arrived ones waiting for the CPU.
pub(super) struct RunQueue {
    processes: Vec<Process>,
    states: Vec<ProcessState>,
    job_pool: VecDeque<usize>,
    ready_queue: VecDeque<usize>,
    clock: Time,
    gantt: GanttChart,
}

impl RunQueue {
    pub fn new(processes: &[Process]) -> Self {
        let mut processes = processes.to_vec();
        // Stable: arrival ties keep their input order.
        processes.sort_by_key(Process::arrival_time);

        let states = processes.iter().map(ProcessState::new).collect();
        let job_pool = (0..processes.len()).collect();

        Self {
            processes,
            states,
            job_pool,
            ready_queue: VecDeque::new(),
            clock: 0,
            gantt: GanttChart::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn clock(&self) -> Time {
        self.clock
    }

    pub fn state(&self, index: usize) -> &ProcessState {
        &self.states[index]
    }

    #[cfg(test)]
    pub fn gantt(&self) -> &GanttChart {
        &self.gantt
    }

    /// Moves every process that has arrived by now into the ready queue,
    /// keeping job pool order.
    pub fn admit_arrivals(&mut self) {
        while let Some(&index) = self.job_pool.front() {
            if self.processes[index].arrival_time() > self.clock {
                break;
            }
            self.job_pool.pop_front();
            self.ready_queue.push_back(index);
        }
    }

    pub fn has_pending_arrivals(&self) -> bool {
        !self.job_pool.is_empty()
    }

    pub fn next_ready(&mut self) -> Option<usize> {
        self.ready_queue.pop_front()
    }

    pub fn requeue(&mut self, index: usize) {
        self.ready_queue.push_back(index);
    }

    /// Lets the CPU sit idle until the next process in the job pool arrives.
    pub fn idle_until_next_arrival(&mut self) {
        if let Some(&index) = self.job_pool.front() {
            let arrival = self.processes[index].arrival_time();
            trace!("cpu idle {}..{}", self.clock, arrival);
            self.clock = self.clock.max(arrival);
        }
    }

    /// Runs the process for at most `quantum` and records the slice.
    /// Returns true once the process has no burst left.
    pub fn run_slice(&mut self, index: usize, quantum: Time) -> bool {
        let process = &self.processes[index];
        let state = &mut self.states[index];

        let start = self.clock;
        let slice = state.slice(quantum);
        self.clock += slice;
        state.consume(slice);
        self.gantt.record(process.name(), start, self.clock);
        trace!("{} ran {}..{}", process.name(), start, self.clock);

        if state.is_finished() {
            state.complete(self.clock);
            debug!("{} completed at t={}", process.name(), self.clock);
            true
        } else {
            false
        }
    }

    pub fn into_result(mut self) -> SimulationResult {
        let averages = MetricsCalculator::finalize(&self.processes, &mut self.states);
        SimulationResult::new(self.processes, &self.states, self.gantt, averages)
    }
}
