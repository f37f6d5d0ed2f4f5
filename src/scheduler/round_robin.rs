use super::{queue::RunQueue, validate, Process, Scheduler, SimulationError, SimulationResult, Time};
use log::info;

/// Textbook Round Robin over a single FIFO ready queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobinScheduler;

impl RoundRobinScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "Round Robin Scheduler";

    fn simulate(
        &self,
        processes: &[Process],
        quantum: Time,
    ) -> Result<SimulationResult, SimulationError> {
        validate(processes, quantum)?;

        let mut queue = RunQueue::new(processes);
        let mut completed = 0;

        while completed < queue.len() {
            queue.admit_arrivals();

            let Some(index) = queue.next_ready() else {
                if !queue.has_pending_arrivals() {
                    break;
                }
                queue.idle_until_next_arrival();
                continue;
            };

            let finished = queue.run_slice(index, quantum);

            // Whatever arrived during the slice queues up ahead of the process that just yielded
            queue.admit_arrivals();

            if finished {
                completed += 1;
            } else {
                queue.requeue(index);
            }
        }

        let result = queue.into_result();
        info!(
            "{}: {} processes, quantum={}, awt={:.2}, atat={:.2}",
            Self::NAME,
            processes.len(),
            quantum,
            result.average_waiting_time(),
            result.average_turnaround_time()
        );
        Ok(result)
    }
}
