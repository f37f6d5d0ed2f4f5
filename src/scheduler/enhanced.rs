use super::{queue::RunQueue, validate, Process, Scheduler, SimulationError, SimulationResult, Time};
use log::{debug, info};

/// Two-phase Round Robin.
///
/// The first pass hands every process exactly one slice of the base quantum
/// in arrival order. The completion pass then runs whatever is left, shortest
/// remaining burst first, with a doubled quantum and without preempting
/// between processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnhancedRoundRobinScheduler;

impl EnhancedRoundRobinScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for EnhancedRoundRobinScheduler {
    const NAME: &'static str = "Enhanced Round Robin Scheduler";

    fn simulate(
        &self,
        processes: &[Process],
        quantum: Time,
    ) -> Result<SimulationResult, SimulationError> {
        validate(processes, quantum)?;
        let doubled_quantum = quantum.checked_mul(2).ok_or_else(|| {
            SimulationError::invalid_argument(format!("quantum {quantum} is too large to double"))
        })?;

        let mut queue = RunQueue::new(processes);
        let executed = FirstPass::new(quantum).run(&mut queue);
        let leftovers = CompletionPass::new(doubled_quantum).run(&mut queue);
        debug!(
            "{} of {} processes needed the completion pass",
            leftovers.len(),
            executed.len()
        );

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

/// Phase one: at most one slice per process.
pub(super) struct FirstPass {
    quantum: Time,
}

impl FirstPass {
    pub fn new(quantum: Time) -> Self {
        Self { quantum }
    }

    /// Returns the executed-once flag of every process, by arrival index.
    ///
    /// A process that finishes inside its single slice still counts as
    /// executed and is simply never queued again. Processes are never
    /// requeued in this phase either way.
    #[must_use]
    pub fn run(&self, queue: &mut RunQueue) -> Vec<bool> {
        let mut executed = vec![false; queue.len()];
        let mut executed_count = 0;

        while executed_count < queue.len() {
            queue.admit_arrivals();

            let Some(index) = queue.next_ready() else {
                if !queue.has_pending_arrivals() {
                    break;
                }
                queue.idle_until_next_arrival();
                continue;
            };

            queue.run_slice(index, self.quantum);
            debug_assert!(!executed[index], "first pass ran a process twice");
            executed[index] = true;
            executed_count += 1;
        }

        debug!(
            "first pass done at t={} ({} processes executed)",
            queue.clock(),
            executed_count
        );
        executed
    }
}

/// Phase two: shortest remaining burst first, each process to completion.
pub(super) struct CompletionPass {
    quantum: Time,
}

impl CompletionPass {
    pub fn new(quantum: Time) -> Self {
        Self { quantum }
    }

    /// Returns the arrival indices of the processes it ran, in run order.
    #[must_use]
    pub fn run(&self, queue: &mut RunQueue) -> Vec<usize> {
        let mut leftovers: Vec<usize> = (0..queue.len())
            .filter(|&index| !queue.state(index).is_finished())
            .collect();
        // Stable: equal remainders keep first pass order.
        leftovers.sort_by_key(|&index| queue.state(index).remaining_burst_time());

        debug!(
            "completion pass: {} processes, quantum={}",
            leftovers.len(),
            self.quantum
        );

        for &index in &leftovers {
            while !queue.run_slice(index, self.quantum) {}
        }
        leftovers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blocks(result: &SimulationResult) -> Vec<(&str, Time, Time)> {
        result
            .gantt_chart()
            .iter()
            .map(|block| (block.process_name(), block.start(), block.end()))
            .collect()
    }

    fn workload() -> Vec<Process> {
        vec![
            Process::new("A", 0, 2),
            Process::new("B", 0, 9),
            Process::new("C", 1, 5),
            Process::new("D", 2, 7),
        ]
    }

    #[test]
    fn test_first_pass_gives_one_slice_each() {
        let mut queue = RunQueue::new(&workload());
        let executed = FirstPass::new(2).run(&mut queue);

        assert_eq!(executed, [true, true, true, true]);
        assert_eq!(queue.gantt().len(), 4);
        assert_eq!(queue.clock(), 8);
        let remaining: Vec<_> = (0..4)
            .map(|index| queue.state(index).remaining_burst_time())
            .collect();
        assert_eq!(remaining, [0, 7, 3, 5]);
    }

    // A process that finishes within its first slice is done for good: the
    // first pass records its completion and never queues it again.
    #[test]
    fn test_first_pass_completes_short_process_without_revisit() {
        let mut queue = RunQueue::new(&workload());
        let _ = FirstPass::new(2).run(&mut queue);

        assert!(queue.state(0).is_finished());
        assert_eq!(queue.state(0).completion_time(), Some(2));
        assert_eq!(queue.gantt().time_for("A"), 2);
    }

    #[test]
    fn test_first_pass_waits_for_late_arrivals() {
        let processes = vec![Process::new("A", 4, 3), Process::new("B", 10, 2)];
        let mut queue = RunQueue::new(&processes);
        let executed = FirstPass::new(2).run(&mut queue);

        assert_eq!(executed, [true, true]);
        assert_eq!(queue.clock(), 12);
        assert_eq!(queue.gantt().blocks()[1].start(), 10);
    }

    #[test]
    fn test_completion_pass_orders_by_remaining_burst() {
        let mut queue = RunQueue::new(&workload());
        let _ = FirstPass::new(2).run(&mut queue);
        let order = CompletionPass::new(4).run(&mut queue);

        // C (3 left), then D (5 left), then B (7 left)
        assert_eq!(order, [2, 3, 1]);
        assert!((0..4).all(|index| queue.state(index).is_finished()));
    }

    #[test]
    fn test_full_run() {
        let result = EnhancedRoundRobinScheduler::new()
            .simulate(&workload(), 2)
            .unwrap();

        assert_eq!(
            blocks(&result),
            [
                ("A", 0, 2),
                ("B", 2, 4),
                ("C", 4, 6),
                ("D", 6, 8),
                ("C", 8, 11),
                ("D", 11, 15),
                ("D", 15, 16),
                ("B", 16, 20),
                ("B", 20, 23),
            ]
        );
        assert_eq!(result.process("B").unwrap().completion_time(), 23);
        assert_eq!(result.process("D").unwrap().waiting_time(), 7);
        assert_eq!(result.average_waiting_time(), 6.5);
        assert_eq!(result.average_turnaround_time(), 12.25);
    }

    #[test]
    fn test_leftover_after_idle_gap() {
        let processes = vec![Process::new("A", 4, 3), Process::new("B", 10, 2)];
        let result = EnhancedRoundRobinScheduler::new()
            .simulate(&processes, 2)
            .unwrap();

        assert_eq!(blocks(&result), [("A", 4, 6), ("B", 10, 12), ("A", 12, 13)]);
        assert_eq!(result.average_waiting_time(), 3.0);
    }

    #[test]
    fn test_rejects_quantum_that_cannot_double() {
        let processes = vec![Process::immediate("A", 1)];
        assert!(EnhancedRoundRobinScheduler::new()
            .simulate(&processes, Time::MAX)
            .is_err());
    }
}
