use super::{Process, ProcessState, Time};

/// Mean waiting and turnaround time over every process of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Averages {
    pub waiting_time: f64,
    pub turnaround_time: f64,
}

pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Fills in turnaround and waiting time for every completed process and
    /// returns the run's averages. Waiting time always uses the original
    /// burst time, never what is left of it.
    pub fn finalize(processes: &[Process], states: &mut [ProcessState]) -> Averages {
        for (process, state) in processes.iter().zip(states.iter_mut()) {
            if let Some(completion_time) = state.completion_time() {
                let turnaround_time = completion_time - process.arrival_time();
                state.set_metrics(turnaround_time, turnaround_time - process.burst_time());
            }
        }

        Averages {
            waiting_time: Self::mean(states.iter().map(ProcessState::waiting_time)),
            turnaround_time: Self::mean(states.iter().map(ProcessState::turnaround_time)),
        }
    }

    /// Arithmetic mean, 0 for no values.
    pub fn mean<I>(values: I) -> f64
    where
        I: IntoIterator<Item = Time>,
    {
        // Widened so many long turnarounds cannot overflow the sum.
        let (sum, count) = values
            .into_iter()
            .fold((0i128, 0usize), |(sum, count), value| {
                (sum + i128::from(value), count + 1)
            });

        if count == 0 {
            0.0
        } else {
            sum as f64 / count as f64
        }
    }
}
