use super::{
    display::DisplayTerminal, Algorithm, Process, SimulationError, SimulationResult, Time,
};
use crate::config::SimulationConfig;
use log::debug;
use std::io;

pub enum RunnerEvent {
    Quit,
    SwitchAlgorithm,
    IncreaseQuantum,
    DecreaseQuantum,
    None,
}

/// Interactive front end: shows one result and re-runs the simulation
/// whenever a parameter changes. The caller's descriptors are never
/// touched, so every run starts from the same input.
pub struct SimulationRunner {
    terminal: DisplayTerminal,
    processes: Vec<Process>,
    algorithm: Algorithm,
    quantum: Time,
    outcome: Result<SimulationResult, SimulationError>,
}

impl SimulationRunner {
    pub fn new(config: SimulationConfig) -> Result<Self, io::Error> {
        let terminal = DisplayTerminal::new()?;
        let outcome = config.algorithm.simulate(&config.processes, config.quantum);

        Ok(Self {
            terminal,
            processes: config.processes,
            algorithm: config.algorithm,
            quantum: config.quantum,
            outcome,
        })
    }

    fn resimulate(&mut self) {
        debug!(
            "re-running {} with quantum={}",
            self.algorithm, self.quantum
        );
        self.outcome = self.algorithm.simulate(&self.processes, self.quantum);
    }

    // Returns false if the program should quit
    pub fn run(&mut self) -> Result<bool, io::Error> {
        self.terminal
            .draw(self.algorithm, self.quantum, &self.outcome)?;

        match self.terminal.get_input() {
            RunnerEvent::Quit => return Ok(false),
            RunnerEvent::SwitchAlgorithm => {
                self.algorithm = self.algorithm.toggled();
                self.resimulate();
            }
            RunnerEvent::IncreaseQuantum => {
                self.quantum = self.quantum.saturating_add(1);
                self.resimulate();
            }
            RunnerEvent::DecreaseQuantum if self.quantum > 1 => {
                self.quantum -= 1;
                self.resimulate();
            }
            _ => {}
        }
        Ok(true)
    }
}
