use anyhow::Context;
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use round_robin_sim::{
    scheduler::{report, SimulationRunner},
    Algorithm, SimulationConfig, Time,
};
use std::{io, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Tui,
    Text,
    Json,
}

/// Round Robin scheduling simulator
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// JSON file with the algorithm, quantum and processes to simulate
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scheduling algorithm (standard or enhanced), overrides the config file
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Time quantum, overrides the config file
    #[arg(short, long, allow_negative_numbers = true)]
    quantum: Option<Time>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tui)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(quantum) = args.quantum {
        config.quantum = quantum;
    }

    match args.format {
        OutputFormat::Text => {
            let result = config.algorithm.simulate(&config.processes, config.quantum)?;
            println!("{}", config.algorithm.name());
            print!("{}", report::render(&result));
        }
        OutputFormat::Json => {
            let result = config.algorithm.simulate(&config.processes, config.quantum)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Tui => {
            execute!(io::stdout(), Clear(ClearType::All))?;

            let mut runner =
                SimulationRunner::new(config).context("failed to set up the terminal")?;
            while runner.run()? {}
            drop(runner);

            execute!(io::stdout(), Clear(ClearType::All))?;
        }
    }
    Ok(())
}
