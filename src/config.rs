use crate::scheduler::{Algorithm, Process, Time};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};
use thiserror::Error;

pub const DEFAULT_QUANTUM: Time = 3;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Inputs of one simulation run, as read from a JSON file.
///
/// ```json
/// {
///   "algorithm": "enhanced",
///   "quantum": 3,
///   "processes": [{ "name": "P1", "arrival_time": 0, "burst_time": 12 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub algorithm: Algorithm,
    pub quantum: Time,
    pub processes: Vec<Process>,
}

impl SimulationConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// The five-process workload used when nothing else is given.
    pub fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 12),
            Process::new("P2", 2, 8),
            Process::new("P3", 3, 5),
            Process::new("P4", 5, 2),
            Process::new("P5", 9, 1),
        ]
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            quantum: DEFAULT_QUANTUM,
            processes: Self::sample_processes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: SimulationConfig = serde_json::from_str(r#"{"quantum": 4}"#).unwrap();

        assert_eq!(config.quantum, 4);
        assert_eq!(config.algorithm, Algorithm::Standard);
        assert_eq!(config.processes, SimulationConfig::sample_processes());
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let parsed = serde_json::from_str::<SimulationConfig>(r#"{"algorithm": "fifo"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = SimulationConfig::from_file("/nonexistent/rr-sim.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
