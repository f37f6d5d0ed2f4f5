use thiserror::Error;

/// Errors a simulation run can fail with. Runs never return partial results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SimulationError {
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
