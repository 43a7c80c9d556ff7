use thiserror::Error;

/// Errors raised while validating or loading a simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A survival probability outside `(0, 1]` (or not finite).
    #[error("Invalid probability for {name}: {value} (must be in (0.0, 1.0])")]
    InvalidProbability { name: &'static str, value: f64 },

    /// Any other out-of-range scalar parameter.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The configuration file could not be read or written.
    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for a `SimulationConfig`.
    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while stepping a simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Repeated survival passes did not bring the population down to the
    /// carrying capacity within the configured number of passes.
    #[error(
        "Capacity enforcement did not converge in generation {generation}: \
         {size} organisms still above capacity {capacity} after {passes} passes"
    )]
    CapacityNotConverged {
        generation: usize,
        passes: usize,
        size: usize,
        capacity: usize,
    },

    /// `step` was called after the configured number of generations.
    #[error("Simulation already finished after {generations} generations")]
    AlreadyFinished { generations: usize },

    /// `step` was called after an earlier step failed.
    #[error("Simulation halted in generation {generation} after a failed step")]
    Halted { generation: usize },
}
